use crate::server::{
    controller::auth::SESSION_AUTH_ADMIN_ID,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
};
use test_utils::{builder::TestBuilder, error::TestError, factory};

/// Tests the guard with no login in the session.
///
/// Expected: Err(AuthError::AdminNotInSession)
#[tokio::test]
async fn rejects_request_without_session_login() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_admin_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotInSession))
    ));

    Ok(())
}

/// Tests the guard with a stale session for a deleted account.
///
/// Expected: Err(AuthError::AdminNotInDatabase)
#[tokio::test]
async fn rejects_stale_session_for_deleted_account() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_admin_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    session
        .insert(SESSION_AUTH_ADMIN_ID, 999)
        .await
        .expect("session insert");

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests a logged-in admin with no permission requirements.
///
/// Expected: Ok with the account returned
#[tokio::test]
async fn passes_logged_in_admin_without_requirements() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_admin_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    let admin = factory::admin_account::create_admin(db).await?;
    session
        .insert(SESSION_AUTH_ADMIN_ID, admin.id)
        .await
        .expect("session insert");

    let resolved = AuthGuard::new(db, session).require(&[]).await;

    assert_eq!(resolved.ok().map(|account| account.id), Some(admin.id));

    Ok(())
}

/// Tests permission enforcement.
///
/// Verifies that a granted permission passes and a missing one is denied.
///
/// Expected: Ok for manage_content, Err(AccessDenied) for manage_admins
#[tokio::test]
async fn enforces_permission_grants() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_admin_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    let admin = factory::admin_account::create_admin(db).await?;
    factory::admin_account::create_permission(db, admin.id, "manage_content").await?;
    session
        .insert(SESSION_AUTH_ADMIN_ID, admin.id)
        .await
        .expect("session insert");

    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::ManageContent]).await.is_ok());

    let denied = guard.require(&[Permission::ManageAdmins]).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}
