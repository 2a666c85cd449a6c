use super::*;

/// Tests replacing an account's permission set.
///
/// Verifies that `set_permissions` fully replaces previous grants rather
/// than appending.
///
/// Expected: Ok with only the new grants present
#[tokio::test]
async fn replaces_permission_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin_account::create_admin(db).await?;

    let repo = AdminRepository::new(db);
    repo.set_permissions(admin.id, &["manage_users".to_string()])
        .await?;
    repo.set_permissions(
        admin.id,
        &["manage_content".to_string(), "manage_billing".to_string()],
    )
    .await?;

    let mut granted = repo.permissions_for(admin.id).await?;
    granted.sort();

    assert_eq!(granted, vec!["manage_billing", "manage_content"]);

    Ok(())
}

/// Tests clearing all permissions.
///
/// Expected: Ok with an empty grant list
#[tokio::test]
async fn clears_permissions_with_empty_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin_account::create_admin(db).await?;
    factory::admin_account::create_permission(db, admin.id, "manage_admins").await?;

    let repo = AdminRepository::new(db);
    repo.set_permissions(admin.id, &[]).await?;

    assert!(repo.permissions_for(admin.id).await?.is_empty());

    Ok(())
}
