use super::*;

/// Tests account creation and username lookup.
///
/// Expected: Ok with the account retrievable by username
#[tokio::test]
async fn creates_and_finds_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let account = repo
        .create(
            "manager".to_string(),
            "$argon2id$hash".to_string(),
            "운영자".to_string(),
        )
        .await?;

    let found = repo.find_by_username("manager").await?;
    assert_eq!(found.map(|account| account.id), Some(account.id));

    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

/// Tests the account count used by the bootstrap check.
///
/// Expected: 0 on an empty table, 1 after a create
#[tokio::test]
async fn counts_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::admin_account::create_admin(db).await?;
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that deleting an account removes its permission rows.
///
/// Expected: Ok with no grants left for the deleted account
#[tokio::test]
async fn delete_cascades_permissions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin_account::create_admin(db).await?;
    factory::admin_account::create_permission(db, admin.id, "manage_users").await?;

    let repo = AdminRepository::new(db);
    repo.delete(admin.id).await?;

    assert!(repo.find_by_id(admin.id).await?.is_none());
    assert!(repo.permissions_for(admin.id).await?.is_empty());

    Ok(())
}
