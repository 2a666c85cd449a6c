use super::*;

/// Tests inserting a new user by UID.
///
/// Expected: Ok with the user created and fields stored
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(
            "uid_abc".to_string(),
            Some("a@example.com".to_string()),
            "아름".to_string(),
        )
        .await?;

    assert_eq!(user.uid, "uid_abc");
    assert_eq!(user.email, Some("a@example.com".to_string()));
    assert_eq!(user.nickname, "아름");

    Ok(())
}

/// Tests upserting an existing UID.
///
/// Verifies that a second upsert with the same UID updates email and
/// nickname instead of creating a second row.
///
/// Expected: Ok with the same row id and refreshed fields
#[tokio::test]
async fn refreshes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .upsert("uid_abc".to_string(), None, "아름".to_string())
        .await?;
    let second = repo
        .upsert(
            "uid_abc".to_string(),
            Some("new@example.com".to_string()),
            "새이름".to_string(),
        )
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.email, Some("new@example.com".to_string()));
    assert_eq!(second.nickname, "새이름");

    let (_, total) = repo.get_all_paginated(0, 10).await?;
    assert_eq!(total, 1);

    Ok(())
}

/// Tests lookup by UID.
///
/// Expected: Ok(Some) for a known UID, Ok(None) for an unknown one
#[tokio::test]
async fn finds_user_by_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_uid(db, "uid_xyz").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_uid("uid_xyz").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let missing = repo.find_by_uid("uid_missing").await?;
    assert!(missing.is_none());

    Ok(())
}
