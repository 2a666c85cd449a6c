use super::*;

/// Tests updating profile fields.
///
/// Verifies that Some values overwrite and None values leave fields
/// untouched.
///
/// Expected: Ok with only the provided fields changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let original_email = user.email.clone();

    let repo = UserRepository::new(db);
    let updated = repo
        .update(user, None, Some("새닉네임".to_string()))
        .await?;

    assert_eq!(updated.nickname, "새닉네임");
    assert_eq!(updated.email, original_email);

    Ok(())
}
