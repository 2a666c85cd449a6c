use super::*;

/// Tests pagination across multiple users.
///
/// Expected: Ok with page-sized chunks and an exact total
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let (first_page, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);

    let (last_page, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(last_page.len(), 1);

    Ok(())
}
