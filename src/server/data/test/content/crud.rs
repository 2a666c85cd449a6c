use super::*;

/// Tests the published listing with a category filter.
///
/// Expected: Ok with drafts and other categories excluded
#[tokio::test]
async fn lists_published_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted =
        factory::content_item::create_content_with_category(db, "breathing", "mindfulness", true)
            .await?;
    factory::content_item::create_content_with_category(db, "draft", "mindfulness", false).await?;
    factory::content_item::create_content_with_category(db, "sleep-tips", "sleep", true).await?;

    let repo = ContentRepository::new(db);
    let items = repo.list_published(Some("mindfulness")).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].slug, wanted.slug);

    Ok(())
}

/// Tests the unfiltered published listing.
///
/// Expected: Ok with every published item, drafts excluded
#[tokio::test]
async fn lists_all_published_without_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::content_item::create_content(db, true).await?;
    factory::content_item::create_content(db, true).await?;
    factory::content_item::create_content(db, false).await?;

    let repo = ContentRepository::new(db);
    let items = repo.list_published(None).await?;

    assert_eq!(items.len(), 2);

    Ok(())
}

/// Tests create, update, and delete.
///
/// Expected: Ok with fields updated in place and the row gone after delete
#[tokio::test]
async fn creates_updates_and_deletes_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContentRepository::new(db);

    let item = repo
        .create(
            "guide".to_string(),
            "호흡 안내".to_string(),
            "# 천천히".to_string(),
            "mindfulness".to_string(),
            false,
        )
        .await?;

    let updated = repo
        .update(item, None, None, None, Some(true))
        .await?;
    assert!(updated.published);
    assert_eq!(updated.title, "호흡 안내");

    repo.delete(updated.id).await?;
    assert!(repo.find_by_slug("guide").await?.is_none());

    Ok(())
}
