use super::*;

/// Tests appending and listing messages.
///
/// Expected: Ok with messages returned in chronological order
#[tokio::test]
async fn appends_and_lists_messages_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_counseling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let session = factory::counseling_session::create_session(db, user.id).await?;

    let repo = CounselingRepository::new(db);
    repo.append_message(session.id, "user".to_string(), "요즘 잠이 안 와요".to_string())
        .await?;
    repo.append_message(session.id, "assistant".to_string(), "언제부터였나요?".to_string())
        .await?;

    let messages = repo.list_messages(session.id).await?;

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, "user");
    assert_eq!(messages[1].role, "assistant");

    Ok(())
}

/// Tests the completion context window query.
///
/// Verifies that `recent_messages` returns only the latest N messages while
/// preserving chronological order.
///
/// Expected: Ok with the last two messages, oldest of the pair first
#[tokio::test]
async fn recent_messages_returns_latest_window_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_counseling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let session = factory::counseling_session::create_session(db, user.id).await?;

    let repo = CounselingRepository::new(db);
    for i in 1..=4 {
        repo.append_message(session.id, "user".to_string(), format!("메시지 {}", i))
            .await?;
    }

    let window = repo.recent_messages(session.id, 2).await?;

    assert_eq!(window.len(), 2);
    assert_eq!(window[0].content, "메시지 3");
    assert_eq!(window[1].content, "메시지 4");

    Ok(())
}
