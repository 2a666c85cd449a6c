use super::*;

/// Tests creating a session.
///
/// Expected: Ok with persona stored and no last activity yet
#[tokio::test]
async fn creates_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_counseling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CounselingRepository::new(db);
    let session = repo
        .create_session(user.id, "strategic".to_string(), Some("진로 고민".to_string()))
        .await?;

    assert_eq!(session.user_id, user.id);
    assert_eq!(session.persona, "strategic");
    assert_eq!(session.title, Some("진로 고민".to_string()));
    assert!(session.last_message_at.is_none());

    Ok(())
}

/// Tests that session lookup is scoped to the owner.
///
/// Expected: Ok(Some) for the owner, Ok(None) for another user
#[tokio::test]
async fn find_session_is_scoped_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_counseling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let session = factory::counseling_session::create_session(db, owner.id).await?;

    let repo = CounselingRepository::new(db);

    assert!(repo.find_session(owner.id, session.id).await?.is_some());
    assert!(repo.find_session(intruder.id, session.id).await?.is_none());

    Ok(())
}

/// Tests session ordering by last activity.
///
/// Expected: Ok with the most recently messaged session first
#[tokio::test]
async fn lists_sessions_most_recent_activity_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_counseling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let older = factory::counseling_session::create_session(db, user.id).await?;
    let newer = factory::counseling_session::create_session(db, user.id).await?;

    let repo = CounselingRepository::new(db);
    let now = Utc::now();
    repo.touch_last_message(newer.clone(), now - chrono::Duration::hours(1))
        .await?;
    repo.touch_last_message(older.clone(), now).await?;

    let sessions = repo.list_sessions(user.id).await?;
    let ids: Vec<i32> = sessions.iter().map(|session| session.id).collect();

    assert_eq!(ids, vec![older.id, newer.id]);

    Ok(())
}

/// Tests that deleting a session removes its messages too.
///
/// Expected: Ok with no messages left for the deleted session
#[tokio::test]
async fn delete_session_cascades_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_counseling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let session = factory::counseling_session::create_session(db, user.id).await?;
    factory::chat_message::create_message(db, session.id, "user", "안녕하세요").await?;

    let repo = CounselingRepository::new(db);
    repo.delete_session(session.id).await?;

    assert!(repo.find_session(user.id, session.id).await?.is_none());
    assert!(repo.list_messages(session.id).await?.is_empty());

    Ok(())
}
