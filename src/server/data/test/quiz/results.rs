use super::*;

/// Tests slug lookup.
///
/// Expected: Ok(Some) for a seeded slug, Ok(None) otherwise
#[tokio::test]
async fn finds_quiz_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::quiz::create_quiz_with_slug(db, "mind-color").await?;

    let repo = QuizRepository::new(db);

    assert!(repo.find_by_slug("mind-color").await?.is_some());
    assert!(repo.find_by_slug("unknown").await?.is_none());

    Ok(())
}

/// Tests storing a result and listing it joined with its quiz.
///
/// Expected: Ok with the newest result first and the quiz attached
#[tokio::test]
async fn stores_and_lists_results_with_quiz() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let quiz = factory::quiz::create_quiz(db).await?;

    let repo = QuizRepository::new(db);
    repo.create_result(
        user.id,
        quiz.id,
        "sunlight".to_string(),
        json!([{ "question_id": 1, "value": "a" }]),
    )
    .await?;
    repo.create_result(
        user.id,
        quiz.id,
        "moonlight".to_string(),
        json!([{ "question_id": 1, "value": "b" }]),
    )
    .await?;

    let results = repo.list_results_with_quiz(user.id).await?;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0.result_type, "moonlight");
    assert_eq!(
        results[0].1.as_ref().map(|quiz| quiz.slug.clone()),
        Some(quiz.slug.clone())
    );

    Ok(())
}
