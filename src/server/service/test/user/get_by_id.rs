use super::*;

/// Tests fetching an existing user.
///
/// Expected: Ok with the stored fields
#[tokio::test]
async fn returns_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let created = service.create(create_params("a@x.com", "a")).await?;

    let fetched = service.get_by_id(created.id).await?;

    assert_eq!(fetched, created);

    Ok(())
}

/// Tests fetching a nonexistent user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service.get_by_id(12345).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
