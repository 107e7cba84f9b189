use super::*;

/// Tests a partial update changing only the username.
///
/// Expected: username changed, email and active flag unchanged
#[tokio::test]
async fn applies_only_present_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let created = service.create(create_params("a@x.com", "a")).await?;

    let updated = service
        .update(
            created.id,
            UpdateUserParams {
                username: Some("b".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.username, "b");
    assert_eq!(updated.email, "a@x.com");
    assert!(updated.is_active);
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}

/// Tests that applying the same partial update twice equals applying it once.
///
/// Expected: identical user after the first and second application
#[tokio::test]
async fn same_update_twice_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let created = service.create(create_params("a@x.com", "a")).await?;

    let params = UpdateUserParams {
        email: Some("new@x.com".to_string()),
        password: Some("another-password".to_string()),
        is_active: Some(false),
        ..Default::default()
    };
    let once = service.update(created.id, params.clone()).await?;
    let twice = service.update(created.id, params).await?;

    assert_eq!(once, twice);
    assert_eq!(service.get_by_id(created.id).await?, once);

    Ok(())
}

/// Tests that keeping one's own email is not a conflict.
///
/// Expected: Ok
#[tokio::test]
async fn allows_resubmitting_own_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let created = service.create(create_params("a@x.com", "a")).await?;

    let updated = service
        .update(
            created.id,
            UpdateUserParams {
                email: Some("a@x.com".to_string()),
                username: Some("a".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated, created);

    Ok(())
}

/// Tests moving to an email owned by another user.
///
/// Expected: Err(Conflict) and the user left unchanged
#[tokio::test]
async fn rejects_email_of_another_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service.create(create_params("a@x.com", "a")).await?;
    let other = service.create(create_params("b@x.com", "b")).await?;

    let result = service
        .update(
            other.id,
            UpdateUserParams {
                email: Some("a@x.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_by_id(other.id).await?, other);

    Ok(())
}

/// Tests replacing the password.
///
/// Expected: stored hash changes and never equals the plaintext
#[tokio::test]
async fn rehashes_new_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let created = service.create(create_params("a@x.com", "a")).await?;
    let before = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();

    service
        .update(
            created.id,
            UpdateUserParams {
                password: Some("another-password".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let after = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(after.hashed_password, before.hashed_password);
    assert_ne!(after.hashed_password, "another-password");

    Ok(())
}

/// Tests updating a nonexistent user.
///
/// Expected: Err(NotFound) and no rows written
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service
        .update(
            77,
            UpdateUserParams {
                username: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}

/// Tests resubmitting the current password.
///
/// Expected: stored hash and updated_at left untouched
#[tokio::test]
async fn unchanged_password_is_not_a_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let created = service.create(create_params("a@x.com", "a")).await?;
    let before = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();

    let updated = service
        .update(
            created.id,
            UpdateUserParams {
                password: Some("password123".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let after = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(after.hashed_password, before.hashed_password);
    assert_eq!(updated.updated_at, None);
    assert_eq!(updated, created);

    Ok(())
}
