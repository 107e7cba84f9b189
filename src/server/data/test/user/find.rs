use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("find@example.com")
        .username("finder")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.email, "find@example.com");
    assert_eq!(user.username, "finder");

    Ok(())
}

/// Tests finding a nonexistent user by id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}

/// Tests finding users by email and username.
///
/// Expected: Ok(Some) for the stored values, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email_and_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("lookup@example.com")
        .username("lookup")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let by_email = repo.find_by_email("lookup@example.com").await?.unwrap();
    assert_eq!(by_email.id, created.id);

    let by_username = repo.find_by_username("lookup").await?.unwrap();
    assert_eq!(by_username.id, created.id);

    assert!(repo.find_by_email("missing@example.com").await?.is_none());
    assert!(repo.find_by_username("missing").await?.is_none());

    Ok(())
}

/// Tests reading the stored password hash of a user.
///
/// Expected: Ok(Some) with the stored hash, Ok(None) for an unknown id
#[tokio::test]
async fn finds_hashed_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .hashed_password("abcd$ef01")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.find_hashed_password(created.id).await?,
        Some("abcd$ef01".to_string())
    );
    assert_eq!(repo.find_hashed_password(created.id + 1).await?, None);

    Ok(())
}
