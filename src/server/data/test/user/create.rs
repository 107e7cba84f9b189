use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the row, lets the database assign the id and
/// applies the active/timestamp defaults.
///
/// Expected: Ok with id assigned, active, no updated_at
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(new_user("a@x.com", "a")).await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.username, "a");
    assert!(user.is_active);
    assert!(user.updated_at.is_none());

    Ok(())
}

/// Tests that ids are assigned sequentially by the database.
///
/// Expected: second user id greater than first
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.create(new_user("a@x.com", "a")).await?;
    let second = repo.create(new_user("b@x.com", "b")).await?;

    assert!(second.id > first.id);

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err with a unique constraint violation and no second row
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(new_user("a@x.com", "a")).await?;
    let result = repo.create(new_user("a@x.com", "other")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
