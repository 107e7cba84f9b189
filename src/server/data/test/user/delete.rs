use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(true) and the user is gone
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a nonexistent user.
///
/// Expected: Ok(false) and other users untouched
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(!repo.delete(9999).await?);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
