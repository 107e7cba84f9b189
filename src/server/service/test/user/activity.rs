use super::*;

/// Tests the counts reported to scheduled jobs.
///
/// Expected: totals include inactive users, active count does not, recent signups
/// include everyone created during the test
#[tokio::test]
async fn reports_user_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_users(db, 2).await?;
    factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;

    let service = UserService::new(db);
    let activity = service.activity().await?;

    assert_eq!(activity.total, 3);
    assert_eq!(activity.active, 2);
    assert_eq!(service.count_recent_signups().await?, 3);

    Ok(())
}
