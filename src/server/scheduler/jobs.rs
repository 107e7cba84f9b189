//! Units of work run by the scheduler.

use chrono::Utc;

use crate::server::{scheduler::JobFuture, service::user::UserService, session::SessionFactory};

/// Logs how many users exist and how many of them are active.
pub fn user_activity_report(sessions: SessionFactory) -> JobFuture {
    Box::pin(async move {
        let activity = sessions
            .run(|txn| Box::pin(async move { UserService::new(txn).activity().await }))
            .await?;

        tracing::info!(
            total = activity.total,
            active = activity.active,
            "User activity report"
        );

        Ok(())
    })
}

/// Logs how many users signed up in the last 24 hours.
pub fn daily_signup_report(sessions: SessionFactory) -> JobFuture {
    Box::pin(async move {
        let signups = sessions
            .run(|txn| {
                Box::pin(async move { UserService::new(txn).count_recent_signups().await })
            })
            .await?;

        tracing::info!(
            signups,
            date = %Utc::now().date_naive(),
            "Daily signup report"
        );

        Ok(())
    })
}
