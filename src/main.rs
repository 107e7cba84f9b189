mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    config::Config, error::AppError, router, scheduler, session::SessionFactory, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;
    let sessions = SessionFactory::new(db);

    let mut job_scheduler = if config.scheduler_enabled {
        Some(scheduler::start_scheduler(sessions.clone()).await?)
    } else {
        tracing::info!("Scheduler disabled");
        None
    };

    let addr = config.server_addr;
    let app = router::app(AppState::new(sessions, Arc::new(config)));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(job_scheduler) = job_scheduler.as_mut() {
        job_scheduler.shutdown().await?;
    }

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
