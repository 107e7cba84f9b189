//! Background job scheduler.
//!
//! Jobs are declared in the static [`JOBS`] table as a name, a trigger and a
//! unit-of-work function. Each run opens its own database session through the
//! session factory. Runs of the same job never overlap: a trigger that fires while
//! the previous run is still going is skipped with a warning. A failing run is
//! logged and the job stays scheduled.

pub mod jobs;

use std::{fmt, future::Future, pin::Pin, sync::Arc, time::Duration};

use tokio::{
    sync::{Mutex, OwnedMutexGuard},
    time::Instant,
};
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::server::{error::AppError, session::SessionFactory};

/// Future returned by a job's unit of work.
pub type JobFuture = Pin<Box<dyn Future<Output = Result<(), AppError>> + Send>>;

/// Unit of work run on every trigger.
pub type JobFn = fn(SessionFactory) -> JobFuture;

/// When a job fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fixed delay between runs, first run one interval after start.
    Interval(Duration),
    /// Six-field cron expression (seconds first), evaluated in UTC.
    Cron(&'static str),
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Interval(every) => write!(f, "every {}s", every.as_secs()),
            Trigger::Cron(expr) => write!(f, "cron '{}'", expr),
        }
    }
}

pub struct JobSpec {
    /// Unique job name, used in logs.
    pub name: &'static str,
    pub trigger: Trigger,
    pub run: JobFn,
}

/// Every job the scheduler registers.
pub static JOBS: &[JobSpec] = &[
    JobSpec {
        name: "user_activity_report",
        trigger: Trigger::Interval(Duration::from_secs(5 * 60)),
        run: jobs::user_activity_report,
    },
    JobSpec {
        name: "daily_signup_report",
        trigger: Trigger::Cron("0 0 0 * * *"),
        run: jobs::daily_signup_report,
    },
];

/// Keeps runs of one job from overlapping.
#[derive(Clone, Default)]
pub struct JobGuard(Arc<Mutex<()>>);

impl JobGuard {
    /// Claims the job for one run, or `None` while another run holds it.
    pub fn try_acquire(&self) -> Option<OwnedMutexGuard<()>> {
        self.0.clone().try_lock_owned().ok()
    }
}

/// How a single trigger of a job ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// Previous run still in progress; nothing was done.
    Skipped,
    /// The unit of work returned an error, which has been logged.
    Failed,
}

/// Runs `spec` once unless a previous run still holds `guard`.
pub async fn execute(spec: &JobSpec, sessions: SessionFactory, guard: &JobGuard) -> RunOutcome {
    let Some(_running) = guard.try_acquire() else {
        tracing::warn!(job = spec.name, "Previous run still in progress, skipping");
        return RunOutcome::Skipped;
    };

    let started = Instant::now();
    match (spec.run)(sessions).await {
        Ok(()) => {
            tracing::debug!(
                job = spec.name,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Job completed"
            );
            RunOutcome::Completed
        }
        Err(e) => {
            tracing::error!(job = spec.name, "Job failed: {}", e);
            RunOutcome::Failed
        }
    }
}

/// Builds the scheduler job for `spec`.
///
/// Every trigger of the returned job goes through [`execute`] with the same guard.
pub fn build_job(
    spec: &'static JobSpec,
    sessions: SessionFactory,
    guard: JobGuard,
) -> Result<Job, JobSchedulerError> {
    match spec.trigger {
        Trigger::Interval(every) => Job::new_repeated_async(every, move |_uuid, _lock| {
            tick(spec, &sessions, &guard)
        }),
        Trigger::Cron(expr) => Job::new_async(expr, move |_uuid, _lock| {
            tick(spec, &sessions, &guard)
        }),
    }
}

fn tick(
    spec: &'static JobSpec,
    sessions: &SessionFactory,
    guard: &JobGuard,
) -> Pin<Box<dyn Future<Output = ()> + Send>> {
    let sessions = sessions.clone();
    let guard = guard.clone();

    Box::pin(async move {
        execute(spec, sessions, &guard).await;
    })
}

/// Registers every job in [`JOBS`] and starts the scheduler.
///
/// The returned handle must be kept alive for jobs to keep firing; call
/// `shutdown` on it to stop them.
///
/// # Arguments
/// - `sessions` - Session factory each run opens its session from
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler
/// - `Err(AppError::SchedulerErr)` - A job could not be built, added or started
pub async fn start_scheduler(sessions: SessionFactory) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    for spec in JOBS {
        let job = build_job(spec, sessions.clone(), JobGuard::default())?;
        scheduler.add(job).await?;
        tracing::info!(job = spec.name, trigger = %spec.trigger, "Registered scheduled job");
    }

    scheduler.start().await?;

    tracing::info!("Scheduler started with {} jobs", JOBS.len());

    Ok(scheduler)
}
