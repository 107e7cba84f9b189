//! Per-operation database sessions.
//!
//! A [`DbSession`] wraps one database transaction on a pooled connection. It is used by
//! exactly one logical operation (one request or one scheduled job run) and is always
//! consumed through [`DbSession::finish`], which commits on success and rolls back on
//! failure. A session dropped without `finish` (request cancelled, task panicked) is
//! rolled back when the transaction is dropped, returning its connection to the pool.

use std::{future::Future, pin::Pin};

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::error::AppError;

/// Boxed future borrowing a session's transaction for the lifetime `'c`.
pub type SessionFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'c>>;

/// Produces database sessions backed by the shared connection pool.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Clone)]
pub struct SessionFactory {
    db: DatabaseConnection,
}

impl SessionFactory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a session bound to a pooled connection.
    ///
    /// Waits for a free connection up to the configured acquire timeout.
    ///
    /// # Returns
    /// - `Ok(DbSession)` - Session with an open transaction
    /// - `Err(AppError::DbErr)` - Pool exhausted past the timeout or database unreachable
    pub async fn acquire_session(&self) -> Result<DbSession, AppError> {
        let txn = self.db.begin().await?;
        Ok(DbSession { txn })
    }

    /// Runs `op` inside a fresh session and finishes the session with its result.
    ///
    /// The transaction is committed when `op` succeeds and rolled back when it fails;
    /// either way the connection is back in the pool before this returns.
    pub async fn run<T, F>(&self, op: F) -> Result<T, AppError>
    where
        T: Send,
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> SessionFuture<'c, T> + Send,
    {
        let session = self.acquire_session().await?;
        let result = op(session.conn()).await;
        session.finish(result).await
    }

    /// Checks that the database answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.db.ping().await?;
        Ok(())
    }
}

/// One transactional unit of work.
pub struct DbSession {
    txn: DatabaseTransaction,
}

impl DbSession {
    /// Connection handle for repositories and services working inside this session.
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Ends the session according to `result` and passes `result` through.
    ///
    /// # Returns
    /// - `Ok(T)` - `result` was `Ok` and the commit succeeded
    /// - `Err(AppError::DbErr)` - `result` was `Ok` but the commit failed
    /// - `Err(E)` - `result` was `Err(E)`; the transaction was rolled back
    pub async fn finish<T>(self, result: Result<T, AppError>) -> Result<T, AppError> {
        match result {
            Ok(value) => {
                self.txn.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.txn.rollback().await {
                    tracing::error!("Failed to roll back session: {}", rollback_err);
                }
                Err(err)
            }
        }
    }
}
