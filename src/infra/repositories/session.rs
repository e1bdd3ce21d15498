//! Shared change-set for one unit of work.
//!
//! Repositories never write to the store directly. They stage writes here,
//! and `flush` applies everything staged so far inside a single transaction.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tokio::sync::Mutex;

/// Outcome of applying one staged write.
pub(crate) struct Applied {
    /// Rows the statement touched
    pub rows: u64,
    /// Runs after commit, used to hand stored rows back to the caller
    pub publish: Option<Publisher>,
}

/// A write waiting for the next flush.
#[async_trait]
pub(crate) trait Staged: Send {
    async fn apply(self: Box<Self>, txn: &DatabaseTransaction) -> Result<Applied, DbErr>;
}

/// Connection plus the writes staged against it.
pub struct Session {
    db: DatabaseConnection,
    staged: Mutex<Vec<Box<dyn Staged>>>,
}

impl Session {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            staged: Mutex::new(Vec::new()),
        }
    }

    /// Committed-state connection used for reads
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub(crate) async fn stage(&self, write: Box<dyn Staged>) {
        self.staged.lock().await.push(write);
    }

    /// Number of writes waiting for the next flush
    pub async fn pending(&self) -> usize {
        self.staged.lock().await.len()
    }

    /// Drop every staged write, returning how many were dropped
    pub async fn discard(&self) -> usize {
        let mut staged = self.staged.lock().await;
        let dropped = staged.len();
        staged.clear();
        dropped
    }

    /// Apply every staged write in staging order inside one transaction.
    ///
    /// Returns `Ok(false)` without opening a transaction when nothing is
    /// staged, otherwise whether at least one row was affected. The staged
    /// list is emptied whether or not the flush succeeds.
    pub async fn flush(&self) -> Result<bool, DbErr> {
        let writes = std::mem::take(&mut *self.staged.lock().await);
        if writes.is_empty() {
            return Ok(false);
        }
        let count = writes.len();

        let txn = self.db.begin().await?;

        match apply_all(&txn, writes).await {
            Ok((rows, publishers)) => {
                txn.commit().await?;
                for publish in publishers {
                    publish();
                }
                tracing::debug!(writes = count, rows, "Change set committed");
                Ok(rows > 0)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                tracing::debug!(writes = count, "Change set rolled back: {}", e);
                Err(e)
            }
        }
    }
}

pub(crate) type Publisher = Box<dyn FnOnce() + Send>;

async fn apply_all(
    txn: &DatabaseTransaction,
    writes: Vec<Box<dyn Staged>>,
) -> Result<(u64, Vec<Publisher>), DbErr> {
    let mut rows = 0;
    let mut publishers = Vec::new();

    for write in writes {
        let applied = write.apply(txn).await?;
        rows += applied.rows;
        publishers.extend(applied.publish);
    }

    Ok((rows, publishers))
}
