use super::transaction::TransactionRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Append-only record of what happened at the register.
#[async_trait]
pub trait JournalStore: Send + Sync {
    async fn append(&self, record: TransactionRecord) -> Result<()>;
    async fn records(&self) -> Result<Vec<TransactionRecord>>;
}

pub type JournalStoreBox = Box<dyn JournalStore>;
