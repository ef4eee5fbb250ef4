use crate::domain::ports::JournalStore;
use crate::domain::transaction::TransactionRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory transaction journal.
///
/// Uses `Arc<RwLock<Vec<TransactionRecord>>>` so clones share one journal.
/// Records live only as long as the process.
#[derive(Default, Clone)]
pub struct InMemoryJournal {
    records: Arc<RwLock<Vec<TransactionRecord>>>,
}

impl InMemoryJournal {
    /// Creates a new, empty journal.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JournalStore for InMemoryJournal {
    async fn append(&self, record: TransactionRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record);
        Ok(())
    }

    async fn records(&self) -> Result<Vec<TransactionRecord>> {
        let records = self.records.read().await;
        Ok(records.clone())
    }
}
