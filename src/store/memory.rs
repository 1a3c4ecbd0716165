//! In-memory ledger, used for local runs without a database and by tests.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;

use super::{BurritoStore, StoreError};

#[derive(Debug, Clone)]
struct Entry {
    recipient: String,
    giver: String,
    amount: i8,
    day: NaiveDate,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded mutation as `(recipient, giver, amount)` in insertion
    /// order. Test inspection hook.
    pub async fn records(&self) -> Vec<(String, String, i8)> {
        self.entries
            .lock()
            .await
            .iter()
            .map(|e| (e.recipient.clone(), e.giver.clone(), e.amount))
            .collect()
    }

    async fn push(&self, recipient: &str, giver: &str, amount: i8) {
        self.entries.lock().await.push(Entry {
            recipient: recipient.to_string(),
            giver: giver.to_string(),
            amount,
            day: Utc::now().date_naive(),
        });
    }
}

#[async_trait]
impl BurritoStore for MemoryStore {
    async fn count_given_today(&self, giver: &str) -> Result<i64, StoreError> {
        let today = Utc::now().date_naive();
        let count = self
            .entries
            .lock()
            .await
            .iter()
            .filter(|e| e.giver == giver && e.amount > 0 && e.day == today)
            .count();
        Ok(count as i64)
    }

    async fn record_increment(&self, recipient: &str, giver: &str) -> Result<(), StoreError> {
        self.push(recipient, giver, 1).await;
        Ok(())
    }

    async fn record_decrement(&self, recipient: &str, giver: &str) -> Result<(), StoreError> {
        self.push(recipient, giver, -1).await;
        Ok(())
    }
}
