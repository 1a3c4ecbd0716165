//! The burrito ledger: who gave what to whom, and how much was given today.
//!
//! The store owns the daily counts. The engine only ever reads and appends
//! through this trait, which keeps the store authoritative for quota state
//! and lets tests substitute their own backend.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait BurritoStore: Send + Sync {
    /// Number of increments this giver has recorded today. Decrements are
    /// never counted.
    async fn count_given_today(&self, giver: &str) -> Result<i64, StoreError>;

    /// Record one burrito given from `giver` to `recipient`.
    async fn record_increment(&self, recipient: &str, giver: &str) -> Result<(), StoreError>;

    /// Record one burrito revoked by `giver` from `recipient`.
    async fn record_decrement(&self, recipient: &str, giver: &str) -> Result<(), StoreError>;
}
