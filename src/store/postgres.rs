//! Postgres-backed ledger.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use super::{BurritoStore, StoreError};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS burritos (
    id bigserial PRIMARY KEY,
    recipient text NOT NULL,
    giver text NOT NULL,
    amount smallint NOT NULL,
    given_at timestamptz NOT NULL DEFAULT now()
)";

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect and make sure the ledger table exists.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl BurritoStore for PgStore {
    async fn count_given_today(&self, giver: &str) -> Result<i64, StoreError> {
        // The database clock defines the calendar day.
        let row = sqlx::query(
            "SELECT count(*) FROM burritos
             WHERE giver = $1 AND amount > 0 AND given_at >= date_trunc('day', now())",
        )
        .bind(giver)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get::<i64, _>(0)?)
    }

    async fn record_increment(&self, recipient: &str, giver: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO burritos (recipient, giver, amount) VALUES ($1, $2, 1)")
            .bind(recipient)
            .bind(giver)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn record_decrement(&self, recipient: &str, giver: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO burritos (recipient, giver, amount) VALUES ($1, $2, -1)")
            .bind(recipient)
            .bind(giver)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
