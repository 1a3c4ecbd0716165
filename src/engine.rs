//! The distribution engine: applies one parsed batch against the giver's
//! daily quota.
//!
//! The store is the single source of truth for how much a giver has left.
//! The count is re-read from the store before every update rather than
//! tracked locally, so a mutation of today's count from elsewhere lands
//! mid-batch. The check and the write are still two separate operations:
//! two in-flight batches from the same giver can both pass the check. Known
//! race, inherited from the store contract, which offers no atomic
//! check-and-increment.

use std::sync::Arc;

use crate::model::{DistributionOutcome, Effect, Update};
use crate::notify::Messenger;
use crate::store::{BurritoStore, StoreError};

pub struct Distributor {
    store: Arc<dyn BurritoStore>,
    messenger: Arc<Messenger>,
    daily_cap: i64,
}

impl Distributor {
    pub fn new(store: Arc<dyn BurritoStore>, messenger: Arc<Messenger>, daily_cap: i64) -> Self {
        Self {
            store,
            messenger,
            daily_cap,
        }
    }

    /// Apply `updates` in order until the batch is exhausted or the quota
    /// runs out. Batch rejection is all-or-nothing against the remaining
    /// quota: asking for five when three remain applies nothing and DMs the
    /// giver, it is never truncated to three. Decrements always apply and
    /// never count against the cap.
    ///
    /// A store error aborts the rest of the batch; whatever already applied
    /// stays committed. The returned outcome preserves duplicate recipients.
    pub async fn distribute(
        &self,
        giver: &str,
        updates: &[Update],
    ) -> Result<DistributionOutcome, StoreError> {
        let mut outcome = DistributionOutcome::default();
        let mut next = 0;

        while next < updates.len() {
            let given = self.store.count_given_today(giver).await?;
            let remaining = self.daily_cap - given;
            let pending = (updates.len() - next) as i64;
            tracing::debug!(%giver, given, remaining, pending, "quota check");

            if pending > remaining {
                tracing::info!(%giver, pending, remaining, "batch exceeds remaining quota");
                let text = format!(
                    "You are trying to give away {pending} burritos, \
                     but you only have {remaining} burritos left today!"
                );
                self.messenger.send_to_user(giver, &text).await;
                break;
            }
            if given >= self.daily_cap {
                // Unreachable while anything is pending (the shortfall branch
                // fires first); kept as the final guard on the cap.
                tracing::info!(%giver, cap = self.daily_cap, "daily cap reached");
                break;
            }

            let update = &updates[next];
            match update.effect {
                Effect::Increment => {
                    self.store.record_increment(&update.recipient, giver).await?;
                    outcome.recipients.push(update.recipient.clone());
                }
                Effect::Decrement => {
                    self.store.record_decrement(&update.recipient, giver).await?;
                }
            }
            next += 1;
        }

        Ok(outcome)
    }
}
