use crate::domain::ports::{ReceiptId, ScoreStoreBox};
use crate::domain::receipt::Receipt;
use crate::domain::rules::{self, Points};
use crate::error::{ReceiptError, Result};

/// Scores receipts and remembers the result under a fresh id.
///
/// `ReceiptProcessor` holds no state of its own; all shared state lives in
/// the injected store, so it can be shared across request handlers.
pub struct ReceiptProcessor {
    store: ScoreStoreBox,
}

impl ReceiptProcessor {
    /// Creates a new `ReceiptProcessor` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - The backend that keeps id to points associations.
    pub fn new(store: ScoreStoreBox) -> Self {
        Self { store }
    }

    /// Scores `receipt` and stores the result.
    ///
    /// Nothing is stored when scoring fails.
    pub async fn process(&self, receipt: &Receipt) -> Result<ReceiptId> {
        let points = rules::score(receipt).inspect_err(|e| {
            tracing::warn!(retailer = %receipt.retailer, error = %e, "rejected receipt");
        })?;
        let id = self.store.put(points).await?;
        tracing::info!(%id, points, "processed receipt");
        Ok(id)
    }

    /// Looks up the points previously awarded under `id`.
    ///
    /// Strings that are not a well-formed id were never issued and are
    /// reported as `NotFound`.
    pub async fn points(&self, id: &str) -> Result<Points> {
        let not_found = || ReceiptError::NotFound(id.to_string());
        let receipt_id = ReceiptId::parse(id).ok_or_else(not_found)?;
        self.store.get(&receipt_id).await?.ok_or_else(not_found)
    }
}
