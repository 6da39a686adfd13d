use crate::domain::ports::{ReceiptId, ScoreStore};
use crate::domain::rules::Points;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for receipt scores.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, Points>>>` so readers run concurrently
/// and writers are exclusive. Contents live as long as the process.
#[derive(Default, Clone)]
pub struct InMemoryScoreStore {
    scores: Arc<RwLock<HashMap<ReceiptId, Points>>>,
}

impl InMemoryScoreStore {
    /// Creates a new, empty in-memory score store.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.scores.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.scores.read().await.is_empty()
    }
}

#[async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn put(&self, points: Points) -> Result<ReceiptId> {
        let mut scores = self.scores.write().await;
        // Ids are never reused, even on the off chance of a v4 collision.
        loop {
            let id = ReceiptId::new();
            if let Entry::Vacant(slot) = scores.entry(id) {
                slot.insert(points);
                return Ok(id);
            }
        }
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Points>> {
        let scores = self.scores.read().await;
        Ok(scores.get(id).copied())
    }
}
