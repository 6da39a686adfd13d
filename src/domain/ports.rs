use super::rules::Points;
use crate::error::Result;
use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

/// Opaque identifier handed out for every scored receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier previously rendered with `to_string`.
    ///
    /// Only the canonical lowercase hyphenated form is accepted; uppercase,
    /// simple, braced and URN spellings of the same UUID were never issued.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::try_parse(raw)
            .ok()
            .map(Self)
            .filter(|id| id.to_string() == raw)
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Stores `points` under a newly generated id and returns that id.
    async fn put(&self, points: Points) -> Result<ReceiptId>;
    async fn get(&self, id: &ReceiptId) -> Result<Option<Points>>;
}

pub type ScoreStoreBox = Box<dyn ScoreStore>;
