use crate::domain::ports::ReceiptId;
use crate::domain::rules::Points;
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessResponse {
    pub id: String,
}

impl From<ReceiptId> for ProcessResponse {
    fn from(id: ReceiptId) -> Self {
        Self { id: id.to_string() }
    }
}

/// Body of a successful `GET /receipts/{id}/points`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsResponse {
    pub points: Points,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
