use thiserror::Error;

/// Failures produced while scoring a receipt or looking up a stored score.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReceiptError {
    #[error("invalid total")]
    InvalidTotal,
    #[error("invalid item price")]
    InvalidItemPrice,
    #[error("invalid purchaseDate")]
    InvalidDate,
    #[error("invalid purchaseTime")]
    InvalidTime,
    #[error("points total out of range")]
    PointsOverflow,
    #[error("receipt not found: {0}")]
    NotFound(String),
    /// Backend failure reported through the `ScoreStore` port; the in-memory
    /// store never produces it.
    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
