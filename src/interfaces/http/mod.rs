//! HTTP surface: `POST /receipts/process` and `GET /receipts/{id}/points`.

pub mod dto;
pub mod error;
pub mod routes;
pub mod server;

pub use routes::{AppState, router};
pub use server::{ServerConfig, serve};
