//! Application layer tying the rule engine to the score store.
//!
//! `ReceiptProcessor` is the single entry point used by the HTTP interface.
//! It owns the storage backend behind the `ScoreStore` port.

pub mod processor;
