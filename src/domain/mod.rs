//! Domain layer: receipt values, the points rules and the storage port.

pub mod ports;
pub mod receipt;
pub mod rules;
