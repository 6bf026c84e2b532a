//! # basketrec core
//!
//! Pure recommendation logic for basketrec: the transaction data model,
//! the deduplicating [`TransactionStore`](store::TransactionStore), the
//! shared top-N ranking routine, the three scoring strategies, and the
//! [`Engine`](engine::Engine) that runs them.
//!
//! This crate performs no filesystem or terminal I/O. Callers hand it a
//! header row plus raw rows and get back a structured report.

pub mod engine;
pub mod error;
pub mod models;
pub mod rank;
pub mod store;
pub mod strategy;

pub use engine::Engine;
pub use error::RecsError;
pub use models::{ColumnMap, Recommendation, TransactionRecord};
pub use store::TransactionStore;
