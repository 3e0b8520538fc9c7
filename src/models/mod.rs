//! Data models for the transaction report
//!
//! The record type mirrors the payload shape stored in the Realtime
//! Database; the result struct is what the presentation service hands
//! back for printing.

pub mod transaction;

pub use transaction::{Transaction, TransactionListResult};
