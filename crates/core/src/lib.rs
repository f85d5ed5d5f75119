//! Pure view-model logic for the Haven shelter horse manager.
//!
//! Everything in this crate is synchronous, total over its inputs, and free
//! of I/O or clock bindings, so it can back any rendering layer. The data
//! boundary (entity stores, seed datasets, the feeding mutation gateway)
//! lives in `haven-store`.

pub mod aggregate;
pub mod badge;
pub mod dashboard;
pub mod error;
pub mod feeding;
pub mod filter;
pub mod health;
pub mod horse;
pub mod profile;
pub mod selection;
pub mod types;
