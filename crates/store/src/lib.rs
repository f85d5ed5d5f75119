//! Data boundary for Haven: in-memory entity stores, embedded seed
//! datasets, and the feeding-completion mutation gateway.

pub mod gateway;
pub mod seed;
pub mod store;

pub use gateway::ToggleOutcome;
pub use seed::{load, SeedData, SeedError};
pub use store::EntityStore;
