//! Service implementations
//!
//! Async roster store plus the real implementations of the service traits

pub mod roster_store;
pub mod seed_source;
pub mod simulated_backend;

// Re-export service implementations
pub use roster_store::RosterStore;
pub use seed_source::{EmbeddedSeedSource, FileSeedSource, load_roster, parse_seed, seed_source};
pub use simulated_backend::SimulatedBackend;
