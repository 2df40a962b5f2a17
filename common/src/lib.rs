//! Shared models and contracts for the macdiff workspace.
//!
//! Everything the core services and the management shell agree on lives
//! here: the canonical MAC address type, snapshot models, the error
//! taxonomy, configuration, and the outbound ports (snapshot storage,
//! vendor lookup) that `macdiff-core` provides adapters for.

pub mod config;
pub mod error;
pub mod network;
pub mod output;
pub mod snapshot;
pub mod storage;
pub mod vendors;
