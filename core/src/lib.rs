//! Core services for macdiff: capture normalization, the snapshot
//! comparator, report building, and the filesystem snapshot store.
//!
//! High-level callers (the CLI, integration tests) should go through
//! [`service::ValidationService`], which wires the store and vendor
//! adapters behind their `macdiff-common` ports.

pub mod compare;
pub mod report;
pub mod service;
pub mod stamp;
pub mod store;
pub mod table;
pub mod vendors;
