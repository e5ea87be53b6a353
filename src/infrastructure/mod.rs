//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration from the environment
//! - Shortcut client: HTTP source for gcsim's name tables
//! - gcsim: Child-process adapter for the simulator
//! - CSV: Variable table loading and report sheet writing
//! - State: Services wired for one run

pub mod config;
pub mod csv_table;
pub mod gcsim;
pub mod shortcut_client;
pub mod state;
