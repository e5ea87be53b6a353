//! Application layer - Use cases of a batch run
//!
//! This layer contains:
//! - Ports: traits for the simulator and the shortcut-table source
//! - Services: expansion, batch execution, name mapping, aggregation
//! - DTOs: the simulator's result document

pub mod dto;
pub mod ports;
pub mod services;
