//! Domain layer - Core batch logic with no I/O
//!
//! This layer contains:
//! - Entities: the variable table and the report rows
//! - Value Objects: row/slot indices, slot specs, stat values, outcomes, run layout
//! - Domain Services: template expansion and display-name formatting

pub mod entities;
pub mod services;
pub mod value_objects;
