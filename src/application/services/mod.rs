//! Application services - Use case implementations
//!
//! A batch run is three stages over the same row indices: expand the
//! template into configs, simulate each config, aggregate the results.

pub mod aggregation_service;
pub mod batch_service;
pub mod expansion_service;
pub mod name_mapper;

pub use aggregation_service::AggregationService;
pub use batch_service::BatchService;
pub use expansion_service::ExpansionService;
pub use name_mapper::NameMapper;
