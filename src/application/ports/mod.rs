//! Ports - Traits at the boundary between application and infrastructure

pub mod outbound;
