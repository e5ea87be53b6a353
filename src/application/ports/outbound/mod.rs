//! Outbound ports - Interfaces that the application requires from external systems

mod shortcut_source_port;
mod simulator_port;

pub use shortcut_source_port::{ShortcutError, ShortcutKind, ShortcutSourcePort};
pub use simulator_port::{
    SimulationExit, SimulationRequest, SimulationRun, SimulatorError, SimulatorPort,
};
