//! Simulator port - Interface to the external combat simulator
//!
//! The simulator is an opaque executable. The application only knows which
//! config it reads, where it writes its result document, and whether it
//! exited cleanly.

use std::path::PathBuf;

use async_trait::async_trait;

/// One simulator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRequest {
    /// Generated config to simulate
    pub config: PathBuf,
    /// Where the simulator writes its JSON result
    pub result: PathBuf,
}

/// How a simulator process ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationExit {
    Success,
    /// Non-zero exit, or killed without an exit code
    Failure { code: Option<i32>, stderr: String },
}

/// What the adapter observed while the simulator ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRun {
    pub exit: SimulationExit,
    /// Whether the completion marker appeared on stdout
    pub completion_seen: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error("could not start simulator {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("simulator I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait SimulatorPort: Send + Sync {
    /// Run one simulation to completion. Returns once the process has exited.
    async fn run(&self, request: &SimulationRequest) -> Result<SimulationRun, SimulatorError>;
}
