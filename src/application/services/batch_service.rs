//! Batch Service - Runs the simulator once per generated config
//!
//! Invocations are strictly sequential: run `i + 1` starts only after run
//! `i`'s process has exited. A failed run is recorded and the batch moves on.

use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::application::ports::outbound::{SimulationExit, SimulationRequest, SimulatorPort};
use crate::domain::value_objects::{BatchSummary, ItemOutcome, RowIndex, RunLayout};

pub struct BatchService {
    simulator: Arc<dyn SimulatorPort>,
}

impl BatchService {
    pub fn new(simulator: Arc<dyn SimulatorPort>) -> Self {
        Self { simulator }
    }

    /// Simulate configs `1..=total`
    #[instrument(skip(self, layout), fields(base = layout.base_name()))]
    pub async fn run(&self, layout: &RunLayout, total: usize) -> BatchSummary {
        let mut summary = BatchSummary::new();
        for index in RowIndex::range(total) {
            let outcome = self.run_one(layout, index, total).await;
            summary.record(index, outcome);
        }
        info!("Simulations finished: {}", summary);
        summary
    }

    async fn run_one(&self, layout: &RunLayout, index: RowIndex, total: usize) -> ItemOutcome {
        let request = SimulationRequest {
            config: layout.config_path(index),
            result: layout.result_path(index),
        };
        info!("Starting simulation {}/{}", index, total);

        match self.simulator.run(&request).await {
            Ok(run) => match run.exit {
                SimulationExit::Success => {
                    if run.completion_seen {
                        info!("Simulation {}/{} completed", index, total);
                    } else {
                        info!("Simulation {}/{} exited cleanly", index, total);
                    }
                    ItemOutcome::Success
                }
                SimulationExit::Failure { code, stderr } => {
                    let code = code.map_or_else(|| "none".to_string(), |c| c.to_string());
                    error!(
                        "Simulation {}/{} finished with errors, exit code {}: {}",
                        index,
                        total,
                        code,
                        stderr.trim()
                    );
                    ItemOutcome::Failed(format!("exit code {}: {}", code, stderr.trim()))
                }
            },
            Err(e) => {
                error!("Simulation {}/{} could not run: {}", index, total, e);
                ItemOutcome::Failed(e.to_string())
            }
        }
    }
}
