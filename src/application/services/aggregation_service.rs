//! Aggregation Service - Joins simulator results with their table rows
//!
//! Each result document `result_<base>_<n>.json` is paired with row `n` of
//! the variable table. Rows whose document is missing or unusable are left
//! out of the report; the rest are flattened into one [`ReportRow`] each.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::application::dto::{CharacterDetail, MeanStat, SimulationResult};
use crate::application::services::NameMapper;
use crate::domain::entities::{ReportRow, SlotReport, VariableRow, VariableTable};
use crate::domain::value_objects::{BatchSummary, ItemOutcome, RowIndex, RunLayout, SlotIndex};

#[derive(Debug, thiserror::Error)]
pub enum ResultError {
    #[error("file {0} not found")]
    NotFound(String),
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("error decoding JSON in {path}: {message}")]
    Malformed { path: String, message: String },
    #[error("key error in {path}: {message}")]
    MissingKey { path: String, message: String },
}

impl ResultError {
    /// Whether the row was never simulated, as opposed to producing bad output
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Read and decode one result document
pub async fn load_result(path: &Path) -> Result<SimulationResult, ResultError> {
    let display = path.display().to_string();
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ResultError::NotFound(display))
        }
        Err(source) => return Err(ResultError::Io { path: display, source }),
    };

    serde_json::from_str(&text).map_err(|e| {
        if e.is_data() {
            ResultError::MissingKey {
                path: display,
                message: e.to_string(),
            }
        } else {
            ResultError::Malformed {
                path: display,
                message: e.to_string(),
            }
        }
    })
}

/// Report rows plus what happened to every index
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub rows: Vec<ReportRow>,
    pub summary: BatchSummary,
}

pub struct AggregationService {
    names: Arc<NameMapper>,
}

impl AggregationService {
    pub fn new(names: Arc<NameMapper>) -> Self {
        Self { names }
    }

    /// Collect results `1..=total` in ascending order
    pub async fn aggregate(
        &self,
        layout: &RunLayout,
        table: &VariableTable,
        total: usize,
    ) -> Aggregation {
        let mut rows = Vec::new();
        let mut summary = BatchSummary::new();

        for index in RowIndex::range(total) {
            let path = layout.result_path(index);
            match load_result(&path).await {
                Ok(result) => {
                    rows.push(self.build_row(layout, index, &result, table.row(index)));
                    summary.record(index, ItemOutcome::Success);
                }
                Err(e) => {
                    warn!("Result {} left out of the report: {}", index, e);
                    let outcome = if e.is_missing() {
                        ItemOutcome::Skipped(e.to_string())
                    } else {
                        ItemOutcome::Failed(e.to_string())
                    };
                    summary.record(index, outcome);
                }
            }
        }

        info!("Results collected: {}", summary);
        Aggregation { rows, summary }
    }

    /// Flatten one result. Slots the document cannot describe stay empty.
    pub fn build_row(
        &self,
        layout: &RunLayout,
        index: RowIndex,
        result: &SimulationResult,
        table_row: Option<&VariableRow>,
    ) -> ReportRow {
        if table_row.is_none() {
            warn!("Row number {} out of range of the variable table", index);
        }

        let mut row = ReportRow::new(layout.config_id(index), result.statistics.dps.mean);
        for slot in SlotIndex::all() {
            match self.slot_report(result, slot, table_row) {
                Ok(Some(report)) => row.set_slot(slot, report),
                Ok(None) => {}
                Err(message) => warn!("Result {} {}: {}", index, slot, message),
            }
        }
        row
    }

    fn slot_report(
        &self,
        result: &SimulationResult,
        slot: SlotIndex,
        table_row: Option<&VariableRow>,
    ) -> Result<Option<SlotReport>, String> {
        let Some(detail) = result.character_details.get(slot.position()) else {
            return Ok(None);
        };
        let detail: CharacterDetail =
            serde_json::from_value(detail.clone()).map_err(|e| format!("character details: {e}"))?;

        let dps = result
            .statistics
            .character_dps
            .get(slot.position())
            .cloned()
            .unwrap_or(Value::Null);
        let dps: MeanStat =
            serde_json::from_value(dps).map_err(|e| format!("character dps: {e}"))?;

        Ok(Some(SlotReport {
            name: self.names.display_character(&detail.name),
            weapon: self.names.display_weapon(&detail.weapon.name),
            refinement: detail.weapon.refine,
            sets: detail.sets_label(),
            main_stats: table_row.map(|r| r.main_stats(slot)).unwrap_or_default(),
            dps: dps.mean,
        }))
    }
}
