//! Shared application state

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ports::outbound::SimulatorPort;
use crate::application::services::{
    AggregationService, BatchService, ExpansionService, NameMapper,
};
use crate::domain::entities::VariableTable;
use crate::domain::services::ConfigTemplate;
use crate::domain::value_objects::{BatchSummary, RunLayout, StatValueTable};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::csv_table::write_report;
use crate::infrastructure::gcsim::GcsimRunner;
use crate::infrastructure::shortcut_client::ShortcutClient;

/// Everything a batch run needs, wired once at startup
pub struct AppState {
    pub config: AppConfig,
    pub names: Arc<NameMapper>,
    // Application services
    pub expansion_service: ExpansionService,
    pub batch_service: BatchService,
    pub aggregation_service: AggregationService,
}

/// What one batch run produced
#[derive(Debug)]
pub struct RunReport {
    pub simulations: BatchSummary,
    pub report_rows: BatchSummary,
    pub sheet: PathBuf,
}

impl AppState {
    /// Build the services. Fetches the shortcut tables, so this fails when
    /// the name source is unreachable.
    pub async fn new(config: AppConfig) -> Result<Self> {
        let shortcut_client =
            ShortcutClient::new(&config.character_url, &config.weapon_url, config.http_timeout)
                .context("failed to build HTTP client")?;
        let names = NameMapper::load(&shortcut_client).await?;

        let simulator = Arc::new(GcsimRunner::new(
            config.simulator_path.clone(),
            config.completion_marker.clone(),
        ));

        Ok(Self::with_parts(config, names, simulator))
    }

    /// Wire the services around loaded name tables and a simulator
    pub fn with_parts(
        config: AppConfig,
        names: NameMapper,
        simulator: Arc<dyn SimulatorPort>,
    ) -> Self {
        let names = Arc::new(names);
        Self {
            expansion_service: ExpansionService::new(StatValueTable::five_star()),
            batch_service: BatchService::new(simulator),
            aggregation_service: AggregationService::new(names.clone()),
            names,
            config,
        }
    }

    /// Expand the template over every row, simulate each config, then
    /// write the report sheet. Only expansion and the sheet write are fatal.
    pub async fn run_batch(
        &self,
        template: &ConfigTemplate,
        table: &VariableTable,
        layout: &RunLayout,
    ) -> Result<RunReport> {
        let total = self
            .expansion_service
            .write_all(template, table, layout)
            .await?;

        tracing::info!(
            "Running {} simulations with {}",
            total,
            self.config.simulator_path.display()
        );
        let simulations = self.batch_service.run(layout, total).await;

        let aggregation = self.aggregation_service.aggregate(layout, table, total).await;
        let sheet = layout.sheet_path();
        write_report(&sheet, &aggregation.rows).context("failed to write the report sheet")?;

        Ok(RunReport {
            simulations,
            report_rows: aggregation.summary,
            sheet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::{
        SimulationExit, SimulationRequest, SimulationRun, SimulatorError,
    };
    use crate::application::services::name_mapper::parse_shortcuts;
    use crate::domain::entities::fixtures::{full_header, record, BENNETT, XIAO};
    use crate::domain::value_objects::{ItemOutcome, RowIndex};
    use async_trait::async_trait;
    use serde_json::{json, Map, Value};
    use std::time::Duration;

    /// Stands in for gcsim: reads the equip statements back out of each
    /// config and writes a result for them. Configs named `*_2.txt` fail.
    struct FakeGcsim;

    fn quoted(line: &str) -> String {
        line.split('"').nth(1).unwrap_or_default().to_string()
    }

    #[async_trait]
    impl SimulatorPort for FakeGcsim {
        async fn run(&self, request: &SimulationRequest) -> Result<SimulationRun, SimulatorError> {
            if request.config.to_string_lossy().ends_with("_2.txt") {
                return Ok(SimulationRun {
                    exit: SimulationExit::Failure {
                        code: Some(1),
                        stderr: "invalid config".to_string(),
                    },
                    completion_seen: false,
                });
            }

            let config = tokio::fs::read_to_string(&request.config).await?;
            let mut details: Vec<(String, Value, Map<String, Value>)> = Vec::new();
            for line in config.lines() {
                let name = line.split_whitespace().next().unwrap_or_default().to_string();
                if line.contains(" add weapon=") {
                    let refine: u32 = line
                        .split("refine=")
                        .nth(1)
                        .and_then(|rest| rest.split_whitespace().next())
                        .and_then(|r| r.parse().ok())
                        .unwrap_or_default();
                    details.push((name, json!({ "name": quoted(line), "refine": refine }), Map::new()));
                } else if line.contains(" add set=") {
                    let count: u64 = if line.contains("count=4") { 4 } else { 2 };
                    if let Some((_, _, sets)) = details.iter_mut().find(|(n, _, _)| *n == name) {
                        sets.insert(quoted(line), json!(count));
                    }
                }
            }

            let character_dps: Vec<Value> = (1..=details.len())
                .map(|k| json!({ "mean": 1000.0 * k as f64 }))
                .collect();
            let mean: f64 = (1..=details.len()).map(|k| 1000.0 * k as f64).sum();
            let character_details: Vec<Value> = details
                .into_iter()
                .map(|(name, weapon, sets)| json!({ "name": name, "weapon": weapon, "sets": sets }))
                .collect();
            let result = json!({
                "statistics": { "dps": { "mean": mean }, "character_dps": character_dps },
                "character_details": character_details,
            });
            tokio::fs::write(&request.result, result.to_string()).await?;

            Ok(SimulationRun {
                exit: SimulationExit::Success,
                completion_seen: true,
            })
        }
    }

    fn test_config() -> AppConfig {
        AppConfig {
            simulator_path: PathBuf::from("gcsim"),
            completion_marker: "Simulation completed".to_string(),
            character_url: "http://localhost/characters.go".to_string(),
            weapon_url: "http://localhost/weapons.go".to_string(),
            http_timeout: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn test_run_batch_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let layout = RunLayout::new(dir.path(), "team");
        let template = ConfigTemplate::new("options iteration=10;\n$char1\n$char2\nactive xiao;\n");
        let table = VariableTable::new(
            full_header(),
            vec![
                record(&[XIAO, BENNETT]),
                record(&[XIAO]),
                record(&[BENNETT]),
            ],
        );
        let names = NameMapper::new(
            parse_shortcuts("\"xiao\": keys.Xiao,\n"),
            parse_shortcuts("\"primordialjadewingedspear\": keys.PrimordialJadeWingedSpear,\n"),
        );
        let state = AppState::with_parts(test_config(), names, Arc::new(FakeGcsim));

        let report = state.run_batch(&template, &table, &layout).await.unwrap();

        assert_eq!(report.sheet, dir.path().join("sheet_team.csv"));
        assert_eq!(report.simulations.succeeded(), 2);
        assert_eq!(
            report.simulations.outcome(RowIndex::new(2).unwrap()),
            Some(&ItemOutcome::Failed("exit code 1: invalid config".to_string()))
        );
        assert_eq!(report.report_rows.succeeded(), 2);
        assert_eq!(report.report_rows.skipped(), 1);

        let mut reader = csv::Reader::from_path(&report.sheet).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(&first[0], "team_1");
        assert_eq!(&first[1], "3000");
        assert_eq!(&first[2], "Xiao");
        assert_eq!(&first[3], "Primordial Jade Winged Spear");
        assert_eq!(&first[4], "1");
        assert_eq!(&first[5], "4p Gladiator's Finale");
        assert_eq!(&first[6], "atk%");
        assert_eq!(&first[9], "1000");
        assert_eq!(&first[10], "bennett");
        assert_eq!(&first[13], "2p Emblem of Severed Fate/2p Noblesse Oblige");
        assert_eq!(&first[16], "heal");
        assert_eq!(&first[17], "2000");

        let third = &records[1];
        assert_eq!(&third[0], "team_3");
        assert_eq!(&third[2], "bennett");
        assert_eq!(&third[10], "");
    }
}
