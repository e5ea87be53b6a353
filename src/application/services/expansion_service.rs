//! Expansion Service - One generated gcsim config per variable table row

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::entities::VariableTable;
use crate::domain::services::ConfigTemplate;
use crate::domain::value_objects::{RowIndex, RunLayout, StatValueTable};

/// A rendered config for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedConfig {
    pub index: RowIndex,
    pub document: String,
}

pub struct ExpansionService {
    stats: StatValueTable,
}

impl ExpansionService {
    pub fn new(stats: StatValueTable) -> Self {
        Self { stats }
    }

    /// Render every row of the table, in table order
    pub fn expand(&self, template: &ConfigTemplate, table: &VariableTable) -> Vec<GeneratedConfig> {
        table
            .rows()
            .iter()
            .map(|row| GeneratedConfig {
                index: row.index(),
                document: template.render(row, &self.stats),
            })
            .collect()
    }

    /// Render every row and write it to `<base>_<n>.txt`.
    ///
    /// Returns the number of configs written, which equals the table's row count.
    pub async fn write_all(
        &self,
        template: &ConfigTemplate,
        table: &VariableTable,
        layout: &RunLayout,
    ) -> Result<usize> {
        let configs = self.expand(template, table);
        for config in &configs {
            let path = layout.config_path(config.index);
            tokio::fs::write(&path, config.document.as_bytes())
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Config {} saved as {}", config.index, path.display());
        }

        info!("Config preparation completed, {} configs created", configs.len());
        Ok(configs.len())
    }
}

impl Default for ExpansionService {
    fn default() -> Self {
        Self::new(StatValueTable::five_star())
    }
}
