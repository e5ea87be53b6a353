//! Variable table entity - the rows that drive template expansion

use std::collections::HashMap;

use crate::domain::value_objects::{ArtifactSets, MainStats, RowIndex, SlotField, SlotIndex, SlotSpec};

/// Echoed in the report when a selector column does not exist
const MISSING_SELECTOR: &str = "N/A";

/// The parsed variable table: a header row plus ordered data rows
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    headers: Vec<String>,
    rows: Vec<VariableRow>,
}

impl VariableTable {
    /// Build a table from its header and raw records. Records shorter than
    /// the header are padded with blank cells.
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                let cells = headers
                    .iter()
                    .cloned()
                    .zip(record.into_iter().chain(std::iter::repeat(String::new())))
                    .collect();
                VariableRow {
                    index: RowIndex::from_position(position),
                    cells,
                }
            })
            .collect();

        Self { headers, rows }
    }

    pub fn rows(&self) -> &[VariableRow] {
        &self.rows
    }

    pub fn row(&self, index: RowIndex) -> Option<&VariableRow> {
        self.rows.get(index.position())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Every `$charK_<field>` column the header lacks
    pub fn missing_columns(&self) -> Vec<String> {
        SlotIndex::all()
            .flat_map(|slot| SlotField::ALL.iter().map(move |field| slot.column(*field)))
            .filter(|column| !self.headers.iter().any(|h| h == column))
            .collect()
    }
}

/// One data row of the variable table
#[derive(Debug, Clone)]
pub struct VariableRow {
    index: RowIndex,
    cells: HashMap<String, String>,
}

impl VariableRow {
    pub fn index(&self) -> RowIndex {
        self.index
    }

    /// Trimmed cell value, `None` if the column does not exist
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(|v| v.trim())
    }

    fn field(&self, slot: SlotIndex, field: SlotField) -> &str {
        self.get(&slot.column(field)).unwrap_or_default()
    }

    /// The slot's equipment, or `None` when its name cell is blank
    pub fn slot(&self, slot: SlotIndex) -> Option<SlotSpec> {
        let name = self.field(slot, SlotField::Name);
        if name.is_empty() {
            return None;
        }

        Some(SlotSpec {
            name: name.to_string(),
            weapon: self.field(slot, SlotField::Weapon).to_string(),
            refinement: self.field(slot, SlotField::Refinement).to_string(),
            sets: ArtifactSets::from_columns(
                self.field(slot, SlotField::Artifact1),
                self.field(slot, SlotField::Artifact2),
            ),
            main_stats: MainStats {
                sands: self.field(slot, SlotField::Sands).to_string(),
                goblet: self.field(slot, SlotField::Goblet).to_string(),
                circlet: self.field(slot, SlotField::Circlet).to_string(),
            },
        })
    }

    /// Selector cells for a slot as written in the table, `N/A` for absent columns
    pub fn main_stats(&self, slot: SlotIndex) -> MainStats {
        let echo = |field| {
            self.get(&slot.column(field))
                .unwrap_or(MISSING_SELECTOR)
                .to_string()
        };
        MainStats {
            sands: echo(SlotField::Sands),
            goblet: echo(SlotField::Goblet),
            circlet: echo(SlotField::Circlet),
        }
    }
}
