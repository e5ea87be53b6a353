//! Report rows - one flat record per successfully parsed simulation

use crate::domain::value_objects::{MainStats, SlotIndex, SLOT_COUNT};

/// Per-slot columns of the report, in sheet order
const SLOT_COLUMNS: [&str; 8] = [
    "name",
    "weapon",
    "refinement",
    "sets",
    "sands",
    "goblet",
    "circlet",
    "dps",
];

/// Display data for one occupied slot
#[derive(Debug, Clone, PartialEq)]
pub struct SlotReport {
    pub name: String,
    pub weapon: String,
    pub refinement: u32,
    /// Set bonuses rendered as `2p A/2p B` or `4p A`
    pub sets: String,
    /// Selectors echoed from the variable table
    pub main_stats: MainStats,
    pub dps: f64,
}

impl SlotReport {
    fn cells(&self) -> [String; 8] {
        [
            self.name.clone(),
            self.weapon.clone(),
            self.refinement.to_string(),
            self.sets.clone(),
            self.main_stats.sands.clone(),
            self.main_stats.goblet.clone(),
            self.main_stats.circlet.clone(),
            self.dps.to_string(),
        ]
    }
}

/// One row of the report sheet
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub config_id: String,
    pub mean_dps: f64,
    /// Indexed by slot position; `None` leaves that slot's cells empty
    pub slots: [Option<SlotReport>; SLOT_COUNT],
}

impl ReportRow {
    pub fn new(config_id: impl Into<String>, mean_dps: f64) -> Self {
        Self {
            config_id: config_id.into(),
            mean_dps,
            slots: Default::default(),
        }
    }

    pub fn set_slot(&mut self, slot: SlotIndex, report: SlotReport) {
        self.slots[slot.position()] = Some(report);
    }

    #[cfg(test)]
    pub fn slot(&self, slot: SlotIndex) -> Option<&SlotReport> {
        self.slots[slot.position()].as_ref()
    }

    /// Column names of the sheet
    pub fn header() -> Vec<String> {
        let mut header = vec!["Config".to_string(), "mean_dps".to_string()];
        for slot in SlotIndex::all() {
            header.extend(SLOT_COLUMNS.iter().map(|c| slot.report_column(c)));
        }
        header
    }

    /// Cells in header order
    pub fn to_record(&self) -> Vec<String> {
        let mut record = vec![self.config_id.clone(), self.mean_dps.to_string()];
        for slot in &self.slots {
            match slot {
                Some(report) => record.extend(report.cells()),
                None => record.extend(std::iter::repeat(String::new()).take(SLOT_COLUMNS.len())),
            }
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xiao() -> SlotReport {
        SlotReport {
            name: "Xiao".to_string(),
            weapon: "Primordial Jade Winged Spear".to_string(),
            refinement: 1,
            sets: "4p Gladiator's Finale".to_string(),
            main_stats: MainStats {
                sands: "atk%".to_string(),
                goblet: "anemo%".to_string(),
                circlet: "cr".to_string(),
            },
            dps: 25000.5,
        }
    }

    #[test]
    fn test_header_layout() {
        let header = ReportRow::header();
        assert_eq!(header.len(), 2 + SLOT_COUNT * 8);
        assert_eq!(header[0], "Config");
        assert_eq!(header[1], "mean_dps");
        assert_eq!(header[2], "char1_name");
        assert_eq!(header[9], "char1_dps");
        assert_eq!(header[33], "char4_dps");
    }

    #[test]
    fn test_record_matches_header_width() {
        let mut row = ReportRow::new("team_1", 41000.25);
        row.set_slot(SlotIndex::new(1).unwrap(), xiao());

        let record = row.to_record();
        assert_eq!(record.len(), ReportRow::header().len());
        assert_eq!(record[0], "team_1");
        assert_eq!(record[1], "41000.25");
        assert_eq!(record[2], "Xiao");
        assert_eq!(record[4], "1");
        assert_eq!(record[5], "4p Gladiator's Finale");
        assert_eq!(record[9], "25000.5");
        // empty slots leave blank cells
        assert!(record[10..].iter().all(String::is_empty));
    }
}
