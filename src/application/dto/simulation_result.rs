//! The parts of gcsim's `-out` JSON document a batch report reads
//!
//! Only the consumed fields are modeled; everything else in the document
//! is ignored. Per-character entries stay as raw JSON so one malformed
//! character does not invalidate the whole result.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top level of a result document
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationResult {
    pub statistics: Statistics,
    #[serde(default)]
    pub character_details: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Statistics {
    pub dps: MeanStat,
    #[serde(default)]
    pub character_dps: Vec<Value>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MeanStat {
    pub mean: f64,
}

/// One entry of `character_details`
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterDetail {
    pub name: String,
    pub weapon: WeaponDetail,
    /// Set name to equipped piece count, in document order
    pub sets: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeaponDetail {
    pub name: String,
    pub refine: u32,
}

impl CharacterDetail {
    /// Sets as `{count}p {name}` entries joined with `/`
    pub fn sets_label(&self) -> String {
        self.sets
            .iter()
            .map(|(name, count)| match count {
                Value::String(s) => format!("{s}p {name}"),
                other => format!("{other}p {name}"),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_consumed_fields() {
        let json = r#"{
            "sim_version": "abc",
            "statistics": {
                "dps": { "mean": 41234.5, "min": 1.0 },
                "character_dps": [ { "mean": 20000.0 } ]
            },
            "character_details": [
                {
                    "name": "xiao",
                    "level": 90,
                    "weapon": { "name": "primordialjadewingedspear", "refine": 1 },
                    "sets": { "vermillionhereafter": 2, "gladiatorsfinale": 2 }
                }
            ]
        }"#;

        let result: SimulationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.statistics.dps.mean, 41234.5);
        assert_eq!(result.statistics.character_dps.len(), 1);

        let detail: CharacterDetail =
            serde_json::from_value(result.character_details[0].clone()).unwrap();
        assert_eq!(detail.weapon.refine, 1);
        // document order is kept
        assert_eq!(detail.sets_label(), "2p vermillionhereafter/2p gladiatorsfinale");
    }

    #[test]
    fn test_missing_mean_is_a_data_error() {
        let err = serde_json::from_str::<SimulationResult>(r#"{"statistics": {"dps": {}}}"#)
            .unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_single_set_label() {
        let detail: CharacterDetail = serde_json::from_str(
            r#"{"name": "xiao", "weapon": {"name": "w", "refine": 5}, "sets": {"gladiatorsfinale": 4}}"#,
        )
        .unwrap();
        assert_eq!(detail.sets_label(), "4p gladiatorsfinale");
    }
}
