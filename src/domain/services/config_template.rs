//! Config template expansion
//!
//! A template is a gcsim config with `$char1`..`$char4` tokens where each
//! party member's equipment goes. Rendering a table row replaces each token
//! with that slot's equip statements.

use crate::domain::entities::VariableRow;
use crate::domain::value_objects::{ArtifactSets, SlotIndex, SlotSpec, StatValueTable};

/// Weapon level used for every equipped weapon
const WEAPON_LEVEL: &str = "90/90";
/// Flat HP from a max-level 5-star flower
const FLOWER_HP: u32 = 4780;
/// Flat ATK from a max-level 5-star feather
const FEATHER_ATK: u32 = 311;

/// A parsed template document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTemplate {
    text: String,
}

impl ConfigTemplate {
    /// Wrap template text, normalizing line endings to `\n`
    pub fn new(text: &str) -> Self {
        Self {
            text: text.replace("\r\n", "\n").replace('\r', "\n"),
        }
    }

    /// Substitute every occupied slot of `row` into the template.
    ///
    /// Slots with a blank name are skipped and their token stays in the
    /// output verbatim.
    pub fn render(&self, row: &VariableRow, stats: &StatValueTable) -> String {
        let mut document = self.text.clone();
        for slot in SlotIndex::all() {
            let Some(spec) = row.slot(slot) else {
                continue;
            };
            document = document.replace(&slot.placeholder(), &slot_block(&spec, stats));
        }
        document
    }
}

/// The equip statements for one slot, newline-joined
pub fn slot_block(spec: &SlotSpec, stats: &StatValueTable) -> String {
    let name = &spec.name;
    let mut lines = vec![format!(
        r#"{name} add weapon="{}" refine={} lvl={WEAPON_LEVEL};"#,
        spec.weapon, spec.refinement
    )];

    match &spec.sets {
        ArtifactSets::FourPiece(set) => {
            lines.push(format!(r#"{name} add set="{set}" count=4;"#));
        }
        ArtifactSets::TwoPiece(first, second) => {
            lines.push(format!(r#"{name} add set="{first}" count=2;"#));
            lines.push(format!(r#"{name} add set="{second}" count=2;"#));
        }
    }

    let main = &spec.main_stats;
    lines.push(format!(
        "{name} add stats hp={FLOWER_HP} atk={FEATHER_ATK} {}={} {}={} {}={} ; #main",
        main.sands,
        stats.value_of(&main.sands),
        main.goblet,
        stats.value_of(&main.goblet),
        main.circlet,
        stats.value_of(&main.circlet),
    ));

    lines.join("\n")
}
