//! Value objects - Immutable objects defined by their attributes

mod ids;
mod outcome;
mod run_layout;
mod slot;
mod stat_values;

pub use ids::RowIndex;
pub use outcome::{BatchSummary, ItemOutcome};
pub use run_layout::RunLayout;
pub use slot::{ArtifactSets, MainStats, SlotField, SlotIndex, SlotSpec, SLOT_COUNT};
pub use stat_values::StatValueTable;
