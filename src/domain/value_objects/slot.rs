//! Party slots and the equipment choices a table row makes for each one

/// Number of party slots in a team
pub const SLOT_COUNT: usize = 4;

/// One of the four party-member slots (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(u8);

impl SlotIndex {
    #[cfg(test)]
    pub fn new(number: u8) -> Option<Self> {
        (1..=SLOT_COUNT as u8).contains(&number).then_some(Self(number))
    }

    /// Every slot, in template substitution order
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (1..=SLOT_COUNT as u8).map(Self)
    }

    /// 0-based position into the simulator's per-character arrays
    pub fn position(&self) -> usize {
        usize::from(self.0) - 1
    }

    /// Template token replaced by this slot's block, e.g. `$char2`
    pub fn placeholder(&self) -> String {
        format!("$char{}", self.0)
    }

    /// Variable table column for one of this slot's fields, e.g. `$char2_weapon`
    pub fn column(&self, field: SlotField) -> String {
        format!("$char{}_{}", self.0, field.as_str())
    }

    /// Report sheet column for this slot, e.g. `char2_dps`
    pub fn report_column(&self, suffix: &str) -> String {
        format!("char{}_{}", self.0, suffix)
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "char{}", self.0)
    }
}

/// The eight per-slot columns of the variable table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotField {
    Name,
    Weapon,
    Refinement,
    Artifact1,
    Artifact2,
    Sands,
    Goblet,
    Circlet,
}

impl SlotField {
    pub const ALL: [SlotField; 8] = [
        SlotField::Name,
        SlotField::Weapon,
        SlotField::Refinement,
        SlotField::Artifact1,
        SlotField::Artifact2,
        SlotField::Sands,
        SlotField::Goblet,
        SlotField::Circlet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Weapon => "weapon",
            Self::Refinement => "refinement",
            Self::Artifact1 => "artifact1",
            Self::Artifact2 => "artifact2",
            Self::Sands => "sands",
            Self::Goblet => "goblet",
            Self::Circlet => "circlet",
        }
    }
}

/// Artifact set bonuses a slot equips
///
/// Either a full 4-piece set, or two 2-piece halves. Nothing else is
/// expressible from a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSets {
    FourPiece(String),
    TwoPiece(String, String),
}

impl ArtifactSets {
    /// Pick the set form from the two artifact columns. A blank second set
    /// means the first is worn as a 4-piece.
    pub fn from_columns(first: &str, second: &str) -> Self {
        let second = second.trim();
        if second.is_empty() {
            Self::FourPiece(first.trim().to_string())
        } else {
            Self::TwoPiece(first.trim().to_string(), second.to_string())
        }
    }
}

/// Main-stat selectors for the three variable artifact pieces
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MainStats {
    pub sands: String,
    pub goblet: String,
    pub circlet: String,
}

/// Everything a table row specifies for one occupied slot
#[derive(Debug, Clone, PartialEq)]
pub struct SlotSpec {
    pub name: String,
    pub weapon: String,
    pub refinement: String,
    pub sets: ArtifactSets,
    pub main_stats: MainStats,
}
