//! Strongly-typed indices used as join keys across a run

/// 1-based position of a row in the variable table
///
/// The same index names the generated config, the simulator's result
/// document and the report row for that table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowIndex(usize);

impl RowIndex {
    /// Build from a 1-based row number. Returns `None` for zero.
    #[cfg(test)]
    pub fn new(number: usize) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    /// Build from a 0-based position in a sequence
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// All indices `1..=count`, in ascending order
    pub fn range(count: usize) -> impl Iterator<Item = RowIndex> {
        (1..=count).map(Self)
    }

    #[cfg(test)]
    pub fn number(&self) -> usize {
        self.0
    }

    pub fn position(&self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for RowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
