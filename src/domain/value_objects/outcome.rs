//! Per-item outcomes of a best-effort batch

use super::RowIndex;

/// What happened to one row of a batch stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Success,
    /// Nothing was attempted for this row
    Skipped(String),
    /// The row was attempted and failed; the batch carried on
    Failed(String),
}

impl ItemOutcome {
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Skipped(reason) | Self::Failed(reason) => Some(reason),
        }
    }
}

/// Outcomes of one batch stage, in the order rows were processed
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    items: Vec<(RowIndex, ItemOutcome)>,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, index: RowIndex, outcome: ItemOutcome) {
        self.items.push((index, outcome));
    }

    #[cfg(test)]
    pub fn outcome(&self, index: RowIndex) -> Option<&ItemOutcome> {
        self.items
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, outcome)| outcome)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Success))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed(_)))
    }

    /// Rows that did not succeed, with their reasons
    pub fn problems(&self) -> impl Iterator<Item = (RowIndex, &str)> {
        self.items
            .iter()
            .filter_map(|(index, outcome)| outcome.reason().map(|reason| (*index, reason)))
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|(_, o)| pred(o)).count()
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} succeeded, {} skipped, {} failed",
            self.succeeded(),
            self.skipped(),
            self.failed()
        )
    }
}
