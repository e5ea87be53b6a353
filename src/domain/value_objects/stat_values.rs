//! Main-stat values for 5-star artifacts at max level

use std::collections::HashMap;

/// Lookup from stat-type code (e.g. `atk%`, `cr`) to its main-stat value
///
/// Unknown codes resolve to zero rather than failing.
#[derive(Debug, Clone)]
pub struct StatValueTable {
    values: HashMap<String, f64>,
}

impl StatValueTable {
    /// Max-level 5-star main stats
    pub fn five_star() -> Self {
        let values = [
            ("hp%", 0.466),
            ("atk%", 0.466),
            ("def%", 0.583),
            ("em", 187.0),
            ("er", 0.518),
            ("cd", 0.622),
            ("cr", 0.311),
            ("heal", 0.359),
            ("phys%", 0.583),
            ("pyro%", 0.466),
            ("cryo%", 0.466),
            ("dendro%", 0.466),
            ("hydro%", 0.466),
            ("electro%", 0.466),
            ("geo%", 0.466),
            ("anemo%", 0.466),
        ]
        .into_iter()
        .map(|(code, value)| (code.to_string(), value))
        .collect();

        Self { values }
    }

    pub fn value_of(&self, code: &str) -> f64 {
        self.values.get(code).copied().unwrap_or(0.0)
    }
}

impl Default for StatValueTable {
    fn default() -> Self {
        Self::five_star()
    }
}
