//! Name Mapper - Short simulator codes to readable display names
//!
//! The shortcut tables are Go map literals, one entry per line:
//!
//! ```text
//! "xiao":          keys.Xiao,
//! "pjws":          keys.PrimordialJadeWingedSpear,
//! ```
//!
//! Each matching line yields its (code, key) pair; any other line is ignored.

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{info, warn};

use crate::application::ports::outbound::{ShortcutKind, ShortcutSourcePort};
use crate::domain::services::spaced_name;

static SHORTCUT_ENTRY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"^\s*"([^"]+)"\s*:\s*keys\.([A-Za-z0-9_]+)\s*,"#).ok());

/// Extract `code -> key` pairs from shortcut table source
pub fn parse_shortcuts(source: &str) -> HashMap<String, String> {
    let Some(entry) = SHORTCUT_ENTRY.as_ref() else {
        return HashMap::new();
    };

    source
        .lines()
        .filter_map(|line| entry.captures(line))
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Code-to-key lookups for characters and weapons
///
/// Built once per run and passed to whoever needs display names.
#[derive(Debug, Clone, Default)]
pub struct NameMapper {
    characters: HashMap<String, String>,
    weapons: HashMap<String, String>,
}

impl NameMapper {
    pub fn new(characters: HashMap<String, String>, weapons: HashMap<String, String>) -> Self {
        Self {
            characters,
            weapons,
        }
    }

    /// Fetch and parse both shortcut tables
    pub async fn load(source: &dyn ShortcutSourcePort) -> Result<Self> {
        let characters = Self::load_kind(source, ShortcutKind::Characters).await?;
        let weapons = Self::load_kind(source, ShortcutKind::Weapons).await?;
        Ok(Self::new(characters, weapons))
    }

    async fn load_kind(
        source: &dyn ShortcutSourcePort,
        kind: ShortcutKind,
    ) -> Result<HashMap<String, String>> {
        let text = source
            .fetch(kind)
            .await
            .with_context(|| format!("failed to fetch {kind} shortcut table"))?;
        let map = parse_shortcuts(&text);
        if map.is_empty() {
            warn!("No {} shortcuts found; names will be shown as codes", kind);
        } else {
            info!("Loaded {} {} shortcuts", map.len(), kind);
        }
        Ok(map)
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    pub fn display_character(&self, code: &str) -> String {
        Self::display(&self.characters, code)
    }

    pub fn display_weapon(&self, code: &str) -> String {
        Self::display(&self.weapons, code)
    }

    fn display(map: &HashMap<String, String>, code: &str) -> String {
        let key = map.get(code).map(String::as_str).unwrap_or(code);
        spaced_name(key)
    }
}
