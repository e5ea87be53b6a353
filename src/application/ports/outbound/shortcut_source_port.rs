//! Shortcut source port - Where the short-code name tables come from
//!
//! The simulator reports characters and weapons by short code (`xiao`,
//! `pjws`). Its upstream shortcut tables map those codes to canonical keys.

use async_trait::async_trait;

/// Which shortcut table to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKind {
    Characters,
    Weapons,
}

impl std::fmt::Display for ShortcutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Characters => write!(f, "characters"),
            Self::Weapons => write!(f, "weapons"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShortcutError {
    #[error("could not build HTTP client: {0}")]
    Client(String),
    #[error("request for {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
}

#[async_trait]
pub trait ShortcutSourcePort: Send + Sync {
    /// Raw source text of one shortcut table
    async fn fetch(&self, kind: ShortcutKind) -> Result<String, ShortcutError>;
}
