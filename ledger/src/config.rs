//! Ledger configuration with TOML file support.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Configuration for a vote ledger.
///
/// Can be loaded from a TOML file via [`LedgerConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Required leading `'0'` hex characters of every block hash.
    ///
    /// Sealing cost grows sixteenfold per unit, so this directly controls
    /// how long a seal (and the admission that triggers it) can take.
    #[serde(default = "default_difficulty")]
    pub difficulty: u32,

    /// Pending votes that trigger an automatic seal.
    #[serde(default = "default_max_votes_per_block")]
    pub max_votes_per_block: usize,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_difficulty() -> u32 {
    4
}

fn default_max_votes_per_block() -> usize {
    10
}

// ── Impl ───────────────────────────────────────────────────────────────

impl LedgerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, LedgerError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LedgerError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, LedgerError> {
        toml::from_str(s).map_err(|e| LedgerError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("LedgerConfig is always serializable to TOML")
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
            max_votes_per_block: default_max_votes_per_block(),
        }
    }
}
