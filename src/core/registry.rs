//! Release registry (releases.json) parsing and lookup
//!
//! The registry is an ordered list of release records, newest first. The
//! order is significant: "previous series" and "last LTS" are derived from
//! it, so the registry is kept as a list plus index lookups rather than a
//! map.

use crate::core::error::{DocsError, DocsResult, RegistryError, ResultExt};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Status marking the trunk/development series
const STATUS_ACTIVE_DEVELOPMENT: &str = "Active Development";

/// Substring marking a long-term-support series
const STATUS_LTS_MARKER: &str = "LTS until";

/// Series flag marking a currently supported series
const SERIES_CURRENT: &str = "current";

/// Fallback codename when no LTS series precedes the resolved one
const LEGACY_LTS_CODENAME: &str = "dunfell";

/// One record from releases.json
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEntry {
  /// Release codename (lowercased on load)
  #[serde(rename = "release_codename")]
  pub codename: String,

  /// Point release series, e.g. "5.3"
  pub series_version: String,

  /// Human-readable status, e.g. "Active Development" or "Supported - LTS until Apr. 2028"
  pub status: String,

  /// Series flag; "current" marks a supported series
  #[serde(default)]
  pub series: String,
}

impl ReleaseEntry {
  /// Whether this entry is the trunk/development series
  pub fn is_dev(&self) -> bool {
    self.status == STATUS_ACTIVE_DEVELOPMENT
  }

  /// Whether this entry is flagged as a current series
  pub fn is_current(&self) -> bool {
    self.series == SERIES_CURRENT
  }

  /// Whether this entry is a long-term-support series
  pub fn is_lts(&self) -> bool {
    self.status.contains(STATUS_LTS_MARKER)
  }
}

/// Ordered release registry with derived classification
#[derive(Debug, Clone)]
pub struct ReleaseRegistry {
  entries: Vec<ReleaseEntry>,
  dev_index: usize,
}

impl ReleaseRegistry {
  /// Load the registry from a releases.json file
  pub fn load(path: &Path) -> DocsResult<Self> {
    if !path.exists() {
      return Err(DocsError::Registry(RegistryError::NotFound {
        path: path.to_path_buf(),
      }));
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read registry from {}", path.display()))?;
    let entries: Vec<ReleaseEntry> = serde_json::from_str(&content)?;

    Self::from_entries(entries)
  }

  /// Build the registry from parsed entries
  ///
  /// Codenames are lowercased here so branch names and mapping keys compare
  /// directly. Exactly one entry must be in active development; if several
  /// are flagged, the first (newest) wins.
  pub fn from_entries(mut entries: Vec<ReleaseEntry>) -> DocsResult<Self> {
    for entry in &mut entries {
      entry.codename = entry.codename.to_lowercase();
    }

    let dev_index = entries
      .iter()
      .position(|e| e.is_dev())
      .ok_or(DocsError::Registry(RegistryError::NoActiveDevelopment))?;

    Ok(Self { entries, dev_index })
  }

  /// All entries, newest first
  pub fn entries(&self) -> &[ReleaseEntry] {
    &self.entries
  }

  /// All codenames in registry order
  pub fn codenames(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|e| e.codename.as_str())
  }

  /// Codename of the development series
  pub fn dev_codename(&self) -> &str {
    &self.entries[self.dev_index].codename
  }

  /// Series version of the development series
  pub fn dev_series_version(&self) -> &str {
    &self.entries[self.dev_index].series_version
  }

  /// Active release codenames: current series minus the development one
  ///
  /// The development entry is excluded with a filter rather than a removal,
  /// so a registry where it is not also flagged "current" still classifies
  /// cleanly.
  pub fn active_codenames(&self) -> Vec<&str> {
    self
      .entries
      .iter()
      .filter(|e| e.is_current() && !e.is_dev())
      .map(|e| e.codename.as_str())
      .collect()
  }

  /// Long-term-support codenames in registry order
  pub fn lts_codenames(&self) -> Vec<&str> {
    self
      .entries
      .iter()
      .filter(|e| e.is_lts())
      .map(|e| e.codename.as_str())
      .collect()
  }

  /// Series version for a codename
  pub fn series_version(&self, codename: &str) -> Option<&str> {
    self
      .entries
      .iter()
      .find(|e| e.codename == codename)
      .map(|e| e.series_version.as_str())
  }

  /// Codename for a series version (e.g. "5.3" -> "whinlatter")
  pub fn codename_for_series(&self, series_version: &str) -> Option<&str> {
    self
      .entries
      .iter()
      .find(|e| e.series_version == series_version)
      .map(|e| e.codename.as_str())
  }

  /// Whether a branch name is a known release codename
  pub fn is_codename(&self, name: &str) -> bool {
    self.entries.iter().any(|e| e.codename == name)
  }

  /// Entries strictly older than the given codename, in registry order
  pub fn previous_entries(&self, codename: &str) -> &[ReleaseEntry] {
    match self.entries.iter().position(|e| e.codename == codename) {
      Some(idx) => &self.entries[idx + 1..],
      None => &[],
    }
  }

  /// Codename of the series immediately preceding the given one, or ""
  pub fn previous_codename(&self, codename: &str) -> &str {
    self
      .previous_entries(codename)
      .first()
      .map(|e| e.codename.as_str())
      .unwrap_or("")
  }

  /// Nearest LTS codename strictly older than the given one
  ///
  /// Falls back to the legacy LTS codename when no older series is LTS.
  pub fn last_lts(&self, codename: &str) -> &str {
    self
      .previous_entries(codename)
      .iter()
      .find(|e| e.is_lts())
      .map(|e| e.codename.as_str())
      .unwrap_or(LEGACY_LTS_CODENAME)
  }
}
