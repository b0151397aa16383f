//! Static per-release mapping tables
//!
//! These tables need a new row for every release; the resolver reports a
//! diagnostic instead of guessing when a codename is missing.

/// Bitbake series shipped with each release codename
const BITBAKE_SERIES: &[(&str, &str)] = &[
  ("wrynose", "2.18"),
  ("whinlatter", "2.16"),
  ("walnascar", "2.12"),
  ("styhead", "2.10"),
  ("scarthgap", "2.8"),
  ("nanbield", "2.6"),
  ("mickledore", "2.4"),
  ("langdale", "2.2"),
  ("kirkstone", "2.0"),
  ("honister", "1.52"),
  ("hardknott", "1.50"),
  ("gatesgarth", "1.48"),
  ("dunfell", "1.46"),
];

/// Poky versions for the release series that still carried one
///
/// Series after 3.4 have no poky version; early 3.4 release docs still
/// reference it.
const POKY_VERSIONS: &[(&str, &str)] = &[("3.4", "26.0"), ("3.3", "25.0"), ("3.2", "24.0"), ("3.1", "23.0")];

/// Bitbake version for a release codename
pub fn bitbake_version(codename: &str) -> Option<&'static str> {
  BITBAKE_SERIES
    .iter()
    .find(|(name, _)| *name == codename)
    .map(|(_, version)| *version)
}

/// Poky base version for a release series, if the series had one
pub fn poky_base_version(series_version: &str) -> Option<&'static str> {
  POKY_VERSIONS
    .iter()
    .find(|(series, _)| *series == series_version)
    .map(|(_, version)| *version)
}
