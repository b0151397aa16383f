//! Sentinel-line expansion for the version switcher JS template
//!
//! The template carries three sentinel lines; each expands to generated
//! entries enumerating release and version data. Collecting the git-derived
//! data is separated from rendering so the renderer stays a pure string
//! transformation.

use crate::core::error::{DocsError, DocsResult};
use crate::core::registry::ReleaseRegistry;
use crate::core::vcs::SystemGit;
use crate::render::replacements::capitalize;
use crate::resolve::version::{TAG_PREFIX, TRUNK_BRANCH};

const VERSIONS_SENTINEL: &str = "VERSIONS_PLACEHOLDER";
const ALL_RELEASES_SENTINEL: &str = "ALL_RELEASES_PLACEHOLDER";
const LATEST_VERSION_SENTINEL: &str = "LATEST_VERSION_PLACEHOLDER";

/// One active release branch in the switcher dropdown
#[derive(Debug, Clone)]
pub struct ActiveBranch {
  pub series_version: String,
  pub codename: String,
  /// Latest point release of the series, or "" when the series has no tags
  pub latest_release: String,
  /// Abbreviated hash of the local branch tip, or "" when the branch
  /// only exists remotely
  pub hash: String,
}

/// One registry series in the all-releases map
#[derive(Debug, Clone)]
pub struct SeriesRelease {
  pub series_version: String,
  pub codename: String,
  pub latest_release: String,
}

/// Git-derived data feeding the switcher template
#[derive(Debug, Clone)]
pub struct SwitcherData {
  /// Abbreviated hash of the trunk tip, or "" when trunk is not local
  pub dev_hash: String,
  pub active: Vec<ActiveBranch>,
  pub all_releases: Vec<SeriesRelease>,
  /// Series version of the newest active release
  pub latest_series: String,
}

/// Collect the switcher data from git and the registry
pub fn collect(git: &SystemGit, registry: &ReleaseRegistry) -> DocsResult<SwitcherData> {
  // Branches may exist only as remote-tracking refs in a fresh clone;
  // an unresolvable name leaves the entry's hash empty.
  let dev_hash = git.try_short_hash(TRUNK_BRANCH)?.unwrap_or_default();

  let mut active = Vec::new();
  for codename in registry.active_codenames() {
    let series_version = registry
      .series_version(codename)
      .ok_or_else(|| DocsError::message(format!("No series version for codename '{}'", codename)))?;
    let tags = git.list_tags(&format!("{}{}*", TAG_PREFIX, series_version))?;

    active.push(ActiveBranch {
      series_version: series_version.to_string(),
      codename: codename.to_string(),
      latest_release: latest_point_release(series_version, &tags),
      hash: git.try_short_hash(codename)?.unwrap_or_default(),
    });
  }

  let latest_series = active
    .first()
    .map(|a| a.series_version.clone())
    .ok_or_else(|| DocsError::message("No active release series in the registry"))?;

  let mut all_releases = Vec::new();
  for entry in registry.entries() {
    let tags = git.list_tags(&format!("{}{}*", TAG_PREFIX, entry.series_version))?;
    all_releases.push(SeriesRelease {
      series_version: entry.series_version.clone(),
      codename: entry.codename.clone(),
      latest_release: latest_point_release(&entry.series_version, &tags),
    });
  }

  Ok(SwitcherData {
    dev_hash,
    active,
    all_releases,
    latest_series,
  })
}

/// Render the switcher template against the collected data
pub fn render_switchers(template: &str, data: &SwitcherData) -> String {
  let mut out = String::with_capacity(template.len());

  for raw in template.split_inclusive('\n') {
    if raw.contains(VERSIONS_SENTINEL) {
      out.push_str(&format!(
        "    'dev': {{'title': 'Unstable (dev)', 'hash': '{}'}},\n",
        data.dev_hash
      ));
      for branch in &data.active {
        out.push_str(&format!(
          "    '{}-tip': {{'title': '{} ({})', 'hash': '{}'}},\n",
          branch.series_version,
          capitalize(&branch.codename),
          branch.latest_release,
          branch.hash
        ));
      }
    } else if raw.contains(ALL_RELEASES_SENTINEL) {
      for series in &data.all_releases {
        out.push_str(&format!(
          "    '{}': {{'codename': '{}', 'latest_tag': '{}'}},\n",
          series.series_version,
          capitalize(&series.codename),
          series.latest_release
        ));
      }
    } else if raw.contains(LATEST_VERSION_SENTINEL) {
      out.push_str(&format!("    '{}-tip'\n", data.latest_series));
    } else {
      out.push_str(raw);
    }
  }

  out
}

/// Latest point release of a series, from its release tag list
///
/// The bare series tag counts as point release 0; "yocto-5.2.N" counts as
/// N. Tags with a non-numeric point component are ignored. Returns "" when
/// the series has no release tags at all.
pub fn latest_point_release(series_version: &str, tags: &[String]) -> String {
  let exact = format!("{}{}", TAG_PREFIX, series_version);
  let point_prefix = format!("{}.", exact);

  let mut points: Vec<u64> = Vec::new();
  for tag in tags {
    if *tag == exact {
      points.push(0);
    } else if let Some(rest) = tag.strip_prefix(&point_prefix)
      && let Ok(point) = rest.parse::<u64>()
    {
      points.push(point);
    }
  }

  match points.into_iter().max() {
    None => String::new(),
    Some(0) => series_version.to_string(),
    Some(max) => format!("{}.{}", series_version, max),
  }
}
