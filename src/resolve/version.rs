//! Resolve the documentation version from the current git checkout
//!
//! Exactly one of three paths produces the version context:
//!
//! 1. a release tag at HEAD,
//! 2. a recognized branch name (a codename, master, or master-next),
//! 3. a best-guess branch chosen by the smallest commit distance to a
//!    remote release branch.

use crate::core::error::{DocsError, DocsResult, GitError, RegistryError};
use crate::core::registry::ReleaseRegistry;
use crate::core::vcs::SystemGit;
use crate::resolve::mappings;

/// Prefix of release tags, e.g. "yocto-5.2.1"
pub const TAG_PREFIX: &str = "yocto-";

/// Trunk branch holding active development
pub const TRUNK_BRANCH: &str = "master";

/// Staging branch for patches queued onto trunk
pub const TRUNK_STAGING_BRANCH: &str = "master-next";

/// Version marker for trunk builds
pub const DEV_VERSION: &str = "dev";

/// Version marker for trunk-staging builds
pub const NEXT_VERSION: &str = "next";

/// Everything the renderers need to know about the resolved checkout
#[derive(Debug, Clone)]
pub struct VersionContext {
  /// Resolved version string, e.g. "5.2.1", "5.2-tip", "5.2-4d2acc0", "dev"
  pub version: String,

  /// Resolved release series codename
  pub series: String,

  /// Bitbake version for the series ("dev"/"next" on trunk builds)
  pub bitbake_version: String,

  /// Latest release tag reachable from HEAD, prefix stripped
  pub latest_tag: String,

  /// Public-facing distribution version
  pub distro: String,

  /// Whether the checkout sits exactly at a release branch tip
  pub is_branch_tip: bool,

  /// Codename of the preceding series, or ""
  pub previous_series: String,

  /// Codename of the nearest older LTS series
  pub last_lts: String,
}

struct Resolved {
  version: String,
  series: String,
  bitbake_version: String,
  is_branch_tip: bool,
}

/// Resolve the version context for the current checkout
pub fn resolve(git: &SystemGit, registry: &ReleaseRegistry) -> DocsResult<VersionContext> {
  verify_release_tags(git, registry)?;

  let resolved = match resolve_from_tag(git, registry)? {
    Some(resolved) => resolved,
    None => resolve_from_branch(git, registry)?,
  };

  let previous_series = registry.previous_codename(&resolved.series).to_string();
  let last_lts = registry.last_lts(&resolved.series).to_string();

  let latest_tag = match git.latest_tag(&format!("{}*", TAG_PREFIX))? {
    Some(tag) => tag.strip_prefix(TAG_PREFIX).unwrap_or(&tag).to_string(),
    None => {
      println!(
        "Did not find a tag with 'git describe', falling back to {}",
        resolved.version
      );
      resolved.version.clone()
    }
  };

  let distro = distro_version(
    &resolved.version,
    &latest_tag,
    resolved.is_branch_tip,
    registry.dev_series_version(),
  );

  println!("Version calculated to be {}", resolved.version);
  println!("Latest release tag found is {}{}", TAG_PREFIX, latest_tag);
  println!("Release series calculated to be {}", resolved.series);
  println!("Bitbake version calculated to be {}", resolved.bitbake_version);
  println!("DISTRO calculated to be {}", distro);

  Ok(VersionContext {
    version: resolved.version,
    series: resolved.series,
    bitbake_version: resolved.bitbake_version,
    latest_tag,
    distro,
    is_branch_tip: resolved.is_branch_tip,
    previous_series,
    last_lts,
  })
}

/// Check that the release tag of the newest active series exists locally
///
/// Its absence means the clone has never fetched tags, which would make
/// every tag-derived field silently wrong.
fn verify_release_tags(git: &SystemGit, registry: &ReleaseRegistry) -> DocsResult<()> {
  let active = registry.active_codenames();
  let newest = active
    .first()
    .ok_or_else(|| DocsError::message("No active release series in the registry"))?;

  // Codenames in the active list always have a registry entry
  let series_version = registry
    .series_version(newest)
    .ok_or_else(|| DocsError::message(format!("No series version for codename '{}'", newest)))?;

  let tag = format!("{}{}", TAG_PREFIX, series_version);
  if !git.tag_exists(&tag)? {
    return Err(DocsError::Git(GitError::MissingReleaseTag { tag }));
  }

  Ok(())
}

/// Resolve from a release tag at HEAD, if one is present
fn resolve_from_tag(git: &SystemGit, registry: &ReleaseRegistry) -> DocsResult<Option<Resolved>> {
  for tag in git.tags_at_head()? {
    let Some(version) = tag.strip_prefix(TAG_PREFIX) else {
      continue;
    };

    let series_version = series_prefix(version);
    let series = registry
      .codename_for_series(&series_version)
      .ok_or_else(|| DocsError::Registry(RegistryError::UnknownSeries { series_version }))?;
    let bitbake_version = lookup_bitbake(series)?;

    return Ok(Some(Resolved {
      version: version.to_string(),
      series: series.to_string(),
      bitbake_version,
      is_branch_tip: false,
    }));
  }

  Ok(None)
}

/// Resolve from the current branch, guessing one when HEAD is detached or
/// the branch name is unknown
fn resolve_from_branch(git: &SystemGit, registry: &ReleaseRegistry) -> DocsResult<Resolved> {
  let mut branch = git.current_branch()?;

  let known =
    !branch.is_empty() && (registry.is_codename(&branch) || branch == TRUNK_BRANCH || branch == TRUNK_STAGING_BRANCH);
  if !known {
    branch = guess_branch(git, registry)?;
    println!("Nearest release branch estimated to be {}", branch);
  }

  if branch == TRUNK_BRANCH {
    return Ok(Resolved {
      version: DEV_VERSION.to_string(),
      series: registry.dev_codename().to_string(),
      bitbake_version: DEV_VERSION.to_string(),
      is_branch_tip: false,
    });
  }

  if branch == TRUNK_STAGING_BRANCH {
    return Ok(Resolved {
      version: NEXT_VERSION.to_string(),
      series: registry.dev_codename().to_string(),
      bitbake_version: NEXT_VERSION.to_string(),
      is_branch_tip: false,
    });
  }

  let bitbake_version = lookup_bitbake(&branch)?;
  let base_version = registry
    .series_version(&branch)
    .ok_or_else(|| DocsError::message(format!("No series version for codename '{}'", branch)))?;

  // A codename that only resolves through a remote-tracking ref has no
  // local tip to sit on, so the checkout gets a hash-suffixed version.
  let head_commit = git.short_hash("HEAD")?;
  let is_branch_tip = match git.try_short_hash(&branch)? {
    Some(branch_commit) => branch_commit == head_commit,
    None => false,
  };

  let version = if is_branch_tip {
    format!("{}-tip", base_version)
  } else {
    format!("{}-{}", base_version, head_commit)
  };

  Ok(Resolved {
    version,
    series: branch,
    bitbake_version,
    is_branch_tip,
  })
}

/// Guess the nearest release branch by commit distance
///
/// Counts commits reachable from each remote release branch but not from
/// HEAD; missing remote branches are skipped. Falls back to trunk when no
/// candidate can be counted.
fn guess_branch(git: &SystemGit, registry: &ReleaseRegistry) -> DocsResult<String> {
  let mut counts = Vec::new();
  let mut best: Option<u64> = None;

  for candidate in registry.codenames().chain(std::iter::once(TRUNK_BRANCH)) {
    if let Some(count) = git.ahead_count(candidate)? {
      // Only candidates improving on the running minimum are reported
      if best.is_none_or(|b| count < b) {
        println!("Branch {} has count {}", candidate, count);
        best = Some(count);
      }
      counts.push((candidate.to_string(), count));
    }
  }

  Ok(pick_nearest_branch(&counts).unwrap_or(TRUNK_BRANCH).to_string())
}

/// Pick the candidate with the strictly smallest count
///
/// Ties keep the earlier candidate, so iteration order (registry order,
/// trunk last) decides between equal counts.
pub fn pick_nearest_branch(counts: &[(String, u64)]) -> Option<&str> {
  let mut best: Option<(&str, u64)> = None;

  for (name, count) in counts {
    match best {
      None => best = Some((name, *count)),
      Some((_, c)) if *count < c => best = Some((name, *count)),
      _ => {}
    }
  }

  best.map(|(name, _)| name)
}

/// Public-facing distribution version
///
/// Equals the resolved version, except at a branch tip (use the latest
/// release tag) and on trunk builds (use the dev series version).
pub fn distro_version(version: &str, latest_tag: &str, is_branch_tip: bool, dev_series_version: &str) -> String {
  if is_branch_tip {
    latest_tag.to_string()
  } else if version == DEV_VERSION || version == NEXT_VERSION {
    dev_series_version.to_string()
  } else {
    version.to_string()
  }
}

/// Major.minor prefix of a version string ("5.2.1" -> "5.2")
pub fn series_prefix(version: &str) -> String {
  version.split('.').take(2).collect::<Vec<_>>().join(".")
}

fn lookup_bitbake(codename: &str) -> DocsResult<String> {
  mappings::bitbake_version(codename)
    .map(str::to_string)
    .ok_or_else(|| {
      DocsError::Registry(RegistryError::UnknownCodename {
        codename: codename.to_string(),
        table: "bitbake".to_string(),
      })
    })
}
