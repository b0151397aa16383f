//! Placeholder replacement table
//!
//! Built once from the version context and the registry, then consumed
//! read-only by the config renderer.

use crate::core::error::{DocsError, DocsResult};
use crate::core::registry::ReleaseRegistry;
use crate::resolve::mappings;
use crate::resolve::version::VersionContext;
use std::collections::HashMap;

/// Build the placeholder -> value table for the config template
pub fn build_replacements(registry: &ReleaseRegistry, ctx: &VersionContext) -> DocsResult<HashMap<String, String>> {
  let series_version = registry
    .series_version(&ctx.series)
    .ok_or_else(|| DocsError::message(format!("No series version for codename '{}'", ctx.series)))?;

  let mut replacements = HashMap::from([
    ("DISTRO".to_string(), ctx.distro.clone()),
    ("DISTRO_LATEST_TAG".to_string(), ctx.latest_tag.clone()),
    ("DISTRO_RELEASE_SERIES".to_string(), series_version.to_string()),
    ("DISTRO_NAME_NO_CAP".to_string(), ctx.series.clone()),
    ("DISTRO_NAME".to_string(), capitalize(&ctx.series)),
    ("DISTRO_NAME_NO_CAP_MINUS_ONE".to_string(), ctx.previous_series.clone()),
    ("DISTRO_NAME_NO_CAP_LTS".to_string(), ctx.last_lts.clone()),
    ("YOCTO_DOC_VERSION".to_string(), ctx.version.clone()),
    ("DOCCONF_VERSION".to_string(), ctx.version.clone()),
    ("BITBAKE_SERIES".to_string(), ctx.bitbake_version.clone()),
  ]);

  if let Some(poky_base) = mappings::poky_base_version(series_version) {
    replacements.insert("POKYVERSION".to_string(), poky_version(poky_base, series_version, &ctx.version));
  }

  Ok(replacements)
}

/// Poky version for a legacy series
///
/// The point-release component of the resolved version (the part after the
/// last dot) carries over onto the poky base version; a bare series version
/// gets ".0".
fn poky_version(poky_base: &str, series_version: &str, version: &str) -> String {
  if version != series_version {
    let point = version.rsplit('.').next().unwrap_or(version);
    format!("{}.{}", poky_base, point)
  } else {
    format!("{}.0", poky_base)
  }
}

/// Capitalize the first character of a codename
pub fn capitalize(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}
