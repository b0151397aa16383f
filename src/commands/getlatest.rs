//! Print the newest active release codename
//!
//! Used by the docs build orchestration to pick the default landing page.
//! Runs before any git interaction, so it works outside a checkout.

use crate::core::error::{DocsError, DocsResult};
use crate::core::registry::ReleaseRegistry;

/// Run the getlatest query
pub fn run_getlatest(registry: &ReleaseRegistry) -> DocsResult<()> {
  let active = registry.active_codenames();
  let newest = active.first().ok_or_else(|| {
    DocsError::with_help(
      "No active release series in the registry",
      "Flag at least one supported release as \"current\" in releases.json.",
    )
  })?;

  println!("{}", newest);
  Ok(())
}
