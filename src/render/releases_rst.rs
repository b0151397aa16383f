//! Generated index of available release manuals (releases.rst)
//!
//! Built from scratch, no template input: a "supported" section per active
//! release plus the dev-adjacent entries, then an "outdated" section for
//! every remaining registry series. Tags are matched to a series by exact
//! or dotted-prefix equality against the series version.

use crate::core::registry::ReleaseRegistry;

/// Placeholder entry preceding the first tagged release; never rendered
const PRE_HISTORY_CODENAME: &str = "jethro-pre";

/// First release, whose earliest manuals predate the tag scheme
const FIRST_CODENAME: &str = "jethro";

/// Render the manual index from the registry and the sorted tag list
///
/// `tags` is the full `yocto-*` tag list, version-sorted, with the prefix
/// already stripped.
pub fn render_manual_index(registry: &ReleaseRegistry, tags: &[String]) -> String {
  let mut out = String::new();

  out.push_str("===========================\n");
  out.push_str(" Supported Release Manuals\n");
  out.push_str("===========================\n");
  out.push('\n');

  let active = registry.active_codenames();
  for codename in &active {
    if let Some(series_version) = registry.series_version(codename) {
      push_series_section(&mut out, series_version, codename, tags, false);
    }
  }

  out.push_str("==========================\n");
  out.push_str(" Outdated Release Manuals\n");
  out.push_str("==========================\n");
  out.push('\n');

  for entry in registry.entries() {
    let codename = entry.codename.as_str();
    if codename == registry.dev_codename() || active.contains(&codename) || codename == PRE_HISTORY_CODENAME {
      continue;
    }

    push_series_section(&mut out, &entry.series_version, codename, tags, codename == FIRST_CODENAME);
  }

  out
}

fn push_series_section(out: &mut String, series_version: &str, codename: &str, tags: &[String], legacy_manual: bool) {
  let title = format!("Release Series {} ({})", series_version, codename);
  let rule = "*".repeat(title.len());

  out.push_str(&rule);
  out.push('\n');
  out.push_str(&title);
  out.push('\n');
  out.push_str(&rule);
  out.push('\n');
  out.push('\n');

  if legacy_manual {
    out.push_str("- :yocto_docs:`1.9 Documentation </1.9>`\n");
  }

  let dotted_prefix = format!("{}.", series_version);
  for tag in tags {
    if tag == series_version || tag.starts_with(&dotted_prefix) {
      out.push_str(&format!("- :yocto_docs:`{} Documentation </{}>`\n", tag, tag));
    }
  }

  out.push('\n');
}
