//! Full render pass: resolve the checkout version, then write the three
//! output artifacts
//!
//! Strictly sequential: registry diagnostics, git preflight, version
//! resolution, then one render step per output file. Each output is a full
//! overwrite; a failed run leaves earlier outputs in place.

use crate::core::error::{DocsResult, ResultExt};
use crate::core::registry::ReleaseRegistry;
use crate::core::vcs::SystemGit;
use crate::render::{releases_rst, replacements, switchers, yaml};
use crate::resolve::version::{self, TAG_PREFIX};
use std::fs;
use std::path::Path;

/// Config template and output, relative to the docs directory
const CONFIG_TEMPLATE: &str = "poky.yaml.in";
const CONFIG_OUTPUT: &str = "poky.yaml";

/// Switcher template and output, relative to the docs directory
const SWITCHERS_TEMPLATE: &str = "sphinx-static/switchers.js.in";
const SWITCHERS_OUTPUT: &str = "sphinx-static/switchers.js";

/// Generated manual index, relative to the docs directory
const MANUAL_INDEX_OUTPUT: &str = "releases.rst";

/// Run the full render pass
pub fn run_render(docs_dir: &Path, registry: &ReleaseRegistry) -> DocsResult<()> {
  println!("activereleases calculated to be {:?}", registry.active_codenames());
  println!("devbranch calculated to be {}", registry.dev_codename());
  println!("ltsseries calculated to be {:?}", registry.lts_codenames());

  let git = SystemGit::open(docs_dir)?;
  let ctx = version::resolve(&git, registry)?;

  render_config(docs_dir, registry, &ctx)?;
  render_switchers(docs_dir, &git, registry)?;
  render_manual_index(docs_dir, &git, registry)?;

  Ok(())
}

/// Render poky.yaml from its template; skipped silently when absent
fn render_config(docs_dir: &Path, registry: &ReleaseRegistry, ctx: &version::VersionContext) -> DocsResult<()> {
  let template_path = docs_dir.join(CONFIG_TEMPLATE);
  if !template_path.exists() {
    return Ok(());
  }

  let table = replacements::build_replacements(registry, ctx)?;
  let template =
    fs::read_to_string(&template_path).with_context(|| format!("Failed to read {}", template_path.display()))?;
  let rendered = yaml::render_config(&template, &table);

  let output_path = docs_dir.join(CONFIG_OUTPUT);
  fs::write(&output_path, rendered).with_context(|| format!("Failed to write {}", output_path.display()))?;

  println!("{} generated from {}", CONFIG_OUTPUT, CONFIG_TEMPLATE);
  Ok(())
}

/// Render the version switcher JS; the template is required
fn render_switchers(docs_dir: &Path, git: &SystemGit, registry: &ReleaseRegistry) -> DocsResult<()> {
  let template_path = docs_dir.join(SWITCHERS_TEMPLATE);
  let template =
    fs::read_to_string(&template_path).with_context(|| format!("Failed to read {}", template_path.display()))?;

  let data = switchers::collect(git, registry)?;
  let rendered = switchers::render_switchers(&template, &data);

  let output_path = docs_dir.join(SWITCHERS_OUTPUT);
  fs::write(&output_path, rendered).with_context(|| format!("Failed to write {}", output_path.display()))?;

  println!("{} generated from {}", SWITCHERS_OUTPUT, SWITCHERS_TEMPLATE);
  Ok(())
}

/// Generate the release manual index from the registry and the tag list
fn render_manual_index(docs_dir: &Path, git: &SystemGit, registry: &ReleaseRegistry) -> DocsResult<()> {
  let tags: Vec<String> = git
    .list_tags_version_sorted(&format!("{}*", TAG_PREFIX))?
    .into_iter()
    .filter_map(|tag| tag.strip_prefix(TAG_PREFIX).map(str::to_string))
    .collect();

  let rendered = releases_rst::render_manual_index(registry, &tags);

  let output_path = docs_dir.join(MANUAL_INDEX_OUTPUT);
  fs::write(&output_path, rendered).with_context(|| format!("Failed to write {}", output_path.display()))?;

  println!("{} generated", MANUAL_INDEX_OUTPUT);
  Ok(())
}
