//! Tests for the rendered artifacts

use crate::helpers::{TestDocs, run_set_versions, run_set_versions_unchecked, stderr_of};
use anyhow::Result;

/// Checkout with release history: 5.0 and 5.0.1 on scarthgap, 5.2 at the
/// walnascar tip, HEAD on master at the tagged release commit
fn release_checkout() -> Result<TestDocs> {
  let docs = TestDocs::new_repo()?;
  docs.git(&["tag", "yocto-5.0"])?;
  docs.git(&["tag", "yocto-5.0.1"])?;
  docs.git(&["branch", "scarthgap"])?;

  docs.commit_change("Release 5.2")?;
  docs.git(&["tag", "yocto-5.2"])?;
  docs.git(&["branch", "walnascar"])?;

  Ok(docs)
}

#[test]
fn renders_config_from_template() -> Result<()> {
  let docs = release_checkout()?;
  run_set_versions(&docs.path, &[])?;

  let config = docs.read_file("poky.yaml")?;
  assert!(config.contains("DISTRO : \"5.2\"\n"));
  assert!(config.contains("DISTRO_NAME : \"Walnascar\"\n"));
  assert!(config.contains("DISTRO_NAME_NO_CAP : \"walnascar\"\n"));
  assert!(config.contains("DISTRO_NAME_NO_CAP_MINUS_ONE : \"scarthgap\"\n"));
  assert!(config.contains("DISTRO_NAME_NO_CAP_LTS : \"scarthgap\"\n"));
  assert!(config.contains("YOCTO_DOC_VERSION : \"5.2\"\n"));
  assert!(config.contains("BITBAKE_SERIES : \"2.12\"\n"));

  // Unknown keys pass through byte-for-byte
  assert!(config.contains("YOCTO_DL_URL : \"https://downloads.yoctoproject.org\"\n"));
  // 5.2 never carried a poky version
  assert!(!config.contains("POKYVERSION"));

  Ok(())
}

#[test]
fn renders_switchers_from_template() -> Result<()> {
  let docs = release_checkout()?;
  run_set_versions(&docs.path, &[])?;

  let switchers = docs.read_file("sphinx-static/switchers.js")?;
  assert!(switchers.contains("'dev': {'title': 'Unstable (dev)', 'hash': '"));
  assert!(switchers.contains("'5.2-tip': {'title': 'Walnascar (5.2)', 'hash': '"));
  assert!(switchers.contains("'5.0-tip': {'title': 'Scarthgap (5.0.1)', 'hash': '"));
  assert!(switchers.contains("'5.3': {'codename': 'Whinlatter', 'latest_tag': ''},"));
  assert!(switchers.contains("'5.2': {'codename': 'Walnascar', 'latest_tag': '5.2'},"));
  assert!(switchers.contains("'4.0': {'codename': 'Kirkstone', 'latest_tag': ''},"));
  assert!(switchers.contains("var latest_version =\n    '5.2-tip'\n;\n"));
  assert!(!switchers.contains("PLACEHOLDER"));

  Ok(())
}

#[test]
fn generates_manual_index() -> Result<()> {
  let docs = release_checkout()?;
  run_set_versions(&docs.path, &[])?;

  let index = docs.read_file("releases.rst")?;
  assert!(index.contains(" Supported Release Manuals\n"));
  assert!(index.contains("Release Series 5.2 (walnascar)"));
  assert!(index.contains("- :yocto_docs:`5.2 Documentation </5.2>`\n"));
  assert!(index.contains("Release Series 5.0 (scarthgap)"));
  assert!(index.contains("- :yocto_docs:`5.0 Documentation </5.0>`\n"));
  assert!(index.contains("- :yocto_docs:`5.0.1 Documentation </5.0.1>`\n"));
  assert!(index.contains(" Outdated Release Manuals\n"));
  assert!(index.contains("Release Series 4.0 (kirkstone)"));
  // The dev series has no manual section
  assert!(!index.contains("whinlatter"));

  // Supported sections come before the outdated ones
  let walnascar = index.find("(walnascar)").unwrap();
  let kirkstone = index.find("(kirkstone)").unwrap();
  assert!(walnascar < kirkstone);

  Ok(())
}

#[test]
fn renders_switchers_without_local_release_branches() -> Result<()> {
  let docs = TestDocs::new_repo()?;
  docs.git(&["tag", "yocto-5.2"])?;
  docs.commit_change("Trunk work")?;

  run_set_versions(&docs.path, &[])?;

  // Release branches the clone never created get an empty hash
  let switchers = docs.read_file("sphinx-static/switchers.js")?;
  assert!(switchers.contains("'5.2-tip': {'title': 'Walnascar (5.2)', 'hash': ''},"));
  assert!(switchers.contains("'5.0-tip': {'title': 'Scarthgap ()', 'hash': ''},"));
  assert!(switchers.contains("'dev': {'title': 'Unstable (dev)', 'hash': '"));
  assert!(!switchers.contains("'dev': {'title': 'Unstable (dev)', 'hash': ''}"));

  assert!(docs.file_exists("poky.yaml"));
  assert!(docs.file_exists("releases.rst"));

  Ok(())
}

#[test]
fn missing_config_template_is_skipped() -> Result<()> {
  let docs = release_checkout()?;
  std::fs::remove_file(docs.path.join("poky.yaml.in"))?;

  run_set_versions(&docs.path, &[])?;

  assert!(!docs.file_exists("poky.yaml"));
  assert!(docs.file_exists("sphinx-static/switchers.js"));
  assert!(docs.file_exists("releases.rst"));

  Ok(())
}

#[test]
fn missing_switchers_template_is_fatal() -> Result<()> {
  let docs = release_checkout()?;
  std::fs::remove_file(docs.path.join("sphinx-static/switchers.js.in"))?;

  let output = run_set_versions_unchecked(&docs.path, &[])?;
  assert!(!output.status.success());
  assert!(stderr_of(&output).contains("switchers.js.in"));

  // Earlier outputs stay in place; there is no rollback
  assert!(docs.file_exists("poky.yaml"));

  Ok(())
}

#[test]
fn honors_docs_dir_flag() -> Result<()> {
  let docs = release_checkout()?;
  let elsewhere = tempfile::tempdir()?;

  run_set_versions(elsewhere.path(), &["--docs-dir", docs.path.to_str().unwrap()])?;
  assert!(docs.file_exists("releases.rst"));

  Ok(())
}
