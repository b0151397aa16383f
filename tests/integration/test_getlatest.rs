//! Tests for the getlatest query

use crate::helpers::{TestDocs, run_set_versions, run_set_versions_unchecked, stderr_of, stdout_of};
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn getlatest_prints_newest_active_codename() -> Result<()> {
  // No git repo: the query must work from the registry alone
  let docs = TestDocs::new()?;

  let output = run_set_versions(&docs.path, &["getlatest"])?;
  assert_eq!(stdout_of(&output).trim(), "walnascar");

  Ok(())
}

#[test]
fn getlatest_fails_without_registry() -> Result<()> {
  let empty = TempDir::new()?;

  let output = run_set_versions_unchecked(empty.path(), &["getlatest"])?;
  assert!(!output.status.success());
  assert!(stderr_of(&output).contains("releases.json"));

  Ok(())
}

#[test]
fn unknown_query_is_rejected() -> Result<()> {
  let docs = TestDocs::new()?;

  let output = run_set_versions_unchecked(&docs.path, &["frobnicate"])?;
  assert!(!output.status.success());

  Ok(())
}
