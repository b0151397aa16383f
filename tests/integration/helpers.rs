//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Registry used by most tests: one dev series, two active (one LTS), one EOL
pub const SAMPLE_REGISTRY: &str = r#"[
  {"release_codename": "Whinlatter", "series_version": "5.3", "status": "Active Development", "series": "current"},
  {"release_codename": "Walnascar", "series_version": "5.2", "status": "Supported", "series": "current"},
  {"release_codename": "Scarthgap", "series_version": "5.0", "status": "Supported - LTS until Apr. 2028", "series": "current"},
  {"release_codename": "Kirkstone", "series_version": "4.0", "status": "EOL - LTS until Apr. 2026", "series": ""}
]"#;

pub const CONFIG_TEMPLATE: &str = r#"DISTRO : "0.0"
DISTRO_NAME_NO_CAP : "nodistro"
DISTRO_NAME : "Nodistro"
DISTRO_NAME_NO_CAP_MINUS_ONE : "nodistro"
DISTRO_NAME_NO_CAP_LTS : "nodistro"
YOCTO_DOC_VERSION : "0.0"
DOCCONF_VERSION : "0.0"
BITBAKE_SERIES : "0.0"
YOCTO_DL_URL : "https://downloads.yoctoproject.org"
"#;

pub const SWITCHERS_TEMPLATE: &str = r#"var all_versions = {
VERSIONS_PLACEHOLDER
};

var all_releases = {
ALL_RELEASES_PLACEHOLDER
};

var latest_version =
LATEST_VERSION_PLACEHOLDER
;
"#;

/// A documentation directory, optionally backed by a git checkout
pub struct TestDocs {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestDocs {
  /// Create a docs directory with registry and templates but no git repo
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    write_docs_files(&path)?;

    Ok(Self { _root: root, path })
  }

  /// Create a docs checkout: git repo on master with one initial commit
  pub fn new_repo() -> Result<Self> {
    let docs = Self::new()?;

    git(&docs.path, &["init", "--initial-branch=master"])?;
    git(&docs.path, &["config", "user.name", "Test User"])?;
    git(&docs.path, &["config", "user.email", "test@example.com"])?;
    docs.commit("Initial documentation")?;

    Ok(docs)
  }

  /// Commit current changes and return the commit SHA
  pub fn commit(&self, message: &str) -> Result<String> {
    git(&self.path, &["add", "."])?;
    git(&self.path, &["commit", "-m", message])?;

    let output = git(&self.path, &["rev-parse", "HEAD"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Add a commit touching a scratch file
  pub fn commit_change(&self, message: &str) -> Result<String> {
    let scratch = self.path.join("history.txt");
    let mut content = std::fs::read_to_string(&scratch).unwrap_or_default();
    content.push_str(message);
    content.push('\n');
    std::fs::write(&scratch, content)?;

    self.commit(message)
  }

  /// Run a git command in the docs directory
  pub fn git(&self, args: &[&str]) -> Result<Output> {
    git(&self.path, args)
  }

  /// Check if a file exists
  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  /// Read a file
  pub fn read_file(&self, path: &str) -> Result<String> {
    std::fs::read_to_string(self.path.join(path)).with_context(|| format!("Failed to read {}", path))
  }
}

fn write_docs_files(path: &Path) -> Result<()> {
  std::fs::write(path.join("releases.json"), SAMPLE_REGISTRY)?;
  std::fs::write(path.join("poky.yaml.in"), CONFIG_TEMPLATE)?;
  std::fs::create_dir_all(path.join("sphinx-static"))?;
  std::fs::write(path.join("sphinx-static/switchers.js.in"), SWITCHERS_TEMPLATE)?;
  Ok(())
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run the set-versions CLI, expecting success
pub fn run_set_versions(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_set_versions_unchecked(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "set-versions command failed: set-versions {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the set-versions CLI without checking the exit status
pub fn run_set_versions_unchecked(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_set-versions");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run set-versions")
}

/// stdout of a finished command as a String
pub fn stdout_of(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

/// stderr of a finished command as a String
pub fn stderr_of(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}
