//! System git backend - zero dependencies
//!
//! Every query the version resolver and the renderers need is a single
//! read-only git invocation: tags at HEAD, current branch, short hashes,
//! ahead counts, tag listings. Subprocesses run with an isolated
//! environment so user configuration cannot change the output format.

use crate::core::error::{DocsError, DocsResult, GitError, ResultExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,
}

impl SystemGit {
  /// Open a git checkout
  ///
  /// Performs one subprocess call to confirm the path is inside a work
  /// tree; anything else is a fatal environment error.
  pub fn open(path: &Path) -> DocsResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--is-inside-work-tree"])
      .output()
      .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
      return Err(DocsError::Git(GitError::NotARepository {
        path: path.to_path_buf(),
      }));
    }

    Ok(Self {
      repo_path: path.to_path_buf(),
    })
  }

  /// Whether a tag is present locally
  pub fn tag_exists(&self, tag: &str) -> DocsResult<bool> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "--verify", "--quiet", &format!("refs/tags/{}", tag)])
      .output()
      .context("Failed to check for tag")?;

    Ok(output.status.success())
  }

  /// Tags pointing at HEAD
  pub fn tags_at_head(&self) -> DocsResult<Vec<String>> {
    let stdout = self.run(&["tag", "--points-at", "HEAD"], "git tag --points-at")?;
    Ok(split_lines(&stdout))
  }

  /// Current branch name; empty string when HEAD is detached
  pub fn current_branch(&self) -> DocsResult<String> {
    let output = self
      .git_cmd()
      .args(["branch", "--show-current"])
      .output()
      .context("Failed to get current branch")?;

    if !output.status.success() {
      return Ok(String::new());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Abbreviated hash of a ref that must exist, such as HEAD
  pub fn short_hash(&self, refname: &str) -> DocsResult<String> {
    let stdout = self.run(&["rev-parse", "--short", refname], "git rev-parse --short")?;
    Ok(stdout.trim().to_string())
  }

  /// Abbreviated hash of a ref, or None when the ref does not resolve
  ///
  /// Release codenames often exist only as remote-tracking refs in a
  /// fresh clone; callers treat an unresolvable name as "no local tip".
  pub fn try_short_hash(&self, refname: &str) -> DocsResult<Option<String>> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "--short", refname])
      .output()
      .context("Failed to run git rev-parse --short")?;

    if !output.status.success() {
      return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
  }

  /// Commits reachable from origin/<branch> but not from HEAD
  ///
  /// Returns None when the remote branch does not exist locally; such
  /// candidates are skipped by the best-guess heuristic.
  pub fn ahead_count(&self, branch: &str) -> DocsResult<Option<u64>> {
    let range = format!("HEAD..origin/{}", branch);
    let output = self
      .git_cmd()
      .args(["rev-list", "--count", &range])
      .output()
      .context("Failed to run git rev-list")?;

    if !output.status.success() {
      return Ok(None);
    }

    let count = String::from_utf8_lossy(&output.stdout)
      .trim()
      .parse::<u64>()
      .map_err(|e| DocsError::message(format!("Unexpected rev-list count output: {}", e)))?;

    Ok(Some(count))
  }

  /// Most recent tag reachable from HEAD matching a glob pattern
  pub fn latest_tag(&self, pattern: &str) -> DocsResult<Option<String>> {
    let output = self
      .git_cmd()
      .args(["describe", "--abbrev=0", "--tags", "--match", pattern])
      .output()
      .context("Failed to run git describe")?;

    if !output.status.success() {
      return Ok(None);
    }

    let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(if tag.is_empty() { None } else { Some(tag) })
  }

  /// All tags matching a glob pattern, in git's default order
  pub fn list_tags(&self, pattern: &str) -> DocsResult<Vec<String>> {
    let stdout = self.run(&["tag", "--list", pattern], "git tag --list")?;
    Ok(split_lines(&stdout))
  }

  /// All tags matching a glob pattern, version-sorted
  pub fn list_tags_version_sorted(&self, pattern: &str) -> DocsResult<Vec<String>> {
    let stdout = self.run(
      &["tag", "--list", "--sort=version:refname", pattern],
      "git tag --list --sort=version:refname",
    )?;
    Ok(split_lines(&stdout))
  }

  /// Run a git query and return stdout, failing on non-zero exit
  fn run(&self, args: &[&str], describe: &str) -> DocsResult<String> {
    let output = self
      .git_cmd()
      .args(args)
      .output()
      .with_context(|| format!("Failed to run {}", describe))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(DocsError::Git(GitError::CommandFailed {
        command: describe.to_string(),
        stderr: stderr.to_string(),
      }));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to the docs checkout
  /// - Clears environment variables, whitelisting only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false");

    cmd
  }
}

/// Split subprocess output into trimmed, non-empty lines
fn split_lines(stdout: &str) -> Vec<String> {
  stdout
    .lines()
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .collect()
}
