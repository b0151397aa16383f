//! Error types for set-versions with contextual messages and exit codes
//!
//! Fatal conditions fall into two buckets: user errors (bad registry, unknown
//! series) and system errors (git, I/O). Every error that has a known
//! remediation carries a help message pointing the user at it.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for set-versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (registry problems, unknown series, invalid args)
  User = 1,
  /// System error (git, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for set-versions
#[derive(Debug)]
pub enum DocsError {
  /// Release registry errors
  Registry(RegistryError),

  /// Git operation errors
  Git(GitError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl DocsError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    DocsError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    DocsError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      DocsError::Message { message, context, help } => DocsError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      DocsError::Io(e) => DocsError::Message {
        message: ctx_str,
        context: Some(e.to_string()),
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      DocsError::Registry(_) => ExitCode::User,
      DocsError::Git(_) => ExitCode::System,
      DocsError::Io(_) => ExitCode::System,
      DocsError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      DocsError::Registry(e) => e.help_message(),
      DocsError::Git(e) => e.help_message(),
      DocsError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for DocsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DocsError::Registry(e) => write!(f, "{}", e),
      DocsError::Git(e) => write!(f, "{}", e),
      DocsError::Io(e) => write!(f, "I/O error: {}", e),
      DocsError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for DocsError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      DocsError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for DocsError {
  fn from(err: io::Error) -> Self {
    DocsError::Io(err)
  }
}

impl From<serde_json::Error> for DocsError {
  fn from(err: serde_json::Error) -> Self {
    DocsError::Registry(RegistryError::Invalid {
      reason: err.to_string(),
    })
  }
}

/// Release registry errors
#[derive(Debug)]
pub enum RegistryError {
  /// releases.json not found
  NotFound { path: PathBuf },

  /// releases.json did not parse as a release list
  Invalid { reason: String },

  /// No release has status "Active Development"
  NoActiveDevelopment,

  /// A release series version has no registry entry
  UnknownSeries { series_version: String },

  /// A codename has no entry in a static mapping table
  UnknownCodename { codename: String, table: String },
}

impl RegistryError {
  fn help_message(&self) -> Option<String> {
    match self {
      RegistryError::NotFound { .. } => {
        Some("Run set-versions from the documentation directory, or pass --docs-dir.".to_string())
      }
      RegistryError::NoActiveDevelopment => {
        Some("Mark exactly one release as \"Active Development\" in releases.json.".to_string())
      }
      RegistryError::UnknownSeries { .. } | RegistryError::UnknownCodename { .. } => {
        Some("Update releases.json and the static mapping tables for the new release series.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for RegistryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RegistryError::NotFound { path } => {
        write!(f, "Release registry not found at: {}", path.display())
      }
      RegistryError::Invalid { reason } => {
        write!(f, "Failed to parse release registry: {}", reason)
      }
      RegistryError::NoActiveDevelopment => {
        write!(f, "No release in the registry has status \"Active Development\"")
      }
      RegistryError::UnknownSeries { series_version } => {
        write!(f, "Release series {} has no registry entry", series_version)
      }
      RegistryError::UnknownCodename { codename, table } => {
        write!(f, "Codename '{}' has no entry in the {} mapping", codename, table)
      }
    }
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command failed
  CommandFailed { command: String, stderr: String },

  /// The documentation directory is not a git checkout
  NotARepository { path: PathBuf },

  /// A release tag expected locally is missing
  MissingReleaseTag { tag: String },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::NotARepository { .. } => Some(
        "Building the documentation must be done from its git repository.\n\
         Clone it with:\n\
         git clone https://git.yoctoproject.org/yocto-docs"
          .to_string(),
      ),
      GitError::MissingReleaseTag { .. } => {
        Some("Run 'git fetch --tags' before building the documentation.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
      GitError::NotARepository { path } => {
        write!(f, "Not a git repository: {}", path.display())
      }
      GitError::MissingReleaseTag { tag } => {
        write!(f, "Release tag '{}' is not available locally", tag)
      }
    }
  }
}

/// Result type alias for set-versions
pub type DocsResult<T> = Result<T, DocsError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> DocsResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> DocsResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<DocsError>,
{
  fn context(self, ctx: impl Into<String>) -> DocsResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> DocsResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &DocsError) {
  eprintln!("\nError: {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("Help: {}\n", help);
  }
}
