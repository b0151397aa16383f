//! Core building blocks for set-versions
//!
//! - **error**: error types with contextual help messages and exit codes
//! - **registry**: release registry (releases.json) parsing and lookup
//! - **vcs**: git operations abstraction (SystemGit)

pub mod error;
pub mod registry;
pub mod vcs;
