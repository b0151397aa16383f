//! CLI commands for set-versions
//!
//! - **getlatest**: print the newest active release codename and exit
//! - **render**: resolve the checkout version and render all artifacts

pub mod getlatest;
pub mod render;

pub use getlatest::run_getlatest;
pub use render::run_render;
