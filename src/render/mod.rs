//! Template rendering for the documentation build
//!
//! All renderers are pure string transformations; the command layer owns
//! the file I/O and git queries feeding them.
//!
//! - **replacements**: placeholder table derived from the version context
//! - **yaml**: line-wise key substitution for the poky.yaml template
//! - **switchers**: sentinel-line expansion for the version switcher JS
//! - **releases_rst**: generated index of available release manuals

pub mod releases_rst;
pub mod replacements;
pub mod switchers;
pub mod yaml;
