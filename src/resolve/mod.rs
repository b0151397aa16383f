//! Version resolution for the documentation build
//!
//! - **mappings**: static per-release mapping tables (bitbake, poky)
//! - **version**: resolve the version/series/bitbake triple from the checkout

pub mod mappings;
pub mod version;
