//! Integration test entry point

mod helpers;
mod test_getlatest;
mod test_render;
