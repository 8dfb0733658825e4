// LineSift - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform, app, or perform any I/O directly.

pub mod filter;
pub mod model;
