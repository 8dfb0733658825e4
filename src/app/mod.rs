// LineSift - app/mod.rs
//
// Application layer: orchestrates core logic and platform I/O.

pub mod demo;
pub mod processor;
