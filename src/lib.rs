// LineSift - lib.rs
//
// Library entry point. The binary in `main.rs` is a thin CLI over these
// modules; integration tests drive them directly.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

pub use crate::app::processor::{process, FileDataProcessor};
pub use crate::core::model::{RunResult, TextEncoding};
pub use crate::util::error::{Result, SiftError};
