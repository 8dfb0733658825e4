// LineSift - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LineSift";

/// Application identifier used for config directories.
pub const APP_ID: &str = "LineSift";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// I/O
// =============================================================================

/// Capacity of the buffered reader wrapping the input file.
pub const READ_BUFFER_SIZE: usize = 64 * 1024; // 64 KB

/// Capacity of the buffered writer wrapping the output file.
pub const WRITE_BUFFER_SIZE: usize = 64 * 1024; // 64 KB

/// Terminator appended to every line written by the sink.
pub const LINE_TERMINATOR: &str = "\n";

// =============================================================================
// Demo workload
// =============================================================================

/// Number of lines in the generated demo input.
pub const DEFAULT_DEMO_LINES: usize = 100_000;

/// Every Nth generated line carries the keyword.
pub const DEFAULT_DEMO_EVERY: usize = 1_000;

/// Keyword embedded in (and searched for in) the demo input.
pub const DEFAULT_DEMO_KEYWORD: &str = "keyword";

/// Hard upper bound on generated demo lines (prevents configuration mistakes).
pub const ABSOLUTE_MAX_DEMO_LINES: usize = 10_000_000;

/// File name of the generated demo input inside the demo directory.
pub const DEMO_INPUT_FILE_NAME: &str = "large_input.txt";

/// File name of the demo output inside the demo directory.
pub const DEMO_OUTPUT_FILE_NAME: &str = "output.txt";

// =============================================================================
// Logging / configuration
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
