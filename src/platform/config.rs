// LineSift - platform/config.rs
//
// Platform config directory resolution and config.toml loading with
// startup validation. Invalid values produce actionable warnings and fall
// back to defaults.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::TextEncoding;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolve the platform config directory.
///
/// Falls back to the current directory if platform dirs cannot be determined.
pub fn config_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
        let dir = proj_dirs.config_dir().to_path_buf();
        tracing::debug!(config = %dir.display(), "Platform config directory resolved");
        dir
    } else {
        tracing::warn!("Could not determine platform directories, using current directory");
        PathBuf::from(".")
    }
}

// =============================================================================
// config.toml shape
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[input]` section.
    pub input: InputSection,
    /// `[demo]` section.
    pub demo: DemoSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[input]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// "utf-8" or "utf-8-lossy".
    pub encoding: Option<String>,
}

/// `[demo]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DemoSection {
    pub lines: Option<usize>,
    pub every: Option<usize>,
    pub keyword: Option<String>,
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Input decoding.
    pub encoding: TextEncoding,
    /// Generated demo line count.
    pub demo_lines: usize,
    /// Every Nth demo line carries the keyword.
    pub demo_every: usize,
    /// Demo keyword.
    pub demo_keyword: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            encoding: TextEncoding::default(),
            demo_lines: constants::DEFAULT_DEMO_LINES,
            demo_every: constants::DEFAULT_DEMO_EVERY,
            demo_keyword: constants::DEFAULT_DEMO_KEYWORD.to_string(),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Load `config.toml` from the platform config directory.
///
/// A missing file yields defaults with no warnings (first run). A file that
/// cannot be read or parsed yields defaults with a warning; the run still
/// proceeds.
pub fn load_default_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match load_config_file(&config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            (AppConfig::default(), vec![msg])
        }
    }
}

/// Load a config file the user asked for explicitly. Read and parse
/// failures are errors; out-of-range values are still warnings.
pub fn load_config_file(path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let (config, warnings) = parse_config(&content, path)?;
    tracing::info!(path = %path.display(), "Loaded config.toml");
    Ok((config, warnings))
}

/// Parse and validate config text, accumulating all warnings.
pub fn parse_config(content: &str, path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Input: encoding --
    if let Some(ref label) = raw.input.encoding {
        match TextEncoding::from_label(label) {
            Some(encoding) => config.encoding = encoding,
            None => warnings.push(format!(
                "[input] encoding = \"{label}\" is not recognised. \
                 Expected \"utf-8\" or \"utf-8-lossy\". Using default (utf-8).",
            )),
        }
    }

    // -- Demo: lines --
    if let Some(lines) = raw.demo.lines {
        if (1..=constants::ABSOLUTE_MAX_DEMO_LINES).contains(&lines) {
            config.demo_lines = lines;
        } else {
            warnings.push(format!(
                "[demo] lines = {lines} is out of range (1-{}). Using default ({}).",
                constants::ABSOLUTE_MAX_DEMO_LINES,
                constants::DEFAULT_DEMO_LINES,
            ));
        }
    }

    // -- Demo: every --
    if let Some(every) = raw.demo.every {
        if every >= 1 {
            config.demo_every = every;
        } else {
            warnings.push(format!(
                "[demo] every = {every} must be at least 1. Using default ({}).",
                constants::DEFAULT_DEMO_EVERY,
            ));
        }
    }

    // -- Demo: keyword --
    if let Some(keyword) = raw.demo.keyword {
        config.demo_keyword = keyword;
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    Ok((config, warnings))
}
