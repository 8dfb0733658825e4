// LineSift - app/demo.rs
//
// Self-contained demonstration: generate a large synthetic input, filter it,
// then delete both files.

use crate::app::processor::FileDataProcessor;
use crate::core::model::RunResult;
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::Result;
use std::io;
use std::path::Path;

/// Shape of the generated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    /// Total number of generated lines.
    pub lines: usize,
    /// Every Nth line (starting at line 0) carries the keyword.
    pub every: usize,
    pub keyword: String,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            lines: constants::DEFAULT_DEMO_LINES,
            every: constants::DEFAULT_DEMO_EVERY,
            keyword: constants::DEFAULT_DEMO_KEYWORD.to_string(),
        }
    }
}

impl From<&AppConfig> for DemoSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            lines: config.demo_lines,
            every: config.demo_every,
            keyword: config.demo_keyword.clone(),
        }
    }
}

impl DemoSettings {
    /// Number of generated lines that embed the keyword.
    pub fn keyword_lines(&self) -> usize {
        if self.every == 0 {
            return 0;
        }
        self.lines.div_ceil(self.every)
    }
}

/// Text of generated line `i`.
fn demo_line(i: usize, settings: &DemoSettings) -> String {
    if settings.every != 0 && i % settings.every == 0 {
        format!("This is a line with a special {}. ID: {i}", settings.keyword)
    } else {
        format!("This is a normal line. ID: {i}")
    }
}

/// Write the synthetic input to `path`. Returns the number of lines written.
pub fn generate_input(path: &Path, settings: &DemoSettings) -> Result<usize> {
    let written = fs::write_lines(path, (0..settings.lines).map(|i| demo_line(i, settings)))?;
    tracing::info!(
        path = %path.display(),
        lines = written,
        "Generated demo input"
    );
    Ok(written)
}

/// Generate the input in `dir`, filter it, then remove both files.
///
/// Cleanup runs whether or not the filter succeeded.
pub fn run_demo(dir: &Path, settings: &DemoSettings, processor: FileDataProcessor) -> Result<RunResult> {
    let input = dir.join(constants::DEMO_INPUT_FILE_NAME);
    let output = dir.join(constants::DEMO_OUTPUT_FILE_NAME);

    let result = generate_input(&input, settings)
        .and_then(|_| processor.process_timed(&input, &output, &settings.keyword));

    remove_if_exists(&input);
    remove_if_exists(&output);

    result
}

fn remove_if_exists(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "Removed demo file"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(
            path = %path.display(),
            error = %e,
            "Failed to remove demo file"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_line_shapes() {
        let settings = DemoSettings::default();
        assert_eq!(
            demo_line(0, &settings),
            "This is a line with a special keyword. ID: 0"
        );
        assert_eq!(demo_line(1, &settings), "This is a normal line. ID: 1");
        assert_eq!(
            demo_line(2000, &settings),
            "This is a line with a special keyword. ID: 2000"
        );
    }

    #[test]
    fn test_keyword_lines() {
        assert_eq!(DemoSettings::default().keyword_lines(), 100);
        let settings = DemoSettings {
            lines: 25,
            every: 10,
            keyword: "k".to_string(),
        };
        assert_eq!(settings.keyword_lines(), 3);
    }

    #[test]
    fn test_generate_input_line_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gen.txt");
        let settings = DemoSettings {
            lines: 50,
            every: 7,
            keyword: "keyword".to_string(),
        };
        assert_eq!(generate_input(&path, &settings).unwrap(), 50);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 50);
        assert_eq!(content.matches("keyword").count(), 8);
    }

    #[test]
    fn test_run_demo_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_demo(dir.path(), &DemoSettings::default(), FileDataProcessor::default())
            .unwrap();
        assert_eq!(result.matched_line_count, 100);
        assert!(!dir.path().join(constants::DEMO_INPUT_FILE_NAME).exists());
        assert!(!dir.path().join(constants::DEMO_OUTPUT_FILE_NAME).exists());
    }

    #[test]
    fn test_run_demo_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let err = run_demo(&missing, &DemoSettings::default(), FileDataProcessor::default())
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    }
}
