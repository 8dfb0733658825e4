// LineSift - app/processor.rs
//
// Filter driver. Reads the input lazily, keeps the lines containing the
// keyword in memory in source order, then writes them to the output in one
// pass. The whole call is wrapped in a timer.
//
// Error policy: any I/O failure aborts the call and is returned unchanged.
// The input is fully read and closed before the output is opened, so a
// missing or unreadable input never creates or truncates the output.

use crate::core::filter::{self, KeywordFilter};
use crate::core::model::{RunResult, TextEncoding};
use crate::platform::fs;
use crate::util::error::Result;
use crate::util::timing;
use std::path::Path;

/// Runs keyword filtering between two files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDataProcessor {
    encoding: TextEncoding,
}

impl FileDataProcessor {
    pub fn new(encoding: TextEncoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Filter `input` into `output`, returning the number of matched lines.
    pub fn process(&self, input: &Path, output: &Path, keyword: &str) -> Result<usize> {
        self.process_timed(input, output, keyword)
            .map(|r| r.matched_line_count)
    }

    /// As [`process`](Self::process), also returning the elapsed time.
    pub fn process_timed(&self, input: &Path, output: &Path, keyword: &str) -> Result<RunResult> {
        let (result, elapsed) = timing::timed("process", || self.run(input, output, keyword));
        let matched_line_count = result?;
        Ok(RunResult {
            matched_line_count,
            elapsed,
        })
    }

    fn run(&self, input: &Path, output: &Path, keyword: &str) -> Result<usize> {
        let filter = KeywordFilter::new(keyword);

        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            keyword,
            encoding = %self.encoding,
            "Filtering"
        );

        let matched = filter::collect_matches(fs::read_lines(input, self.encoding)?, &filter)?;
        fs::write_lines(output, &matched)?;

        tracing::info!(
            keyword = filter.keyword(),
            matched = matched.len(),
            output = %output.display(),
            "Wrote {} line(s) containing '{}' to '{}'",
            matched.len(),
            filter.keyword(),
            output.display()
        );

        Ok(matched.len())
    }
}

/// Filter `input` into `output` with strict UTF-8 decoding.
pub fn process(input: &Path, output: &Path, keyword: &str) -> Result<usize> {
    FileDataProcessor::default().process(input, output, keyword)
}
