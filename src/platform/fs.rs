// LineSift - platform/fs.rs
//
// Filesystem access for the filter pipeline: a scoped file handle, the lazy
// line reader (source) and the truncating line writer (sink).
//
// Every handle is owned by a `ManagedFile`, which announces open and close
// and releases the descriptor on drop, so release happens on normal
// completion, early termination, and error alike.

use crate::core::model::{Line, TextEncoding};
use crate::util::constants;
use crate::util::error::{Result, SiftError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

// =============================================================================
// Scoped file handle
// =============================================================================

/// A file handle that logs its acquisition and release.
#[derive(Debug)]
pub struct ManagedFile<F> {
    path: PathBuf,
    inner: F,
}

impl<F> ManagedFile<F> {
    /// Acquire a handle via `open`, logging the open notice only on success.
    fn acquire(
        path: &Path,
        operation: &'static str,
        open: impl FnOnce(&Path) -> io::Result<F>,
    ) -> Result<Self> {
        let inner = open(path).map_err(|e| SiftError::io(path, operation, e))?;
        tracing::info!(path = %path.display(), operation, "Opened file");
        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<F> Deref for ManagedFile<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.inner
    }
}

impl<F> DerefMut for ManagedFile<F> {
    fn deref_mut(&mut self) -> &mut F {
        &mut self.inner
    }
}

impl<F> Drop for ManagedFile<F> {
    fn drop(&mut self) {
        // The descriptor itself is closed when `inner` drops right after this.
        tracing::info!(path = %self.path.display(), "Closing file");
    }
}

// =============================================================================
// Line source
// =============================================================================

/// Lazy, finite sequence of lines read from a file.
///
/// Lines end at `\n`, `\r\n`, or a lone `\r`. Trailing whitespace is
/// stripped from each line. After the first error the iterator is exhausted.
/// Dropping it early closes the file.
#[derive(Debug)]
pub struct LineSource {
    reader: ManagedFile<BufReader<File>>,
    encoding: TextEncoding,
    buf: Vec<u8>,
    line_number: u64,
    /// The previous line ended in `\r`; a leading `\n` belongs to it.
    skip_lf: bool,
    done: bool,
}

impl LineSource {
    /// Open `path` for reading. Fails immediately if the file cannot be opened.
    pub fn open(path: &Path, encoding: TextEncoding) -> Result<Self> {
        let reader = ManagedFile::acquire(path, "open", |p| {
            File::open(p).map(|f| BufReader::with_capacity(constants::READ_BUFFER_SIZE, f))
        })?;
        Ok(Self {
            reader,
            encoding,
            buf: Vec::new(),
            line_number: 0,
            skip_lf: false,
            done: false,
        })
    }

    /// Number of lines yielded so far.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Append the next raw line, terminator included, to `buf`.
    ///
    /// Returns the number of bytes appended; 0 means end of input.
    fn read_raw_line(&mut self) -> io::Result<usize> {
        loop {
            let (consumed, complete) = {
                let available = match self.reader.fill_buf() {
                    Ok(available) => available,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if available.is_empty() {
                    return Ok(self.buf.len());
                }

                let mut start = 0;
                if self.skip_lf {
                    self.skip_lf = false;
                    if available[0] == b'\n' {
                        start = 1;
                    }
                }

                match available[start..]
                    .iter()
                    .position(|&b| b == b'\n' || b == b'\r')
                {
                    Some(offset) => {
                        let end = start + offset;
                        self.buf.extend_from_slice(&available[start..=end]);
                        self.skip_lf = available[end] == b'\r';
                        (end + 1, true)
                    }
                    None => {
                        self.buf.extend_from_slice(&available[start..]);
                        (available.len(), false)
                    }
                }
            };
            self.reader.consume(consumed);
            if complete {
                return Ok(self.buf.len());
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<Line>> {
        self.buf.clear();
        let n = self
            .read_raw_line()
            .map_err(|e| SiftError::io(self.reader.path(), "read", e))?;
        if n == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let mut line = match self.encoding {
            TextEncoding::Utf8 => String::from_utf8(std::mem::take(&mut self.buf)).map_err(|e| {
                tracing::debug!(
                    path = %self.reader.path().display(),
                    line = self.line_number,
                    "Invalid UTF-8 in input"
                );
                SiftError::io(
                    self.reader.path(),
                    "decode",
                    io::Error::new(io::ErrorKind::InvalidData, e),
                )
            })?,
            TextEncoding::Utf8Lossy => String::from_utf8_lossy(&self.buf).into_owned(),
        };
        line.truncate(line.trim_end().len());
        Ok(Some(line))
    }
}

impl Iterator for LineSource {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for LineSource {}

/// Open `path` and return its lines lazily. Each call reopens the file.
pub fn read_lines(path: &Path, encoding: TextEncoding) -> Result<LineSource> {
    LineSource::open(path, encoding)
}

// =============================================================================
// Line sink
// =============================================================================

/// Truncate-or-create `path` and write each line followed by `\n`, in order.
///
/// Output is UTF-8. The buffer is flushed and the file synced to disk before
/// the handle is released; a failure at either step is reported. Lines
/// written before a failure stay on disk. Returns the number of lines written.
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = ManagedFile::acquire(path, "create", |p| {
        File::create(p).map(|f| BufWriter::with_capacity(constants::WRITE_BUFFER_SIZE, f))
    })?;

    let mut count = 0;
    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .and_then(|()| writer.write_all(constants::LINE_TERMINATOR.as_bytes()))
            .map_err(|e| SiftError::io(path, "write", e))?;
        count += 1;
    }

    writer
        .flush()
        .map_err(|e| SiftError::io(path, "flush", e))?;
    // Dropping a `File` discards close errors; surface deferred write-back
    // failures here instead.
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SiftError::io(path, "close", e))?;

    Ok(count)
}
