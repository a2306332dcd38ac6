//! Counting entry points.
//!
//! These functions tie the scanner to concrete sources. Each source is
//! opened, scanned to completion, and released before the next one; a
//! source that cannot be opened or read yields `SourceUnavailable` and
//! no record.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::WcError;
use crate::scanner::Scanner;
use crate::source::Source;
use crate::stats::SourceStats;
use crate::Result;

/// Count a file on disk.
///
/// The byte column reports the file's on-disk size; the remaining
/// metrics come from a single scan of the decoded contents.
///
/// # Example
///
/// ```rust,ignore
/// use xwclib::count_file;
///
/// let stats = count_file("notes.txt")?;
/// println!("{} lines, {} words", stats.lines, stats.words);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<SourceStats> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| unavailable(path, e))?;
    let metadata = file.metadata().map_err(|e| unavailable(path, e))?;

    let mut stats = Scanner::from_reader(file)
        .scan()
        .map_err(|e| unavailable(path, e))?;
    stats.bytes = metadata.len();
    Ok(stats)
}

/// Count any reader.
///
/// The byte column is the UTF-8 length of the consumed data. This is
/// the path standard input takes.
pub fn count_reader<R: Read>(reader: R) -> Result<SourceStats> {
    Ok(Scanner::from_reader(reader).scan()?)
}

/// Count one source, dispatching on its kind.
pub fn count_source(source: &Source) -> Result<SourceStats> {
    match source {
        Source::File(path) => count_file(path),
        Source::Stdin => {
            let stdin = io::stdin();
            Scanner::from_reader(stdin.lock())
                .scan()
                .map_err(|e| unavailable(Path::new(""), e))
        }
    }
}

fn unavailable(path: &Path, source: io::Error) -> WcError {
    WcError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    }
}
