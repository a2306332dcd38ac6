//! # xwclib
//!
//! Line, word, character, byte and longest-line counting for text
//! streams, in the spirit of POSIX `wc`.
//!
//! ## Overview
//!
//! The library derives five metrics from one pass over each input:
//!
//! - **Lines**: `\n` terminators encountered
//! - **Words**: maximal runs of non-whitespace characters
//! - **Chars**: characters read, terminators included
//! - **Bytes**: encoded length (on-disk size for files)
//! - **Longest line**: maximum non-terminator characters in any line
//!
//! Per-source records sum field-wise into totals, and the report layer
//! renders them as fixed-width columns or a serializable structure.
//! Sources are processed strictly sequentially; a source that cannot be
//! opened or read yields an error instead of a record and leaves the
//! totals untouched.
//!
//! ## Example
//!
//! ```rust
//! use xwclib::{count_file, format_row, Fields};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("greeting.txt");
//! fs::write(&path, "hello world\nfoo\n").unwrap();
//!
//! let stats = count_file(&path).unwrap();
//! assert_eq!(stats.lines, 2);
//! assert_eq!(stats.words, 3);
//! assert_eq!(stats.max_line_width, 11);
//!
//! let row = format_row(&stats, &Fields::standard(), "greeting.txt");
//! assert_eq!(row, "   2    3   16 greeting.txt");
//! ```

pub mod counter;
pub mod error;
pub mod fields;
pub mod report;
pub mod scanner;
pub mod source;
pub mod stats;

pub use counter::{count_file, count_reader, count_source};
pub use error::WcError;
pub use fields::Fields;
pub use report::{format_row, Report, ReportEntry, MIN_FIELD_WIDTH};
pub use scanner::Scanner;
pub use source::Source;
pub use stats::SourceStats;

/// Result type for xwclib operations
pub type Result<T> = std::result::Result<T, WcError>;
