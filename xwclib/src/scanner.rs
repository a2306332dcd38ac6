//! Single-pass stream scanner.
//!
//! The scanner consumes a UTF-8 character stream once and derives all
//! five counts simultaneously: lines, words, characters, bytes, and the
//! longest line. Word boundaries are whitespace as defined by
//! [`char::is_whitespace`]; line terminators are `\n` only, so a
//! carriage return counts as an ordinary line character.

use std::io::{self, BufReader, Read};

use utf8_chars::BufReadCharsExt;

use crate::stats::SourceStats;

/// Scans a character stream and accumulates counts.
///
/// The byte count is the UTF-8 length of the consumed data; callers
/// counting an on-disk file may override it with the file size.
pub struct Scanner<R: Read> {
    reader: BufReader<R>,
    stats: SourceStats,
    line_width: u64,
    in_word: bool,
}

impl<R: Read> Scanner<R> {
    /// Wrap a reader for scanning.
    ///
    /// Works for files, standard input, and in-memory byte slices in
    /// tests alike.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            stats: SourceStats::new(),
            line_width: 0,
            in_word: false,
        }
    }

    /// Consume the stream and return its counts.
    pub fn scan(mut self) -> io::Result<SourceStats> {
        while let Some(c) = self.reader.read_char()? {
            self.consume(c);
        }
        Ok(self.finish())
    }

    fn consume(&mut self, c: char) {
        self.stats.chars += 1;
        self.stats.bytes += c.len_utf8() as u64;

        if c == '\n' {
            self.stats.lines += 1;
            self.stats.max_line_width = self.stats.max_line_width.max(self.line_width);
            self.line_width = 0;
        } else {
            self.line_width += 1;
        }

        if c.is_whitespace() {
            self.in_word = false;
        } else if !self.in_word {
            self.stats.words += 1;
            self.in_word = true;
        }
    }

    fn finish(mut self) -> SourceStats {
        // An unterminated final line still competes for the longest line.
        self.stats.max_line_width = self.stats.max_line_width.max(self.line_width);
        self.stats
    }
}
