//! Output field selection.
//!
//! Which count columns a report shows is an explicit set of named
//! booleans. Columns always print in the fixed order lines, words,
//! chars, bytes, max line width; disabling a field removes its column
//! entirely rather than zero-filling it.

use serde::{Deserialize, Serialize};

/// The set of count columns enabled for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fields {
    /// Show the line count
    pub lines: bool,
    /// Show the word count
    pub words: bool,
    /// Show the character count
    pub chars: bool,
    /// Show the byte count
    pub bytes: bool,
    /// Show the longest-line width
    pub max_line_width: bool,
}

impl Default for Fields {
    fn default() -> Self {
        Self::standard()
    }
}

impl Fields {
    /// The classic default columns: lines, words, bytes.
    pub fn standard() -> Self {
        Self {
            lines: true,
            words: true,
            chars: false,
            bytes: true,
            max_line_width: false,
        }
    }

    /// Enable every column.
    pub fn all() -> Self {
        Self {
            lines: true,
            words: true,
            chars: true,
            bytes: true,
            max_line_width: true,
        }
    }

    /// Enable no columns.
    pub fn none() -> Self {
        Self {
            lines: false,
            words: false,
            chars: false,
            bytes: false,
            max_line_width: false,
        }
    }

    /// Builder: set line count inclusion
    pub fn with_lines(mut self, include: bool) -> Self {
        self.lines = include;
        self
    }

    /// Builder: set word count inclusion
    pub fn with_words(mut self, include: bool) -> Self {
        self.words = include;
        self
    }

    /// Builder: set character count inclusion
    pub fn with_chars(mut self, include: bool) -> Self {
        self.chars = include;
        self
    }

    /// Builder: set byte count inclusion
    pub fn with_bytes(mut self, include: bool) -> Self {
        self.bytes = include;
        self
    }

    /// Builder: set longest-line inclusion
    pub fn with_max_line_width(mut self, include: bool) -> Self {
        self.max_line_width = include;
        self
    }

    /// True when no column is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.lines || self.words || self.chars || self.bytes || self.max_line_width)
    }

    /// Resolve count flags into a field set.
    ///
    /// With no count flag set, the standard columns apply.
    pub fn from_flags(
        lines: bool,
        words: bool,
        chars: bool,
        bytes: bool,
        max_line_width: bool,
    ) -> Self {
        let picked = Self {
            lines,
            words,
            chars,
            bytes,
            max_line_width,
        };
        if picked.is_empty() {
            Self::standard()
        } else {
            picked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        let fields = Fields::default();
        assert!(fields.lines);
        assert!(fields.words);
        assert!(!fields.chars);
        assert!(fields.bytes);
        assert!(!fields.max_line_width);
    }

    #[test]
    fn test_all_and_none() {
        assert!(!Fields::all().is_empty());
        assert!(Fields::none().is_empty());
        let all = Fields::all();
        assert!(all.lines && all.words && all.chars && all.bytes && all.max_line_width);
    }

    #[test]
    fn test_builder() {
        let fields = Fields::none().with_lines(true).with_max_line_width(true);
        assert!(fields.lines);
        assert!(fields.max_line_width);
        assert!(!fields.words);
        assert!(!fields.chars);
        assert!(!fields.bytes);
    }

    #[test]
    fn test_from_flags_defaults_when_empty() {
        let fields = Fields::from_flags(false, false, false, false, false);
        assert_eq!(fields, Fields::standard());
    }

    #[test]
    fn test_from_flags_keeps_explicit_selection() {
        let fields = Fields::from_flags(false, false, true, false, false);
        assert!(fields.chars);
        assert!(!fields.lines);
        assert!(!fields.words);
        assert!(!fields.bytes);
        assert!(!fields.max_line_width);
    }
}
