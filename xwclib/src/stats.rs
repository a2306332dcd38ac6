//! Core data structures for count statistics

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Counts derived from a single pass over one source.
///
/// A record is computed once per source and never modified afterwards;
/// totals are built by summing records, not by mutating them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStats {
    /// Line terminators (`\n`) encountered
    pub lines: u64,
    /// Maximal runs of non-whitespace characters
    pub words: u64,
    /// Characters read, terminators included
    pub chars: u64,
    /// Byte length of the encoded source
    pub bytes: u64,
    /// Longest line, in non-terminator characters
    pub max_line_width: u64,
}

impl SourceStats {
    /// Create a new record with all counts at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Add for SourceStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            lines: self.lines + other.lines,
            words: self.words + other.words,
            chars: self.chars + other.chars,
            bytes: self.bytes + other.bytes,
            // Totals sum every column uniformly, this one included.
            max_line_width: self.max_line_width + other.max_line_width,
        }
    }
}

impl AddAssign for SourceStats {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for SourceStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, s| acc + s)
    }
}

impl<'a> Sum<&'a SourceStats> for SourceStats {
    fn sum<I: Iterator<Item = &'a SourceStats>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let stats = SourceStats::new();
        assert_eq!(stats.lines, 0);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.chars, 0);
        assert_eq!(stats.bytes, 0);
        assert_eq!(stats.max_line_width, 0);
    }

    #[test]
    fn test_add() {
        let a = SourceStats {
            lines: 2,
            words: 3,
            chars: 16,
            bytes: 16,
            max_line_width: 11,
        };
        let b = SourceStats {
            lines: 1,
            words: 1,
            chars: 4,
            bytes: 4,
            max_line_width: 3,
        };
        let sum = a + b;
        assert_eq!(sum.lines, 3);
        assert_eq!(sum.words, 4);
        assert_eq!(sum.chars, 20);
        assert_eq!(sum.bytes, 20);
        assert_eq!(sum.max_line_width, 14);
    }

    #[test]
    fn test_add_assign() {
        let mut total = SourceStats::new();
        total += SourceStats {
            lines: 1,
            words: 2,
            chars: 8,
            bytes: 8,
            max_line_width: 7,
        };
        total += SourceStats {
            lines: 4,
            words: 4,
            chars: 20,
            bytes: 22,
            max_line_width: 9,
        };
        assert_eq!(total.lines, 5);
        assert_eq!(total.words, 6);
        assert_eq!(total.chars, 28);
        assert_eq!(total.bytes, 30);
        assert_eq!(total.max_line_width, 16);
    }

    #[test]
    fn test_sum_over_iterator() {
        let records = vec![
            SourceStats {
                lines: 1,
                ..SourceStats::default()
            },
            SourceStats {
                lines: 2,
                ..SourceStats::default()
            },
            SourceStats {
                lines: 3,
                ..SourceStats::default()
            },
        ];
        let total: SourceStats = records.iter().sum();
        assert_eq!(total.lines, 6);
    }

    #[test]
    fn test_aggregation_is_commutative() {
        let a = SourceStats {
            lines: 2,
            words: 3,
            chars: 16,
            bytes: 16,
            max_line_width: 11,
        };
        let b = SourceStats {
            lines: 7,
            words: 9,
            chars: 40,
            bytes: 44,
            max_line_width: 25,
        };
        assert_eq!(a + b, b + a);
    }
}
