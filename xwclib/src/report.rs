//! Report formatting.
//!
//! Formatting is pure presentation: records arrive fully computed and
//! are rendered either as fixed-width text rows or as a serializable
//! report structure for the JSON output mode.

use serde::{Deserialize, Serialize};

use crate::fields::Fields;
use crate::stats::SourceStats;

/// Minimum printed width of a count column.
pub const MIN_FIELD_WIDTH: usize = 4;

/// Format one report row.
///
/// Enabled fields are rendered right-aligned in the fixed order lines,
/// words, chars, bytes, max line width, separated by single spaces, and
/// followed by the display name when there is one. Disabled fields are
/// omitted entirely.
pub fn format_row(stats: &SourceStats, fields: &Fields, name: &str) -> String {
    let mut cells = Vec::new();
    if fields.lines {
        cells.push(format_count(stats.lines));
    }
    if fields.words {
        cells.push(format_count(stats.words));
    }
    if fields.chars {
        cells.push(format_count(stats.chars));
    }
    if fields.bytes {
        cells.push(format_count(stats.bytes));
    }
    if fields.max_line_width {
        cells.push(format_count(stats.max_line_width));
    }

    let mut row = cells.join(" ");
    if !name.is_empty() {
        row.push(' ');
        row.push_str(name);
    }
    row
}

fn format_count(value: u64) -> String {
    format!("{:>width$}", value, width = MIN_FIELD_WIDTH)
}

/// One named row of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Display name of the source (empty for standard input)
    pub name: String,
    /// Counts for this source
    pub stats: SourceStats,
}

/// A full report: per-source rows plus the optional total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// One entry per successfully counted source, in input order
    pub entries: Vec<ReportEntry>,
    /// Field-wise sum across entries, when a total was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<SourceStats>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one source's row.
    pub fn push(&mut self, name: impl Into<String>, stats: SourceStats) {
        self.entries.push(ReportEntry {
            name: name.into(),
            stats,
        });
    }

    /// Field-wise sum of every collected row.
    pub fn aggregate(&self) -> SourceStats {
        self.entries.iter().map(|e| &e.stats).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SourceStats {
        SourceStats {
            lines: 2,
            words: 3,
            chars: 16,
            bytes: 16,
            max_line_width: 11,
        }
    }

    #[test]
    fn test_default_row_shows_lines_words_bytes() {
        let row = format_row(&sample(), &Fields::standard(), "sample.txt");
        assert_eq!(row, "   2    3   16 sample.txt");
    }

    #[test]
    fn test_empty_name_has_no_trailing_space() {
        let row = format_row(&sample(), &Fields::standard(), "");
        assert_eq!(row, "   2    3   16");
    }

    #[test]
    fn test_all_fields_in_fixed_order() {
        let row = format_row(&sample(), &Fields::all(), "f");
        assert_eq!(row, "   2    3   16   16   11 f");
    }

    #[test]
    fn test_single_field_row() {
        let fields = Fields::none().with_max_line_width(true);
        let row = format_row(&sample(), &fields, "f");
        assert_eq!(row, "  11 f");
    }

    #[test]
    fn test_wide_counts_are_not_truncated() {
        let stats = SourceStats {
            lines: 123_456,
            ..SourceStats::default()
        };
        let fields = Fields::none().with_lines(true);
        assert_eq!(format_row(&stats, &fields, ""), "123456");
    }

    #[test]
    fn test_report_aggregate() {
        let mut report = Report::new();
        report.push("a", sample());
        report.push("b", sample());

        let total = report.aggregate();
        assert_eq!(total.lines, 4);
        assert_eq!(total.words, 6);
        assert_eq!(total.max_line_width, 22);
    }

    #[test]
    fn test_report_serializes_without_absent_total() {
        let mut report = Report::new();
        report.push("a", sample());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("total").is_none());
        assert_eq!(json["entries"][0]["name"], "a");
        assert_eq!(json["entries"][0]["stats"]["lines"], 2);
    }

    #[test]
    fn test_report_serializes_total_when_present() {
        let mut report = Report::new();
        report.push("a", sample());
        report.push("b", sample());
        report.total = Some(report.aggregate());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total"]["lines"], 4);
    }
}
