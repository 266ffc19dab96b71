use std::path::Path;

use pathfinder_common::report::Report;

/// Converts a scanner's report file into a normalized [`Report`].
pub trait ReportParser {
    /// Short name of the input format handled by this parser (e.g. `"nmap"`).
    fn format(&self) -> &'static str;

    /// Parses the report at `report`.
    ///
    /// This is an all-or-nothing operation: any failure is logged and `None` is returned,
    /// a partially populated report is never handed out.
    fn parse(&self, report: &Path) -> Option<Report>;
}
