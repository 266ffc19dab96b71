//! # Nmap XML Support
//!
//! Reads the XML report produced by `nmap -oX` into a [`Report`].
//!
//! Parsing happens in three steps: the file is deserialized into the typed
//! [`document`] model, the [`mapper`] turns that into hosts and ports, and finally the
//! [`network_map`](crate::network_map) is derived from the surviving hosts.

pub mod document;
pub mod mapper;

use std::fs;
use std::path::Path;

use pathfinder_common::report::Report;
use tracing::{debug, error};

use crate::error::ParseError;
use crate::network_map;
use crate::parser::ReportParser;

const FORMAT: &str = "nmap";

/// Parser for Nmap XML reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct NmapParser;

impl NmapParser {
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses the report at `path`, surfacing the first error encountered.
    ///
    /// The report is named after the file stem.
    pub fn try_parse(&self, path: &Path) -> Result<Report, ParseError> {
        let xml = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| FORMAT.to_string());

        self.build(&name, &xml)
    }

    /// Parses an in-memory Nmap XML document into a report named `nmap`.
    pub fn parse_str(&self, xml: &str) -> Result<Report, ParseError> {
        self.build(FORMAT, xml)
    }

    fn build(&self, name: &str, xml: &str) -> Result<Report, ParseError> {
        let run = document::from_str(xml)?;
        debug!("Loaded {} host elements", run.hosts.len());

        let mut report = mapper::map_report(name, run)?;
        network_map::generate(&mut report);

        debug!(
            "Report {} holds {} hosts and {} network map entries",
            report.name,
            report.len(),
            report.network_map.len()
        );
        Ok(report)
    }
}

impl ReportParser for NmapParser {
    fn format(&self) -> &'static str {
        FORMAT
    }

    fn parse(&self, report: &Path) -> Option<Report> {
        match self.try_parse(report) {
            Ok(report) => Some(report),
            Err(e) => {
                error!("exception when parsing nmap results xml: {e:?}");
                None
            }
        }
    }
}
