#![cfg(test)]
use std::path::PathBuf;

use pathfinder_common::report::Report;
use pathfinder_core::{NmapParser, ReportParser};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

pub fn parse_fixture(name: &str) -> Option<Report> {
    NmapParser::new().parse(&fixture(name))
}
