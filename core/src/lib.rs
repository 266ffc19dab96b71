//! # Pathfinder Core
//!
//! Turns scanner output into a normalized [`Report`](pathfinder_common::report::Report).
//!
//! * **[`parser`]**: The [`ReportParser`] seam every input format implements.
//! * **[`nmap`]**: Nmap XML support, the document model and the XML-to-report mapper.
//! * **[`cve`]**: CVE identifier extraction from free-form script output.
//! * **[`network_map`]**: Derives which hosts can see each other.

pub mod cve;
pub mod error;
pub mod network_map;
pub mod nmap;
pub mod parser;

pub use error::ParseError;
pub use nmap::NmapParser;
pub use parser::ReportParser;
