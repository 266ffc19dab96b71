//! Maps an Nmap document onto the report model.
//!
//! Filtered ports are skipped, and a host is only kept when at least one of its ports
//! survives. A missing address or `ports` element aborts the whole mapping.

use pathfinder_common::report::{Host, Port, Report};
use tracing::debug;

use super::document::{NmapHost, NmapPort, NmapRun};
use crate::cve;
use crate::error::ParseError;

const FILTERED: &str = "filtered";

/// Builds a report named `name` from every host in `run`.
///
/// The network map is left empty.
pub fn map_report(name: &str, run: NmapRun) -> Result<Report, ParseError> {
    let mut report = Report::new(name);

    for element in run.hosts {
        if let Some(host) = map_host(element)? {
            report.insert_host(host);
        }
    }

    Ok(report)
}

/// Returns `Ok(None)` when the host has no port worth reporting.
fn map_host(element: NmapHost) -> Result<Option<Host>, ParseError> {
    let ip = element.addr().ok_or(ParseError::MissingAddress)?;
    let mut host = Host::new(ip);
    host.hostname = element.hostname().map(str::to_string);

    let ports = element.ports.ok_or_else(|| ParseError::MissingPorts {
        ip: host.ip.clone(),
    })?;

    let mut cves: Vec<String> = Vec::new();
    for port_element in ports.ports {
        if let Some(port) = map_port(port_element, &mut cves) {
            host.insert_port(port);
        }
    }
    host.cves = cves;

    if !host.has_ports() {
        debug!("Dropping host {}: no unfiltered ports", host.ip);
        return Ok(None);
    }

    debug!(
        "Mapped host {} with {} ports and {} CVE references",
        host.ip,
        host.ports.len(),
        host.cves.len()
    );
    Ok(Some(host))
}

/// Returns `None` for filtered ports. CVEs found in script output are appended to
/// `host_cves`.
fn map_port(element: NmapPort, host_cves: &mut Vec<String>) -> Option<Port> {
    let mut port = Port::new(element.port_id);
    port.protocol = element.protocol.unwrap_or_default();

    if let Some(state) = element.state {
        if state.state.as_deref() == Some(FILTERED) {
            debug!("Skipping filtered port {}", port.number);
            return None;
        }
        port.state = state.state;
    }

    if let Some(service) = element.service {
        port.service = service.name;
        port.product = service.product;
        port.version = service.version;
    }

    // Each script with output replaces the port's CVEs, so the last one wins.
    for output in element.scripts.into_iter().filter_map(|script| script.output) {
        let found = cve::extract_cves(&output);
        host_cves.extend(found.iter().cloned());
        port.cves = found;
    }

    Some(port)
}
