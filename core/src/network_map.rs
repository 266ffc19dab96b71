//! # Network Map
//!
//! Records, for each host, which other hosts point at it. A host points at every other
//! host in the report as soon as it exposes at least one port, whether or not the target
//! exposes any itself.

use indexmap::IndexMap;
use pathfinder_common::report::{Host, NetworkMap, Report};

/// Builds the network map for `hosts`.
///
/// Only hosts with at least one incoming edge get an entry, so a report with fewer than
/// two hosts yields an empty map.
pub fn build(hosts: &IndexMap<String, Host>) -> NetworkMap {
    let mut network_map = NetworkMap::new();

    for (ip, host) in hosts {
        if !host.has_ports() {
            continue;
        }
        for peer in hosts.keys().filter(|peer| *peer != ip) {
            network_map.entry(peer.clone()).or_default().push(ip.clone());
        }
    }

    network_map
}

/// Replaces the report's network map with one derived from its current hosts.
pub fn generate(report: &mut Report) {
    report.network_map = build(&report.hosts);
}
