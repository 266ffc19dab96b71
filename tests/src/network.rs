#![cfg(test)]
use crate::utils::parse_fixture;

#[test]
fn surviving_hosts_point_at_each_other() {
    let report = parse_fixture("vulners_scan.xml").unwrap();

    assert_eq!(report.network_map.len(), 2);
    assert_eq!(report.network_map["10.10.0.2"], ["10.10.0.3"]);
    assert_eq!(report.network_map["10.10.0.3"], ["10.10.0.2"]);
}

#[test]
fn dropped_hosts_are_absent_from_network_map() {
    let report = parse_fixture("vulners_scan.xml").unwrap();

    assert!(!report.network_map.contains_key("10.10.0.4"));
    assert!(!report.network_map.contains_key("10.10.0.5"));
    assert!(
        report
            .network_map
            .values()
            .flatten()
            .all(|ip| ip != "10.10.0.4" && ip != "10.10.0.5")
    );
}

#[test]
fn no_host_points_at_itself() {
    let report = parse_fixture("vulners_scan.xml").unwrap();

    for (ip, peers) in &report.network_map {
        assert!(!peers.contains(ip), "{ip} points at itself");
    }
}
