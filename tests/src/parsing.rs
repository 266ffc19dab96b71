#![cfg(test)]
use std::collections::BTreeSet;

use crate::utils::parse_fixture;

fn cve_set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// One host, one open port with a service block and no scripts.
#[test]
fn single_host_round_trip() {
    let report = parse_fixture("single_host.xml").expect("fixture should parse");

    assert_eq!(report.name, "single_host");
    assert_eq!(report.len(), 1);

    let host = report.host("10.10.0.5").unwrap();
    assert_eq!(host.hostname.as_deref(), Some("bastion.corp.local"));
    assert_eq!(host.ports.len(), 1);
    assert!(host.cves.is_empty());

    let ssh = host.port("22").unwrap();
    assert_eq!(ssh.protocol, "tcp");
    assert_eq!(ssh.state.as_deref(), Some("open"));
    assert_eq!(ssh.service.as_deref(), Some("ssh"));
    assert_eq!(ssh.product.as_deref(), Some("OpenSSH"));
    assert_eq!(ssh.version.as_deref(), Some("9.6p1"));
    assert!(ssh.cves.is_empty());

    assert!(report.network_map.get("10.10.0.5").is_none());
    assert!(report.network_map.is_empty());
}

#[test]
fn filtered_ports_never_stored() {
    let report = parse_fixture("vulners_scan.xml").unwrap();

    let web = report.host("10.10.0.2").unwrap();
    assert!(web.port("443").is_none());
    let ports: Vec<&String> = web.ports.keys().collect();
    assert_eq!(ports, ["22", "80"]);
}

#[test]
fn hosts_without_reportable_ports_dropped() {
    let report = parse_fixture("vulners_scan.xml").unwrap();

    // 10.10.0.4 only has filtered ports, 10.10.0.5 has none at all.
    assert!(report.host("10.10.0.4").is_none());
    assert!(report.host("10.10.0.5").is_none());

    let ips: Vec<&String> = report.hosts.keys().collect();
    assert_eq!(ips, ["10.10.0.2", "10.10.0.3"]);
}

#[test]
fn closed_ports_are_kept() {
    let report = parse_fixture("vulners_scan.xml").unwrap();

    let rdp = report.host("10.10.0.3").unwrap().port("3389").unwrap();
    assert_eq!(rdp.state.as_deref(), Some("closed"));
    assert!(!rdp.is_open());
}

#[test]
fn vulners_output_is_deduplicated() {
    let report = parse_fixture("vulners_scan.xml").unwrap();
    let web = report.host("10.10.0.2").unwrap();

    assert_eq!(
        web.port("22").unwrap().cves,
        cve_set(&["CVE-2020-15778", "CVE-2021-28041"])
    );
    assert_eq!(
        web.port("80").unwrap().cves,
        cve_set(&["CVE-2021-41773", "CVE-2021-42013"])
    );
    assert_eq!(
        web.cves,
        [
            "CVE-2020-15778",
            "CVE-2021-28041",
            "CVE-2021-41773",
            "CVE-2021-42013"
        ]
    );
}

#[test]
fn later_script_replaces_port_cves() {
    let report = parse_fixture("vulners_scan.xml").unwrap();
    let smb_host = report.host("10.10.0.3").unwrap();

    assert_eq!(smb_host.port("445").unwrap().cves, cve_set(&["CVE-2020-0796"]));
    assert_eq!(smb_host.cves, ["CVE-2017-0143", "CVE-2020-0796"]);
}

#[test]
fn empty_hostnames_leave_hostname_unset() {
    let report = parse_fixture("vulners_scan.xml").unwrap();

    assert_eq!(
        report.host("10.10.0.2").unwrap().hostname.as_deref(),
        Some("web01.corp.local")
    );
    assert!(report.host("10.10.0.3").unwrap().hostname.is_none());
}

#[test]
fn service_without_product_or_version() {
    let report = parse_fixture("vulners_scan.xml").unwrap();
    let smb = report.host("10.10.0.3").unwrap().port("445").unwrap();

    assert_eq!(smb.service.as_deref(), Some("microsoft-ds"));
    assert!(smb.product.is_none());
    assert!(smb.version.is_none());
}
