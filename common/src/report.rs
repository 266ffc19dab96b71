//! # Scan Report Model
//!
//! The normalized, format independent view of a vulnerability scan.
//!
//! A [`Report`] owns every [`Host`] keyed by its IP address, and every host owns its
//! [`Port`]s keyed by port number. The report is populated once by a parser and is
//! read-only afterwards.

pub mod host;
pub mod port;

pub use host::Host;
pub use port::Port;

use indexmap::IndexMap;
use serde::Serialize;

/// Maps a host IP to the IPs of the other hosts that point at it.
pub type NetworkMap = IndexMap<String, Vec<String>>;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub name: String,
    /// Hosts keyed by IP address, in the order they were first seen.
    pub hosts: IndexMap<String, Host>,
    pub network_map: NetworkMap,
}

/// Borrowed projection of a [`Report`] used when the report is dumped.
#[derive(Debug, Serialize)]
pub struct ReportDisplay<'a> {
    pub name: &'a str,
    pub hosts: &'a IndexMap<String, Host>,
    pub network_map: &'a NetworkMap,
}

impl Report {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hosts: IndexMap::new(),
            network_map: NetworkMap::new(),
        }
    }

    /// Inserts a host keyed by its IP.
    ///
    /// A host with an already known IP replaces the previous one in place.
    pub fn insert_host(&mut self, host: Host) {
        self.hosts.insert(host.ip.clone(), host);
    }

    pub fn host(&self, ip: &str) -> Option<&Host> {
        self.hosts.get(ip)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Every CVE identifier referenced by any host, in host order.
    pub fn cves(&self) -> impl Iterator<Item = &str> {
        self.hosts
            .values()
            .flat_map(|host| host.cves.iter().map(String::as_str))
    }

    pub fn display(&self) -> ReportDisplay<'_> {
        ReportDisplay {
            name: &self.name,
            hosts: &self.hosts,
            network_map: &self.network_map,
        }
    }
}
