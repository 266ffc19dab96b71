use indexmap::IndexMap;
use serde::Serialize;

use super::Port;

/// A single scanned machine, identified by its IP address.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Host {
    pub ip: String,
    pub hostname: Option<String>,
    /// Ports keyed by port number.
    pub ports: IndexMap<String, Port>,
    /// CVE identifiers aggregated across all ports, duplicates included.
    pub cves: Vec<String>,
}

impl From<&str> for Host {
    fn from(ip: &str) -> Self {
        Self::new(ip)
    }
}

impl Host {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            hostname: None,
            ports: IndexMap::new(),
            cves: Vec::new(),
        }
    }

    pub fn insert_port(&mut self, port: Port) {
        self.ports.insert(port.number.clone(), port);
    }

    pub fn port(&self, number: &str) -> Option<&Port> {
        self.ports.get(number)
    }

    pub fn has_ports(&self) -> bool {
        !self.ports.is_empty()
    }

    pub fn open_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.values().filter(|port| port.is_open())
    }
}
