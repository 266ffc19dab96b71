//! Typed view of the parts of an Nmap XML report that feed a [`Report`].
//!
//! Deserialized with `quick-xml`. Unknown elements and attributes are ignored, and the
//! name of the root element is not checked.
//!
//! [`Report`]: pathfinder_common::report::Report

use serde::Deserialize;

/// Root element, normally `<nmaprun>`.
#[derive(Debug, Clone, Deserialize)]
pub struct NmapRun {
    #[serde(rename = "host", default)]
    pub hosts: Vec<NmapHost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NmapHost {
    #[serde(rename = "address", default)]
    pub addresses: Vec<Address>,
    pub hostnames: Option<Hostnames>,
    pub ports: Option<Ports>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    #[serde(rename = "@addr")]
    pub addr: Option<String>,
    #[serde(rename = "@addrtype")]
    pub addr_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hostnames {
    #[serde(rename = "hostname", default)]
    pub hostnames: Vec<Hostname>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hostname {
    #[serde(rename = "@name")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ports {
    #[serde(rename = "port", default)]
    pub ports: Vec<NmapPort>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NmapPort {
    #[serde(rename = "@portid")]
    pub port_id: String,
    #[serde(rename = "@protocol")]
    pub protocol: Option<String>,
    pub state: Option<PortState>,
    pub service: Option<NmapService>,
    #[serde(rename = "script", default)]
    pub scripts: Vec<Script>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortState {
    #[serde(rename = "@state")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NmapService {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@product")]
    pub product: Option<String>,
    #[serde(rename = "@version")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "@output")]
    pub output: Option<String>,
}

impl NmapHost {
    /// The `addr` of the first `address` element.
    pub fn addr(&self) -> Option<&str> {
        self.addresses.first().and_then(|a| a.addr.as_deref())
    }

    /// The `name` of the first `hostname` element.
    pub fn hostname(&self) -> Option<&str> {
        self.hostnames
            .as_ref()
            .and_then(|hn| hn.hostnames.first())
            .and_then(|h| h.name.as_deref())
    }
}

/// Deserializes a complete Nmap XML document.
pub fn from_str(xml: &str) -> Result<NmapRun, quick_xml::DeError> {
    quick_xml::de::from_str(xml)
}
