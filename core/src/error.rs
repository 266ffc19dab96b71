/// Anything that aborts the parse of a whole report.
///
/// Dropped hosts and skipped ports are not errors and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read report: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed xml: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("host element has no address")]
    MissingAddress,
    #[error("host {ip} has no ports element")]
    MissingPorts { ip: String },
}
