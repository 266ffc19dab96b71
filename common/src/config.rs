use std::path::PathBuf;

pub struct Config {
    /// Emits debug level diagnostics (dropped hosts, skipped ports).
    pub debug: bool,
    /// Nmap XML report to ingest.
    pub filename: PathBuf,
    /// Where the YAML dump is written.
    ///
    /// When unset the dump is emitted to the log stream instead.
    pub output: Option<PathBuf>,
}
