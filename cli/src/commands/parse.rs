use std::fs;
use std::path::Path;

use anyhow::Context;
use pathfinder_common::{config::Config, report::Report};
use pathfinder_core::{NmapParser, ReportParser};
use tracing::info;

pub fn parse(cfg: &Config) -> anyhow::Result<()> {
    let parser = NmapParser::new();

    let Some(report) = parser.parse(&cfg.filename) else {
        anyhow::bail!(
            "no report produced from {} ({} format)",
            cfg.filename.display(),
            parser.format()
        );
    };

    let file_name = cfg
        .filename
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!("parsed {file_name} and produced output report: {}", report.name);

    match &cfg.output {
        Some(path) => {
            save_report(&report, path)?;
            info!("output report saved to: {}", path.display());
        }
        None => info!("{}", render(&report)?),
    }

    Ok(())
}

fn render(report: &Report) -> anyhow::Result<String> {
    serde_yaml::to_string(&report.display()).context("failed to serialize report to yaml")
}

fn save_report(report: &Report, path: &Path) -> anyhow::Result<()> {
    let yaml = render(report)?;
    fs::write(path, yaml).with_context(|| format!("failed to write {}", path.display()))
}
