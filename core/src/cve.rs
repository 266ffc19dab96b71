use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

static CVE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn cve_pattern() -> &'static Regex {
    CVE_PATTERN.get_or_init(|| Regex::new(r"CVE-\d{4}-\d{4,}").expect("invalid CVE pattern"))
}

/// Collects the distinct CVE identifiers mentioned in `text`.
pub fn extract_cves(text: &str) -> BTreeSet<String> {
    cve_pattern()
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}
