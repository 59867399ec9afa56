//! Loading the event feed and taxonomy from disk or stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use campus_calendar_core::ingest::{self, Diagnostic, IngestReport};
use campus_calendar_core::Taxonomy;
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;

/// Path given on the command line, else `events_file` from config.
pub fn resolve_events_path(cli: Option<&Path>, config: &GlobalConfig) -> Result<PathBuf> {
    match cli {
        Some(path) => Ok(path.to_path_buf()),
        None => config.events_path().ok_or_else(|| {
            anyhow::anyhow!(
                "No event feed given.\n\n\
                Pass one with:\n  \
                campus-cal --events <file.json> <command>\n\n\
                or set events_file in {}",
                GlobalConfig::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "the config file".to_string())
            )
        }),
    }
}

/// Read and normalize the feed. `-` reads stdin.
pub fn load_events(path: &Path) -> Result<IngestReport> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read event feed from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event feed at {}", path.display()))?
    };

    let report = ingest::parse_feed(&contents)
        .with_context(|| format!("Failed to parse event feed at {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        events = report.events.len(),
        rejected = report.rejected.len(),
        "Loaded event feed"
    );

    Ok(report)
}

pub fn load_taxonomy(config: &GlobalConfig) -> Result<Taxonomy> {
    let Some(path) = config.taxonomy_path() else {
        return Ok(Taxonomy::default());
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read taxonomy at {}", path.display()))?;

    ingest::parse_taxonomy(&contents)
        .with_context(|| format!("Failed to parse taxonomy at {}", path.display()))
}

fn describe(diagnostic: &Diagnostic) -> String {
    match &diagnostic.id {
        Some(id) => format!("record {} (id {}): {}", diagnostic.index, id, diagnostic.error),
        None => format!("record {}: {}", diagnostic.index, diagnostic.error),
    }
}

/// Print skipped and suspicious records to stderr. Never fatal.
pub fn report_diagnostics(report: &IngestReport) {
    for diagnostic in &report.rejected {
        eprintln!("{} skipped {}", "warning:".yellow(), describe(diagnostic));
    }
    for diagnostic in &report.warnings {
        eprintln!("{} {}", "warning:".yellow(), describe(diagnostic));
    }
}
