//! Dry-Run Sync Inspector
//!
//! Parses a markdown file and prints, as JSON, exactly what a sync pass
//! would do: the extracted tasks, the rows already carrying a remote tag,
//! any anomalies, and the order create calls would be issued in. No remote
//! service is contacted and the file is never modified.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sync-dry-run -- notes.md
//!
//! # with a settings file (for the due-date language)
//! cargo run --bin sync-dry-run -- notes.md settings.json
//! ```

use anyhow::{bail, Context};
use marksync_core::config::SyncSettings;
use marksync_core::models::{ParseAnomaly, ParsedTask, TaggedRow};
use marksync_core::parser::parse_document;
use marksync_core::services::order_for_creation;
use serde::Serialize;
use std::path::Path;

/// What the inspector prints.
#[derive(Debug, Serialize)]
struct DryRunReport {
    tasks: Vec<ParsedTask>,
    tagged_rows: Vec<TaggedRow>,
    anomalies: Vec<ParseAnomaly>,
    /// Task contents in the order create calls would be issued.
    creation_order: Vec<String>,
}

fn build_report(text: &str, due_lang: &str) -> DryRunReport {
    let outcome = parse_document(text, due_lang);
    let creation_order = order_for_creation(outcome.tasks.clone())
        .into_iter()
        .map(|task| task.content)
        .collect();
    DryRunReport {
        tasks: outcome.tasks,
        tagged_rows: outcome.tagged_rows,
        anomalies: outcome.anomalies,
        creation_order,
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let file = match args.next() {
        Some(file) => file,
        None => bail!("usage: sync-dry-run <file.md> [settings.json]"),
    };

    let settings = match args.next() {
        Some(path) => SyncSettings::load(Path::new(&path))
            .with_context(|| format!("loading settings from {}", path))?,
        None => SyncSettings::default(),
    };

    let text = std::fs::read_to_string(&file).with_context(|| format!("reading {}", file))?;
    let report = build_report(&text, &settings.due_lang);

    tracing::info!(
        tasks = report.tasks.len(),
        tagged = report.tagged_rows.len(),
        "parsed {}",
        file
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
