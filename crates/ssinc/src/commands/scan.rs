//! Scan command implementation.
//!
//! Lists the include directives a page contains without fetching
//! anything.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use ssinc_core::scan;
use ssinc_dom::Document;

/// Arguments for the scan command
#[derive(Debug)]
pub struct ScanArgs {
    /// Page to scan
    pub page: PathBuf,
    /// Emit machine-readable JSON
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ScanEntry {
    target: String,
    markers: usize,
}

/// Execute the scan command
pub fn execute(args: ScanArgs) -> Result<()> {
    let page_text = std::fs::read_to_string(&args.page)
        .with_context(|| format!("failed to read {}", args.page.display()))?;
    let doc = Document::parse(&page_text)
        .with_context(|| format!("failed to parse {}", args.page.display()))?;

    let pending = scan(&doc);
    let entries: Vec<ScanEntry> = pending
        .entries()
        .map(|(target, handles)| ScanEntry {
            target: target.to_string(),
            markers: handles.len(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("no includes found");
    } else {
        for entry in &entries {
            let plural = if entry.markers == 1 { "" } else { "s" };
            println!("{} ({} marker{plural})", entry.target, entry.markers);
        }
    }
    Ok(())
}
