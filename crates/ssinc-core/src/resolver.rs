/*
 * resolver.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The resolution loop: scan, fetch, substitute, repeat
//!
//! Each pass scans the document for include markers, fetches every
//! distinct resource once (concurrently), then splices the fetched
//! markup in at each marker in document order. Content brought in by a
//! substitution is scanned again on the next pass, so nested includes
//! resolve to a fixpoint.
//!
//! Failures never stall a run. A marker whose resource cannot be
//! fetched stays in the document and is reported in the summary; it is
//! retried only when a later pass runs for other, newly appeared
//! markers.

use std::collections::HashSet;
use std::time::Instant;

use futures::future;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::directive::{has_include_prefix, include_target};
use crate::document::DocumentEdit;
use crate::pending::PendingSet;
use crate::source::IncludeSource;

/// What a resolution run did
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolveSummary {
    /// Passes executed; zero when the first scan found nothing new
    pub passes: u32,
    /// Fetches issued across all passes
    pub fetches: u32,
    /// Markers replaced by fetched content
    pub replaced: u32,
    /// Resources that never made it into the document, with the last
    /// failure seen for each
    pub unresolved: Vec<UnresolvedInclude>,
}

/// A resource that could not be substituted
#[derive(Debug, Clone, Serialize)]
pub struct UnresolvedInclude {
    pub target: String,
    pub reason: String,
}

/// Collect the include markers currently in `doc`, grouped by resource
/// name in first-seen order.
///
/// Comments that are not well-formed directives are skipped. A failed
/// traversal is logged and treated as a document with no markers.
pub fn scan<D: DocumentEdit>(doc: &D) -> PendingSet<D::Handle> {
    let mut pending = PendingSet::new();
    let handles = match doc.comment_handles() {
        Ok(handles) => handles,
        Err(e) => {
            warn!(error = %e, "comment traversal failed, treating document as marker-free");
            return pending;
        }
    };
    for handle in handles {
        if let Some(text) = doc.comment_text(&handle) {
            if let Some(target) = include_target(&text) {
                pending.insert(target, handle);
            } else if has_include_prefix(&text) {
                debug!(comment = text.trim(), "ignoring malformed include directive");
            }
        }
    }
    pending
}

/// Resolve every include in `doc` against `source`, to a fixpoint.
///
/// The returned future completes once no pass has anything new to
/// attempt; completion itself is the only "done" signal, and the
/// summary says how much work was done. Holding `&mut` on the document
/// means a document can only be resolved by one run at a time.
///
/// Resolution state lives entirely in this call, so the same document
/// or source can be used in later runs without carryover.
///
/// There is no cycle guard: content that transitively includes itself
/// makes the run grow the document forever. Sources are expected to be
/// acyclic.
pub async fn resolve<D, S>(doc: &mut D, source: &S) -> ResolveSummary
where
    D: DocumentEdit,
    S: IncludeSource + ?Sized,
{
    let started = Instant::now();
    let mut summary = ResolveSummary::default();
    // Markers that have had their substitution attempted, across
    // passes. A pass runs only when the scan turns up a marker not in
    // this set; the pass then attempts everything the scan found.
    let mut attempted: HashSet<D::Handle> = HashSet::new();
    let mut failures: IndexMap<String, String> = IndexMap::new();

    loop {
        let pending = scan(doc);
        if !pending.handles().any(|handle| !attempted.contains(handle)) {
            break;
        }
        summary.passes += 1;
        debug!(
            pass = summary.passes,
            resources = pending.resource_count(),
            markers = pending.marker_count(),
            "starting include pass"
        );
        for handle in pending.handles() {
            attempted.insert(handle.clone());
        }

        let results = future::join_all(pending.targets().map(|target| {
            debug!(resource = target, "fetching include");
            source.fetch(target)
        }))
        .await;
        summary.fetches += pending.resource_count() as u32;

        for ((target, handles), result) in pending.entries().zip(results) {
            match result {
                Ok(content) => {
                    debug!(
                        resource = target,
                        markers = handles.len(),
                        "substituting include content"
                    );
                    let mut clean = true;
                    for handle in handles {
                        match substitute(doc, handle, &content) {
                            Ok(()) => summary.replaced += 1,
                            Err(reason) => {
                                warn!(
                                    resource = target,
                                    error = %reason,
                                    "include substitution failed"
                                );
                                failures.insert(target.to_string(), reason);
                                clean = false;
                            }
                        }
                    }
                    if clean {
                        failures.shift_remove(target);
                    }
                }
                Err(e) => {
                    warn!(resource = target, error = %e, "include fetch failed");
                    failures.insert(target.to_string(), e.to_string());
                }
            }
        }
    }

    summary.unresolved = failures
        .into_iter()
        .map(|(target, reason)| UnresolvedInclude { target, reason })
        .collect();
    info!(
        passes = summary.passes,
        fetches = summary.fetches,
        replaced = summary.replaced,
        unresolved = summary.unresolved.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "include resolution finished"
    );
    summary
}

/// Splice the fetched content in before the marker, then detach the
/// marker itself.
fn substitute<D: DocumentEdit>(
    doc: &mut D,
    handle: &D::Handle,
    content: &str,
) -> Result<(), String> {
    doc.splice_markup_before(handle, content)
        .map_err(|e| e.to_string())?;
    doc.remove(handle).map_err(|e| e.to_string())?;
    Ok(())
}
