/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! Reads a page, resolves its include directives against a directory
//! source, and writes the expanded markup.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use ssinc_core::{resolve, DirSource};
use ssinc_dom::Document;

/// Arguments for the render command
#[derive(Debug)]
pub struct RenderArgs {
    /// Page to resolve
    pub page: PathBuf,
    /// Directory include names resolve against
    pub root: Option<PathBuf>,
    /// Output file path (stdout when absent)
    pub output: Option<PathBuf>,
    /// Print a JSON run summary to stderr
    pub report: bool,
    /// Fail if any include could not be resolved
    pub strict: bool,
}

/// Execute the render command
pub async fn execute(args: RenderArgs) -> Result<()> {
    let page_text = std::fs::read_to_string(&args.page)
        .with_context(|| format!("failed to read {}", args.page.display()))?;
    let mut doc = Document::parse(&page_text)
        .with_context(|| format!("failed to parse {}", args.page.display()))?;

    let root = match &args.root {
        Some(root) => root.clone(),
        None => match args.page.parent() {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        },
    };
    let source = DirSource::new(root);
    tracing::debug!(
        page = %args.page.display(),
        root = %source.root().display(),
        "rendering page"
    );

    let summary = resolve(&mut doc, &source).await;

    // The partial result is written even when includes are missing;
    // unresolved markers stay in the output for the next attempt.
    let rendered = doc.to_markup();
    match &args.output {
        Some(path) => std::fs::write(path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }

    if args.report {
        eprintln!("{}", serde_json::to_string_pretty(&summary)?);
    }
    if args.strict && !summary.unresolved.is_empty() {
        bail!(
            "{} include(s) could not be resolved",
            summary.unresolved.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(page: PathBuf, output: PathBuf) -> RenderArgs {
        RenderArgs {
            page,
            root: None,
            output: Some(output),
            report: false,
            strict: false,
        }
    }

    #[tokio::test]
    async fn test_render_writes_resolved_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.html"),
            "<body><!--#include \"nav.html\"--></body>",
        )
        .unwrap();
        std::fs::write(dir.path().join("nav.html"), "<nav/>").unwrap();
        let out = dir.path().join("out.html");

        execute(args(dir.path().join("index.html"), out.clone()))
            .await
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(out).unwrap(),
            "<body><nav/></body>"
        );
    }

    #[tokio::test]
    async fn test_strict_render_fails_but_still_writes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.html"),
            "<body><!--#include \"gone.html\"--></body>",
        )
        .unwrap();
        let out = dir.path().join("out.html");

        let mut strict_args = args(dir.path().join("index.html"), out.clone());
        strict_args.strict = true;
        let err = execute(strict_args).await.unwrap_err();

        assert!(err.to_string().contains("could not be resolved"));
        assert!(std::fs::read_to_string(out).unwrap().contains("#include"));
    }

    #[tokio::test]
    async fn test_explicit_root_overrides_page_directory() {
        let pages = tempfile::tempdir().unwrap();
        let includes = tempfile::tempdir().unwrap();
        std::fs::write(
            pages.path().join("index.html"),
            "<body><!--#include \"nav.html\"--></body>",
        )
        .unwrap();
        std::fs::write(includes.path().join("nav.html"), "<nav>other</nav>").unwrap();
        let out = pages.path().join("out.html");

        let mut rooted = args(pages.path().join("index.html"), out.clone());
        rooted.root = Some(includes.path().to_path_buf());
        execute(rooted).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(out).unwrap(),
            "<body><nav>other</nav></body>"
        );
    }
}
