/*
 * source.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Where included content comes from
//!
//! The resolver asks an [`IncludeSource`] for each resource name it
//! finds. Sources are fetched concurrently within a pass, so
//! implementations must be shareable across tasks.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::FetchError;

/// Fetches include content by resource name.
#[async_trait]
pub trait IncludeSource: Send + Sync {
    /// Fetch the content for `target`.
    ///
    /// `target` is the name exactly as written in the directive, e.g.
    /// `nav.html` or `/inc/footer.html`.
    async fn fetch(&self, target: &str) -> Result<String, FetchError>;
}

/// Serves includes from files under a root directory.
///
/// Names are joined to the root as relative paths; a leading `/` is
/// stripped first so absolute-style names used in served pages resolve
/// under the same root. `..` segments are not rejected.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, target: &str) -> PathBuf {
        self.root.join(target.trim_start_matches('/'))
    }
}

#[async_trait]
impl IncludeSource for DirSource {
    async fn fetch(&self, target: &str) -> Result<String, FetchError> {
        let path = self.resolve(target);
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                FetchError::NotFound(target.to_string())
            } else {
                FetchError::Io {
                    target: target.to_string(),
                    source: e,
                }
            }
        })
    }
}

/// In-memory source, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `name`, replacing any previous entry
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.entries.insert(name.into(), content.into());
        self
    }
}

#[async_trait]
impl IncludeSource for MemorySource {
    async fn fetch(&self, target: &str) -> Result<String, FetchError> {
        self.entries
            .get(target)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(target.to_string()))
    }
}

/// A source with no resources; every fetch fails with `NotFound`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSource;

#[async_trait]
impl IncludeSource for NullSource {
    async fn fetch(&self, target: &str) -> Result<String, FetchError> {
        Err(FetchError::NotFound(target.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_memory_source_hit_and_miss() {
        let mut source = MemorySource::new();
        source.add("nav.html", "<nav>menu</nav>");
        assert_eq!(
            source.fetch("nav.html").await.unwrap(),
            "<nav>menu</nav>"
        );
        assert!(matches!(
            source.fetch("missing.html").await,
            Err(FetchError::NotFound(name)) if name == "missing.html"
        ));
    }

    #[tokio::test]
    async fn test_null_source_never_resolves() {
        assert!(matches!(
            NullSource.fetch("anything.html").await,
            Err(FetchError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_dir_source_reads_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("inc")).unwrap();
        std::fs::write(dir.path().join("inc/nav.html"), "<nav/>").unwrap();

        let source = DirSource::new(dir.path());
        assert_eq!(source.fetch("inc/nav.html").await.unwrap(), "<nav/>");
    }

    #[tokio::test]
    async fn test_dir_source_strips_leading_slash() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("footer.html"), "<footer/>").unwrap();

        let source = DirSource::new(dir.path());
        assert_eq!(source.fetch("/footer.html").await.unwrap(), "<footer/>");
    }

    #[tokio::test]
    async fn test_dir_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        assert!(matches!(
            source.fetch("absent.html").await,
            Err(FetchError::NotFound(name)) if name == "absent.html"
        ));
    }
}
