//! Per-run content cache for file text and parsed syntax trees
//!
//! One `ContentCache` lives for exactly one analysis run and is shared by the
//! duplication and complexity engines. Each path is read at most once and
//! parsed at most once; entries are write-once and read-only afterwards, so
//! concurrent engines never observe a half-populated entry.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use rayon::prelude::*;
use tracing::debug;
use tree_sitter::Tree;

use crate::lang::Lang;

/// Cached text and lazily parsed tree for one file
pub struct CachedSource {
    /// Catalog path (relative to the analysis root)
    path: String,
    lang: Option<Lang>,
    /// `None` when the file could not be read
    content: Option<String>,
    tree: OnceCell<Option<Tree>>,
}

impl CachedSource {
    fn load(path: &str, resolved: &Path) -> Self {
        let content = match fs::read_to_string(resolved) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!(path, error = %e, "unreadable file treated as empty");
                None
            }
        };

        Self {
            path: path.to_string(),
            lang: Lang::from_path(resolved),
            content,
            tree: OnceCell::new(),
        }
    }

    /// File text; empty when the file was unreadable
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn is_readable(&self) -> bool {
        self.content.is_some()
    }

    /// Parsed tree, or `None` if the file is unreadable, in an unsupported
    /// language, or contains syntax errors
    pub fn tree(&self) -> Option<&Tree> {
        self.tree.get_or_init(|| self.parse()).as_ref()
    }

    fn parse(&self) -> Option<Tree> {
        let source = self.content.as_deref()?;
        let lang = match self.lang {
            Some(lang) => lang,
            None => {
                debug!(path = %self.path, "no grammar for file, skipping parse");
                return None;
            }
        };

        let mut parser = tree_sitter::Parser::new();
        if let Err(e) = parser.set_language(&lang.tree_sitter_language()) {
            debug!(path = %self.path, error = ?e, "failed to set language");
            return None;
        }

        let tree = parser.parse(source, None)?;
        if tree.root_node().has_error() {
            debug!(path = %self.path, lang = lang.name(), "syntax errors, file treated as unparsable");
            return None;
        }
        Some(tree)
    }
}

/// Read-through cache keyed by resolved file path
pub struct ContentCache {
    root: PathBuf,
    entries: RwLock<HashMap<PathBuf, Arc<CachedSource>>>,
}

impl ContentCache {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve a catalog path against the analysis root
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Fetch the entry for `path`, reading the file on first access
    pub fn get(&self, path: &str) -> Arc<CachedSource> {
        let resolved = self.resolve(path);
        if let Some(entry) = self.entries.read().get(&resolved) {
            return Arc::clone(entry);
        }

        // Read outside the lock; a racing reader may load the same file, but
        // only the first insert is kept.
        let loaded = Arc::new(CachedSource::load(path, &resolved));
        let mut entries = self.entries.write();
        Arc::clone(entries.entry(resolved).or_insert(loaded))
    }

    /// Warm the cache in parallel batches; with `parse` set, trees are built too
    pub fn prefetch(&self, paths: &[&str], batch_width: usize, parse: bool) {
        map_in_batches(paths, batch_width, |path| {
            let entry = self.get(path);
            if parse {
                let _ = entry.tree();
            }
        });
    }

    /// Distinct files loaded so far
    pub fn files_read(&self) -> usize {
        self.entries.read().len()
    }
}

/// Apply `f` to every item, `width` items at a time in parallel, returning
/// results in input order regardless of completion order
pub fn map_in_batches<I, T, F>(items: &[I], width: usize, f: F) -> Vec<T>
where
    I: Sync,
    T: Send,
    F: Fn(&I) -> T + Sync + Send,
{
    let width = width.max(1);
    let mut results = Vec::with_capacity(items.len());
    for chunk in items.chunks(width) {
        let batch: Vec<T> = chunk.par_iter().map(&f).collect();
        results.extend(batch);
    }
    results
}
