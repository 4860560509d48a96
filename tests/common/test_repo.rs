//! Temporary repository builder
//!
//! Writes files under a temp directory and records a matching catalog entry
//! for each one, the way the external catalog builder would.

use std::fs;
use std::path::Path;

use archhealth::{
    analyze_architecture, AnalysisConfig, ArchitectureAnalysis, Component, ComponentType,
};
use tempfile::TempDir;

pub struct TestRepo {
    dir: TempDir,
    catalog: Vec<Component>,
}

impl TestRepo {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
            catalog: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn catalog(&self) -> &[Component] {
        &self.catalog
    }

    /// Write a file without cataloging it
    pub fn write(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(full, content).expect("write fixture file");
    }

    /// Write a file and catalog it; `deps` are relative specifiers
    pub fn add(&mut self, path: &str, content: &str, deps: &[&str]) -> &mut Self {
        self.write(path, content);
        self.add_entry(path, content.lines().count(), deps)
    }

    /// Catalog a component without writing any file
    pub fn add_entry(&mut self, path: &str, lines: usize, deps: &[&str]) -> &mut Self {
        let name = Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(path)
            .to_string();
        let component = deps.iter().fold(
            Component::new(&name, path, ComponentType::Component).with_lines(lines),
            |c, dep| c.with_dependency(dep),
        );
        self.catalog.push(component);
        self
    }

    pub fn analyze(&self) -> ArchitectureAnalysis {
        self.analyze_with(&AnalysisConfig::default())
    }

    pub fn analyze_with(&self, config: &AnalysisConfig) -> ArchitectureAnalysis {
        analyze_architecture(&self.catalog, self.root(), config).expect("analysis succeeds")
    }
}

/// A small, branch-free function body unique to `tag`
pub fn simple_module(tag: &str) -> String {
    format!(
        "export function {tag}Value(input) {{\n  return input + '{tag}';\n}}\n",
        tag = tag
    )
}

/// Twelve lines of repetitive exports, suitable for duplication fixtures
pub fn long_module(tag: &str) -> String {
    (0..12)
        .map(|i| format!("export const item{} = build('{}', {});\n", i, tag, i))
        .collect()
}
