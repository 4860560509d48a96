//! Catalog input records and analysis output records
//!
//! Field names and enum spellings here are the JSON compatibility surface
//! consumed by reporting layers, so everything serializes in camelCase with
//! lowercase (or kebab-case) enum values.

use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog input
// ============================================================================

/// Declared role of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Page,
    Component,
    Layout,
    Api,
    Utility,
}

/// One source file as produced by the catalog builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Logical name (usually the file stem)
    pub name: String,
    /// Path relative to the analysis root; unique within a catalog
    pub path: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    /// Import specifiers in source order
    #[serde(default)]
    pub imports: Vec<String>,
    /// Declared export names
    #[serde(default)]
    pub exports: Vec<String>,
    /// Relative import specifiers (subset of `imports`)
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub lines_of_code: usize,
}

impl Component {
    /// Convenience constructor used by tests and callers building catalogs in code
    pub fn new(name: &str, path: &str, component_type: ComponentType) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            component_type,
            imports: Vec::new(),
            exports: Vec::new(),
            dependencies: Vec::new(),
            lines_of_code: 0,
        }
    }

    /// Add a relative dependency, recording it as an import too
    pub fn with_dependency(mut self, specifier: &str) -> Self {
        self.imports.push(specifier.to_string());
        self.dependencies.push(specifier.to_string());
        self
    }

    pub fn with_lines(mut self, lines_of_code: usize) -> Self {
        self.lines_of_code = lines_of_code;
        self
    }
}

// ============================================================================
// Coupling
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouplingScore {
    Good,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouplingMetric {
    /// Component path
    pub component: String,
    pub afferent_coupling: usize,
    pub efferent_coupling: usize,
    pub instability: f64,
    pub score: CouplingScore,
}

// ============================================================================
// Duplication
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicationInstance {
    /// Exactly two file paths, in catalog order
    pub files: [String; 2],
    /// Smaller line count of the pair
    pub lines: usize,
    pub similarity: f64,
    pub snippet: String,
    pub suggestion: String,
}

// ============================================================================
// Complexity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplexityScore {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl ComplexityScore {
    /// Band a function by its cyclomatic and cognitive counts
    pub fn classify(cyclomatic: usize, cognitive: usize) -> Self {
        if cyclomatic > 20 || cognitive > 15 {
            Self::VeryComplex
        } else if cyclomatic > 10 || cognitive > 7 {
            Self::Complex
        } else if cyclomatic > 5 || cognitive > 3 {
            Self::Moderate
        } else {
            Self::Simple
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
            Self::VeryComplex => "very-complex",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityMetric {
    pub file: String,
    pub function: String,
    pub cyclomatic_complexity: usize,
    pub cognitive_complexity: usize,
    pub lines_of_code: usize,
    pub score: ComplexityScore,
}

// ============================================================================
// Cycles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircularDependency {
    /// Member paths in walk order; the edge from the last back to the first closes it
    pub cycle: Vec<String>,
    pub severity: Severity,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Aggregate report for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureAnalysis {
    /// RFC 3339 timestamp
    pub analyzed_at: String,
    pub coupling: Vec<CouplingMetric>,
    pub duplication: Vec<DuplicationInstance>,
    pub complexity: Vec<ComplexityMetric>,
    pub circular_dependencies: Vec<CircularDependency>,
    pub health_score: u8,
}
