//! archhealth: structural health analysis for a codebase snapshot
//!
//! Given a component catalog (one record per source file, with its imports,
//! exports and relative dependencies) and the root directory the catalog
//! paths live under, this library computes:
//!
//! - pairwise component coupling and instability
//! - near-duplicate files
//! - per-function cyclomatic and cognitive complexity
//! - circular dependencies
//! - an aggregate 0-100 health score
//!
//! The four engines run concurrently and share a per-run content cache, so
//! each file is read and parsed at most once.
//!
//! # Example
//!
//! ```ignore
//! use archhealth::{analyze_architecture, load_catalog, AnalysisConfig};
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("catalog.json"))?;
//! let analysis = analyze_architecture(&catalog, Path::new("."), &AnalysisConfig::default())?;
//! println!("{}", serde_json::to_string_pretty(&analysis)?);
//! ```

pub mod analysis;
pub mod cache;
pub mod catalog;
pub mod cli;
pub mod complexity;
pub mod config;
pub mod coupling;
pub mod cycles;
pub mod duplication;
pub mod error;
pub mod health;
pub mod lang;
pub mod schema;
pub mod utils;

// Re-export commonly used types
pub use analysis::{
    analyze_architecture, analyze_architecture_detailed, format_analysis_report, AnalysisRun,
};
pub use cache::ContentCache;
pub use catalog::{load_catalog, parse_catalog, validate_catalog};
pub use cli::{Cli, OutputFormat};
pub use complexity::{analyze_complexity, cognitive_complexity, cyclomatic_complexity};
pub use config::AnalysisConfig;
pub use coupling::analyze_coupling;
pub use cycles::detect_cycles;
pub use duplication::{detect_duplication, similarity, DuplicationOutcome};
pub use error::{ArchError, Result};
pub use health::calculate_health_score;
pub use lang::Lang;
pub use schema::{
    ArchitectureAnalysis, CircularDependency, ComplexityMetric, ComplexityScore, Component,
    ComponentType, CouplingMetric, CouplingScore, DuplicationInstance, Severity,
};
