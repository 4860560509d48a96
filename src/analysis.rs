//! Architecture analysis orchestration
//!
//! Validates the catalog, creates a per-run content cache, runs the four
//! metric engines concurrently and combines their findings into one
//! `ArchitectureAnalysis`.

use std::path::Path;

use tracing::{debug, info};

use crate::cache::ContentCache;
use crate::catalog::validate_catalog;
use crate::complexity::analyze_complexity;
use crate::config::AnalysisConfig;
use crate::coupling::analyze_coupling;
use crate::cycles::detect_cycles;
use crate::duplication::{detect_duplication, DuplicationOutcome};
use crate::error::{ArchError, Result};
use crate::health::calculate_health_score;
use crate::schema::{
    ArchitectureAnalysis, Component, ComplexityScore, CouplingScore, Severity,
};
use crate::utils::truncate_with_ellipsis;

/// Analysis plus run diagnostics that are not part of the report itself
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub analysis: ArchitectureAnalysis,
    pub duplication: DuplicationOutcome,
    /// Distinct files read during the run
    pub files_read: usize,
}

/// Run every engine over `catalog`, reading files under `root`
pub fn analyze_architecture(
    catalog: &[Component],
    root: &Path,
    config: &AnalysisConfig,
) -> Result<ArchitectureAnalysis> {
    analyze_architecture_detailed(catalog, root, config).map(|run| run.analysis)
}

/// Like `analyze_architecture`, also returning the duplication outcome and cache stats
pub fn analyze_architecture_detailed(
    catalog: &[Component],
    root: &Path,
    config: &AnalysisConfig,
) -> Result<AnalysisRun> {
    if !root.is_dir() {
        return Err(ArchError::FileNotFound {
            path: root.display().to_string(),
        });
    }
    config.validate()?;
    validate_catalog(catalog)?;

    info!(components = catalog.len(), root = %root.display(), "starting architecture analysis");

    let cache = ContentCache::new(root);
    let paths: Vec<&str> = catalog.iter().map(|c| c.path.as_str()).collect();
    cache.prefetch(&paths, config.batch_width, true);
    debug!(files = cache.files_read(), "content cache warmed");

    // coupling and cycles are metadata-only; duplication and complexity share the cache
    let ((coupling, circular_dependencies), (duplication, complexity)) = rayon::join(
        || rayon::join(|| analyze_coupling(catalog), || detect_cycles(catalog)),
        || {
            rayon::join(
                || detect_duplication(catalog, &cache, config),
                || analyze_complexity(catalog, &cache, config),
            )
        },
    );

    let health_score = calculate_health_score(
        &coupling,
        &duplication.instances,
        &complexity,
        &circular_dependencies,
    );

    info!(health_score, files_read = cache.files_read(), "architecture analysis complete");

    let analysis = ArchitectureAnalysis {
        analyzed_at: chrono::Utc::now().to_rfc3339(),
        coupling,
        duplication: duplication.instances.clone(),
        complexity,
        circular_dependencies,
        health_score,
    };

    Ok(AnalysisRun {
        analysis,
        duplication,
        files_read: cache.files_read(),
    })
}

/// Format analysis as text report
pub fn format_analysis_report(analysis: &ArchitectureAnalysis) -> String {
    let mut output = String::new();

    output.push_str("╔══════════════════════════════════════════════════════════════════╗\n");
    output.push_str("║                  ARCHITECTURE HEALTH REPORT                      ║\n");
    output.push_str("╚══════════════════════════════════════════════════════════════════╝\n\n");

    output.push_str("── OVERVIEW ─────────────────────────────────────────────────────────\n");
    output.push_str(&format!("  Health Score:      {:>6}/100\n", analysis.health_score));
    output.push_str(&format!("  Components:        {:>6}\n", analysis.coupling.len()));
    output.push_str(&format!("  Functions:         {:>6}\n", analysis.complexity.len()));
    output.push_str(&format!("  Duplications:      {:>6}\n", analysis.duplication.len()));
    output.push_str(&format!(
        "  Cycles:            {:>6}\n",
        analysis.circular_dependencies.len()
    ));
    output.push_str(&format!("  Analyzed At:       {}\n\n", analysis.analyzed_at));

    let high_coupling: Vec<_> = analysis
        .coupling
        .iter()
        .filter(|m| m.score == CouplingScore::High)
        .collect();
    if !high_coupling.is_empty() {
        output.push_str("── HIGH COUPLING ────────────────────────────────────────────────────\n");
        output.push_str("  Component                                   Ca    Ce  Instability\n");
        for m in high_coupling.iter().take(15) {
            output.push_str(&format!(
                "  {:<40} {:>5} {:>5}  {:>10.2}\n",
                truncate_with_ellipsis(&m.component, 37),
                m.afferent_coupling,
                m.efferent_coupling,
                m.instability
            ));
        }
        output.push('\n');
    }

    let mut complex: Vec<_> = analysis
        .complexity
        .iter()
        .filter(|m| matches!(m.score, ComplexityScore::Complex | ComplexityScore::VeryComplex))
        .collect();
    if !complex.is_empty() {
        complex.sort_by(|a, b| b.cognitive_complexity.cmp(&a.cognitive_complexity));
        output.push_str("── COMPLEXITY HOTSPOTS ──────────────────────────────────────────────\n");
        output.push_str("  Function                         Cyc   Cog   LoC  Rating\n");
        for m in complex.iter().take(15) {
            output.push_str(&format!(
                "  {:<30} {:>5} {:>5} {:>5}  {}\n",
                truncate_with_ellipsis(&m.function, 27),
                m.cyclomatic_complexity,
                m.cognitive_complexity,
                m.lines_of_code,
                m.score.as_str()
            ));
        }
        output.push('\n');
    }

    if !analysis.duplication.is_empty() {
        output.push_str("── DUPLICATION ──────────────────────────────────────────────────────\n");
        for d in analysis.duplication.iter().take(10) {
            output.push_str(&format!(
                "  {} ↔ {} ({:.0}% similar, {} lines)\n",
                d.files[0],
                d.files[1],
                d.similarity * 100.0,
                d.lines
            ));
        }
        output.push('\n');
    }

    if !analysis.circular_dependencies.is_empty() {
        output.push_str("── CIRCULAR DEPENDENCIES ────────────────────────────────────────────\n");
        for c in analysis.circular_dependencies.iter().take(10) {
            let marker = match c.severity {
                Severity::Error => "✗",
                Severity::Warning => "⚠",
            };
            output.push_str(&format!(
                "  {} {} → {}\n",
                marker,
                c.cycle.join(" → "),
                c.cycle.first().map(String::as_str).unwrap_or("")
            ));
        }
        output.push('\n');
    }

    output.push_str("══════════════════════════════════════════════════════════════════════\n");

    output
}
