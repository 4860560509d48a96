//! Afferent/efferent coupling and instability per component
//!
//! Pure function over catalog metadata; no file access.

use tracing::info;

use crate::catalog::is_relative_specifier;
use crate::schema::{Component, CouplingMetric, CouplingScore};

impl CouplingScore {
    /// Band a component by instability and outgoing dependency count
    pub fn classify(instability: f64, efferent: usize) -> Self {
        if instability > 0.7 || efferent > 10 {
            Self::High
        } else if instability > 0.5 || efferent > 5 {
            Self::Moderate
        } else {
            Self::Good
        }
    }
}

/// Ce / (Ca + Ce); 0 when the component has no coupling at all
pub fn instability(afferent: usize, efferent: usize) -> f64 {
    let total = afferent + efferent;
    if total == 0 {
        0.0
    } else {
        efferent as f64 / total as f64
    }
}

/// Count other components whose dependency list mentions `component.name`.
///
/// Matching is by substring on the bare name, so `Button` is also found
/// inside `./IconButton`.
fn afferent_coupling(component: &Component, catalog: &[Component]) -> usize {
    catalog
        .iter()
        .filter(|other| other.path != component.path)
        .filter(|other| {
            other
                .dependencies
                .iter()
                .any(|dep| dep.contains(component.name.as_str()))
        })
        .count()
}

fn efferent_coupling(component: &Component) -> usize {
    component
        .dependencies
        .iter()
        .filter(|dep| is_relative_specifier(dep))
        .count()
}

/// One metric per component, in catalog order
pub fn analyze_coupling(catalog: &[Component]) -> Vec<CouplingMetric> {
    let metrics: Vec<CouplingMetric> = catalog
        .iter()
        .map(|component| {
            let afferent = afferent_coupling(component, catalog);
            let efferent = efferent_coupling(component);
            let instability = instability(afferent, efferent);
            CouplingMetric {
                component: component.path.clone(),
                afferent_coupling: afferent,
                efferent_coupling: efferent,
                instability,
                score: CouplingScore::classify(instability, efferent),
            }
        })
        .collect();

    let high = metrics
        .iter()
        .filter(|m| m.score == CouplingScore::High)
        .count();
    info!(components = metrics.len(), high, "coupling analysis complete");

    metrics
}
