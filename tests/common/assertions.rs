//! Custom assertions for analysis records

use archhealth::{ArchitectureAnalysis, CouplingMetric};

/// Coupling metric for `path`, panicking with the known paths if absent
pub fn coupling_for<'a>(analysis: &'a ArchitectureAnalysis, path: &str) -> &'a CouplingMetric {
    analysis
        .coupling
        .iter()
        .find(|m| m.component == path)
        .unwrap_or_else(|| {
            let known: Vec<&str> = analysis.coupling.iter().map(|m| m.component.as_str()).collect();
            panic!("no coupling metric for {}; have {:?}", path, known)
        })
}

/// Every invariant that must hold for any analysis
pub fn assert_analysis_invariants(analysis: &ArchitectureAnalysis) {
    assert!(analysis.health_score <= 100);

    for m in &analysis.coupling {
        assert!(
            (0.0..=1.0).contains(&m.instability),
            "instability out of range for {}",
            m.component
        );
        if m.afferent_coupling + m.efferent_coupling == 0 {
            assert_eq!(m.instability, 0.0);
        }
    }

    for d in &analysis.duplication {
        assert!((0.0..=1.0).contains(&d.similarity));
        assert_ne!(d.files[0], d.files[1]);
    }

    for c in &analysis.complexity {
        assert!(c.cyclomatic_complexity >= 1);
    }
}
