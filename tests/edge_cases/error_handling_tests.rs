//! Per-file failures degrade coverage; only catalog problems abort

use archhealth::{
    analyze_architecture, analyze_architecture_detailed, parse_catalog, AnalysisConfig,
    ArchError, Component, ComponentType,
};

use crate::common::test_repo::{long_module, simple_module};
use crate::common::{assert_analysis_invariants, TestRepo};

#[test]
fn test_missing_file_is_not_an_error() {
    let mut repo = TestRepo::new();
    repo.add("src/ok.ts", &simple_module("ok"), &[])
        .add_entry("src/ghost.ts", 40, &[]);

    let analysis = repo.analyze();
    assert_analysis_invariants(&analysis);
    assert_eq!(analysis.coupling.len(), 2);
    assert_eq!(analysis.complexity.len(), 1);
    assert_eq!(analysis.complexity[0].file, "src/ok.ts");
}

#[test]
fn test_unparsable_file_contributes_no_functions() {
    let mut repo = TestRepo::new();
    repo.add("src/broken.ts", "export function (((\n", &[])
        .add("src/ok.ts", &simple_module("ok"), &[]);

    let analysis = repo.analyze();
    assert!(analysis.complexity.iter().all(|m| m.file != "src/broken.ts"));
    assert_eq!(analysis.health_score, 100);
}

#[test]
fn test_non_script_files_skipped_by_complexity() {
    let mut repo = TestRepo::new();
    repo.add("src/styles.css", ".button { color: red; }\n", &[]);

    let analysis = repo.analyze();
    assert!(analysis.complexity.is_empty());
}

#[test]
fn test_malformed_catalog_rejected_at_boundary() {
    let err = parse_catalog(r#"[{"name": "a", "path": 3}]"#).unwrap_err();
    assert!(matches!(err, ArchError::InvalidCatalog { .. }));

    let err = parse_catalog(r#"{"components": []}"#).unwrap_err();
    assert!(matches!(err, ArchError::InvalidCatalog { .. }));
}

#[test]
fn test_duplicate_paths_abort_analysis() {
    let repo = TestRepo::new();
    let catalog = vec![
        Component::new("a", "src/a.ts", ComponentType::Page),
        Component::new("a", "src/a.ts", ComponentType::Page),
    ];
    let err = analyze_architecture(&catalog, repo.root(), &AnalysisConfig::default())
        .unwrap_err();
    assert!(matches!(err, ArchError::InvalidCatalog { .. }));
}

#[test]
fn test_package_dependencies_do_not_abort() {
    let mut repo = TestRepo::new();
    repo.add("src/app.ts", &simple_module("app"), &["react", "./util"])
        .add("src/util.ts", &simple_module("util"), &[]);

    let analysis = repo.analyze();
    assert_analysis_invariants(&analysis);
    assert_eq!(analysis.coupling[0].efferent_coupling, 1);
    assert!(analysis.circular_dependencies.is_empty());
}

#[test]
fn test_missing_files_not_reported_as_duplicates() {
    let mut repo = TestRepo::new();
    repo.add_entry("src/ghost_a.ts", 0, &[])
        .add_entry("src/ghost_b.ts", 0, &[]);

    let config = AnalysisConfig {
        min_lines: 0,
        ..Default::default()
    };
    let run = analyze_architecture_detailed(repo.catalog(), repo.root(), &config).unwrap();
    assert!(run.analysis.duplication.is_empty());
    assert_eq!(run.analysis.health_score, 100);
}

#[test]
fn test_comparison_budget_exhaustion_returns_partial() {
    let mut repo = TestRepo::new();
    let text = long_module("same");
    for name in ["a", "b", "c", "d"] {
        repo.add(&format!("src/{}.ts", name), &text, &[]);
    }

    let config = AnalysisConfig {
        max_comparisons: 2,
        ..Default::default()
    };
    let run = analyze_architecture_detailed(repo.catalog(), repo.root(), &config).unwrap();

    assert!(run.duplication.truncated);
    assert!(run.duplication.message.is_some());
    assert_eq!(run.duplication.comparisons, 2);
    assert_eq!(run.analysis.duplication.len(), 2);
    assert_eq!(run.files_read, 4);
}

#[test]
fn test_score_clamped_at_zero() {
    let mut repo = TestRepo::new();
    let text = long_module("dup");
    // 8 identical files: 28 pairs * 5 points
    for i in 0..8 {
        repo.add(&format!("src/copy{}.ts", i), &text, &[]);
    }

    let analysis = repo.analyze();
    assert_eq!(analysis.duplication.len(), 28);
    assert_eq!(analysis.health_score, 0);
}

#[test]
fn test_test_files_excluded_from_duplication() {
    let mut repo = TestRepo::new();
    let text = long_module("same");
    repo.add("src/a.ts", &text, &[])
        .add("src/__tests__/a.ts", &text, &[])
        .add("src/b.spec.ts", &text, &[]);

    let analysis = repo.analyze();
    assert!(analysis.duplication.is_empty());
}
