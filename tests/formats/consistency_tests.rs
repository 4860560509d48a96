//! The JSON record is the compatibility surface for reporting layers

use archhealth::{format_analysis_report, ArchitectureAnalysis};
use serde_json::Value;

use crate::common::test_repo::long_module;
use crate::common::TestRepo;

fn sample_analysis() -> ArchitectureAnalysis {
    let mut repo = TestRepo::new();
    let text = long_module("fmt");
    let mut branchy = String::from("export function pick(a, b) {\n");
    for i in 0..12 {
        branchy.push_str(&format!("  if (a === {}) {{ return b; }}\n", i));
    }
    branchy.push_str("  return null;\n}\n");

    repo.add("src/a.ts", &text, &["./b"])
        .add("src/b.ts", &text, &["./a"])
        .add("src/pick.js", &branchy, &[]);
    repo.analyze()
}

#[test]
fn test_json_field_names() {
    let value = serde_json::to_value(sample_analysis()).unwrap();

    for key in [
        "analyzedAt",
        "coupling",
        "duplication",
        "complexity",
        "circularDependencies",
        "healthScore",
    ] {
        assert!(value.get(key).is_some(), "missing top-level key {}", key);
    }

    let coupling = &value["coupling"][0];
    for key in ["component", "afferentCoupling", "efferentCoupling", "instability", "score"] {
        assert!(coupling.get(key).is_some(), "missing coupling key {}", key);
    }

    let duplication = &value["duplication"][0];
    assert_eq!(duplication["files"].as_array().map(Vec::len), Some(2));
    for key in ["lines", "similarity", "snippet", "suggestion"] {
        assert!(duplication.get(key).is_some(), "missing duplication key {}", key);
    }

    let complexity = &value["complexity"][0];
    for key in [
        "file",
        "function",
        "cyclomaticComplexity",
        "cognitiveComplexity",
        "linesOfCode",
        "score",
    ] {
        assert!(complexity.get(key).is_some(), "missing complexity key {}", key);
    }
}

#[test]
fn test_json_enum_spellings() {
    let value = serde_json::to_value(sample_analysis()).unwrap();

    assert_eq!(value["complexity"][0]["score"], Value::from("very-complex"));
    assert_eq!(value["circularDependencies"][0]["severity"], Value::from("error"));

    let coupling_scores: Vec<&str> = value["coupling"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["score"].as_str())
        .collect();
    assert!(coupling_scores
        .iter()
        .all(|s| ["good", "moderate", "high"].contains(s)));
}

#[test]
fn test_json_round_trips() {
    let analysis = sample_analysis();
    let json = serde_json::to_string(&analysis).unwrap();
    let back: ArchitectureAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(back, analysis);
}

#[test]
fn test_text_report_mentions_findings() {
    let report = format_analysis_report(&sample_analysis());
    assert!(report.contains("ARCHITECTURE HEALTH REPORT"));
    assert!(report.contains("src/a.ts ↔ src/b.ts"));
    assert!(report.contains("pick"));
    assert!(report.contains("CIRCULAR DEPENDENCIES"));
}
