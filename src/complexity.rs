//! Per-function complexity scoring
//!
//! Functions are located with tree-sitter, but the metrics themselves are
//! lexical approximations over each function's source text, not control-flow
//! analysis. The counting rules:
//!
//! - **Cyclomatic**: 1 + one per match of each decision-point pattern
//!   (`if`, `else if`, `for`, `while`, `case`, `catch`, `&&`, `||`, ternary `?`).
//!   An `else if` therefore counts twice, once for `if` and once for `else if`.
//! - **Cognitive**: line by line, a line containing `if`/`for`/`while`/`switch`/`catch`
//!   adds `1 + depth`, where depth is the count of unclosed `{` before that line;
//!   every `&&`/`||` adds 1 regardless of depth.
//!
//! Example (the function body brace already puts the `if` at depth 1):
//! ```ignore
//! function f(a, b) {   // depth 0
//!   if (a && b) {      // +2 (if at depth 1), +1 (&&)
//!     return 1;
//!   }
//!   return 0;
//! }
//! // cyclomatic 3, cognitive 3
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};
use tree_sitter::{Node, Tree};

use crate::cache::{map_in_batches, ContentCache};
use crate::config::AnalysisConfig;
use crate::schema::{Component, ComplexityMetric, ComplexityScore};

/// Node kinds treated as function-like constructs
const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "generator_function",
    "arrow_function",
];

const ANONYMOUS: &str = "anonymous";

static DECISION_POINTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bif\b",
        r"\belse\s+if\b",
        r"\bfor\b",
        r"\bwhile\b",
        r"\bcase\b",
        r"\bcatch\b",
        r"&&",
        r"\|\|",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid decision point regex"))
    .collect()
});

static CONTROL_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(if|for|while|switch|catch)\b").expect("valid keyword regex"));

static LOGICAL_OPERATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&&|\|\|").expect("valid operator regex"));

/// A function located in a parsed file
#[derive(Debug, Clone)]
pub struct FunctionSpan<'a> {
    pub name: String,
    pub text: &'a str,
    pub start_line: usize,
    pub lines_of_code: usize,
}

/// Count ternary `?` operators, skipping `?.`, `??` and optional `?:`
fn ternary_count(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            if c != '?' || i == 0 || i + 1 == chars.len() {
                return false;
            }
            !matches!(chars[i - 1], '?' | '.') && !matches!(chars[i + 1], '?' | '.' | ':')
        })
        .count()
}

pub fn cyclomatic_complexity(text: &str) -> usize {
    let keywords: usize = DECISION_POINTS
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum();
    1 + keywords + ternary_count(text)
}

pub fn cognitive_complexity(text: &str) -> usize {
    let mut depth = 0usize;
    let mut total = 0usize;

    for line in text.lines() {
        if CONTROL_KEYWORD.is_match(line) {
            total += 1 + depth;
        }
        total += LOGICAL_OPERATOR.find_iter(line).count();

        for ch in line.chars() {
            match ch {
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
    }

    total
}

/// Preorder walk recording every function-like node plus a child-id -> parent map
fn collect_function_nodes<'t>(root: Node<'t>) -> (Vec<Node<'t>>, HashMap<usize, Node<'t>>) {
    let mut functions = Vec::new();
    let mut parents = HashMap::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        // keyword tokens share kind names with constructs, so named nodes only
        if node.is_named() && FUNCTION_KINDS.contains(&node.kind()) {
            functions.push(node);
        }

        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            parents.insert(child.id(), node);
            stack.push(child);
        }
    }

    (functions, parents)
}

fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Declared name, else the variable or target it is assigned to, else "anonymous"
fn function_name(node: &Node, parents: &HashMap<usize, Node>, source: &str) -> String {
    if let Some(name) = node.child_by_field_name("name") {
        return node_text(&name, source).to_string();
    }

    let assigned = parents.get(&node.id()).and_then(|parent| match parent.kind() {
        "variable_declarator" => parent.child_by_field_name("name"),
        "assignment_expression" => parent.child_by_field_name("left"),
        _ => None,
    });

    match assigned {
        Some(target) => node_text(&target, source).to_string(),
        None => ANONYMOUS.to_string(),
    }
}

/// Every function-like construct in a parsed file, in source order
pub fn extract_functions<'a>(source: &'a str, tree: &Tree) -> Vec<FunctionSpan<'a>> {
    let (nodes, parents) = collect_function_nodes(tree.root_node());

    nodes
        .iter()
        .map(|node| {
            let start = node.start_position().row;
            let end = node.end_position().row;
            FunctionSpan {
                name: function_name(node, &parents, source),
                text: node_text(node, source),
                start_line: start + 1,
                lines_of_code: end - start + 1,
            }
        })
        .collect()
}

/// Score every function in one parsed file
pub fn function_metrics(file: &str, source: &str, tree: &Tree) -> Vec<ComplexityMetric> {
    extract_functions(source, tree)
        .into_iter()
        .map(|span| {
            let cyclomatic = cyclomatic_complexity(span.text);
            let cognitive = cognitive_complexity(span.text);
            let score = ComplexityScore::classify(cyclomatic, cognitive);
            if score == ComplexityScore::VeryComplex {
                debug!(
                    file,
                    function = %span.name,
                    line = span.start_line,
                    cyclomatic,
                    cognitive,
                    "very complex function"
                );
            }
            ComplexityMetric {
                file: file.to_string(),
                function: span.name,
                cyclomatic_complexity: cyclomatic,
                cognitive_complexity: cognitive,
                lines_of_code: span.lines_of_code,
                score,
            }
        })
        .collect()
}

/// Complexity metrics for every parsable component, in catalog order
pub fn analyze_complexity(
    catalog: &[Component],
    cache: &ContentCache,
    config: &AnalysisConfig,
) -> Vec<ComplexityMetric> {
    let per_component = map_in_batches(catalog, config.batch_width, |component| {
        let source = cache.get(&component.path);
        match source.tree() {
            Some(tree) => function_metrics(&component.path, source.text(), tree),
            None => {
                debug!(path = %component.path, "no syntax tree, skipping complexity");
                Vec::new()
            }
        }
    });

    let metrics: Vec<ComplexityMetric> = per_component.into_iter().flatten().collect();
    info!(functions = metrics.len(), "complexity analysis complete");
    metrics
}
