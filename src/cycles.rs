//! Circular dependency detection over the component import graph
//!
//! Nodes are component paths; an edge C -> D exists when one of C's relative
//! dependency specifiers resolves to D. A depth-first search is started from
//! every component independently, so the same cycle can be found from each of
//! its members; cycles are de-duplicated by their sorted member set.

use std::collections::HashSet;

use tracing::info;

use crate::catalog::is_relative_specifier;
use crate::lang::Lang;
use crate::schema::{CircularDependency, Component, Severity};

/// Adjacency lists indexed by catalog position
pub type DependencyGraph = Vec<Vec<usize>>;

/// Cycles with at most this many members are errors
const ERROR_CYCLE_LEN: usize = 3;

fn strip_extension(path: &str) -> &str {
    for ext in Lang::all_extensions() {
        if let Some(stem) = path.strip_suffix(*ext).and_then(|s| s.strip_suffix('.')) {
            return stem;
        }
    }
    path
}

/// Join a relative specifier onto the importing file's directory, folding `.` and `..`
fn join_relative(from_path: &str, specifier: &str) -> String {
    let mut parts: Vec<&str> = from_path.split('/').collect();
    parts.pop();

    for segment in specifier.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    parts.join("/")
}

/// Strip leading `./` and `../` segments for the suffix fallback
fn bare_specifier(specifier: &str) -> &str {
    let mut rest = specifier;
    loop {
        if let Some(s) = rest.strip_prefix("./") {
            rest = s;
        } else if let Some(s) = rest.strip_prefix("../") {
            rest = s;
        } else {
            return rest;
        }
    }
}

fn stem_matches(stem: &str, target: &str) -> bool {
    stem == target || stem.strip_suffix("/index") == Some(target)
}

/// Resolve a dependency specifier of `catalog[from]` to another component.
///
/// Tries the exact path relative to the importing file first, then falls back
/// to the first component (in catalog order) whose path ends with the bare
/// specifier. A component never resolves to itself.
pub fn resolve_dependency(catalog: &[Component], from: usize, specifier: &str) -> Option<usize> {
    let from_path = &catalog[from].path;
    let joined = join_relative(from_path, specifier);
    let joined = strip_extension(&joined);

    let others = || catalog.iter().enumerate().filter(move |(i, _)| *i != from);

    if let Some((index, _)) =
        others().find(|(_, c)| stem_matches(strip_extension(&c.path), joined))
    {
        return Some(index);
    }

    let bare = strip_extension(bare_specifier(specifier));
    if bare.is_empty() || bare == "." || bare == ".." {
        return None;
    }
    let suffix = format!("/{}", bare);

    others()
        .find(|(_, c)| {
            let stem = strip_extension(&c.path);
            stem == bare
                || stem.ends_with(&suffix)
                || stem
                    .strip_suffix("/index")
                    .map(|dir| dir == bare || dir.ends_with(&suffix))
                    .unwrap_or(false)
        })
        .map(|(index, _)| index)
}

/// Build the component dependency graph; duplicate edges are collapsed
pub fn build_dependency_graph(catalog: &[Component]) -> DependencyGraph {
    catalog
        .iter()
        .enumerate()
        .map(|(from, component)| {
            let mut targets: Vec<usize> = Vec::new();
            for dep in component.dependencies.iter().filter(|d| is_relative_specifier(d)) {
                if let Some(to) = resolve_dependency(catalog, from, dep) {
                    if !targets.contains(&to) {
                        targets.push(to);
                    }
                }
            }
            targets
        })
        .collect()
}

pub fn severity_for(cycle_len: usize) -> Severity {
    if cycle_len <= ERROR_CYCLE_LEN {
        Severity::Error
    } else {
        Severity::Warning
    }
}

/// Find every distinct cycle, reported in discovery order
pub fn detect_cycles(catalog: &[Component]) -> Vec<CircularDependency> {
    let graph = build_dependency_graph(catalog);
    let mut seen: HashSet<Vec<&str>> = HashSet::new();
    let mut cycles = Vec::new();

    fn dfs(
        node: usize,
        graph: &DependencyGraph,
        visited: &mut [bool],
        on_path: &mut [bool],
        path: &mut Vec<usize>,
        found: &mut Vec<Vec<usize>>,
    ) {
        visited[node] = true;
        on_path[node] = true;
        path.push(node);

        for &next in &graph[node] {
            if on_path[next] {
                if let Some(start) = path.iter().position(|&n| n == next) {
                    found.push(path[start..].to_vec());
                }
            } else if !visited[next] {
                dfs(next, graph, visited, on_path, path, found);
            }
        }

        path.pop();
        on_path[node] = false;
    }

    for start in 0..catalog.len() {
        let mut visited = vec![false; catalog.len()];
        let mut on_path = vec![false; catalog.len()];
        let mut path = Vec::new();
        let mut found = Vec::new();
        dfs(start, &graph, &mut visited, &mut on_path, &mut path, &mut found);

        for members in found {
            let mut key: Vec<&str> = members.iter().map(|&i| catalog[i].path.as_str()).collect();
            key.sort_unstable();
            if seen.insert(key) {
                cycles.push(CircularDependency {
                    severity: severity_for(members.len()),
                    cycle: members.iter().map(|&i| catalog[i].path.clone()).collect(),
                });
            }
        }
    }

    info!(cycles = cycles.len(), "cycle detection complete");
    cycles
}
