//! Near-duplicate file detection
//!
//! Full pairwise edit distance is quadratic in both file count and file
//! length, so pairs pass through a cascade of cheap filters first:
//!
//! 1. both files have at least `min_lines` lines
//! 2. the shorter file is at least `size_tolerance` of the longer one
//! 3. the additive content checksums differ by less than `hash_distance_bound`
//!
//! Only survivors get the exact normalized edit-distance similarity. A global
//! comparison cap bounds the work; hitting it returns whatever was found so
//! far. Results are therefore approximate on large catalogs.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::cache::{map_in_batches, CachedSource, ContentCache};
use crate::config::AnalysisConfig;
use crate::schema::{Component, DuplicationInstance};
use crate::utils::{line_count, preview_lines};

/// Suggestion attached to every reported pair
pub const EXTRACT_SUGGESTION: &str =
    "Extract the shared code into a reusable module to remove the duplication";

const SNIPPET_MAX_BYTES: usize = 300;

static TEST_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[/\\])(__tests__|__mocks__|tests?)[/\\]|\.(test|spec)\.[A-Za-z0-9]+$")
        .expect("valid test path regex")
});

/// Result of a duplication pass, including the early-termination signal
#[derive(Debug, Clone, Default)]
pub struct DuplicationOutcome {
    pub instances: Vec<DuplicationInstance>,
    /// Candidate pairs examined
    pub comparisons: usize,
    /// Set when the comparison cap stopped the scan
    pub truncated: bool,
    pub message: Option<String>,
}

/// True for files that follow test naming conventions
pub fn is_test_path(path: &str) -> bool {
    TEST_PATH.is_match(path)
}

/// Additive byte checksum.
///
/// Files that differ in a few characters land close together, which is what
/// the distance pre-filter relies on. Unrelated files of similar size can also
/// land close; the exact similarity check sorts those out.
pub fn content_checksum(text: &str) -> u64 {
    text.bytes().fold(0u64, |acc, b| acc.wrapping_add(u64::from(b)))
}

/// Levenshtein distance over chars, two-row dynamic programming
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// `(max_len - distance) / max_len`; identical inputs (including two empty
/// strings) are 1.0
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = edit_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

struct Candidate<'a> {
    component: &'a Component,
    source: Arc<CachedSource>,
    line_count: usize,
    checksum: u64,
}

impl Candidate<'_> {
    fn text(&self) -> &str {
        self.source.text()
    }
}

/// Cheap checks in cascade order; true when the pair deserves an exact comparison
fn passes_prefilters(a: &Candidate, b: &Candidate, config: &AnalysisConfig) -> bool {
    if a.line_count < config.min_lines || b.line_count < config.min_lines {
        return false;
    }

    let longer = a.line_count.max(b.line_count);
    if longer == 0 {
        return false;
    }
    let shorter = a.line_count.min(b.line_count);
    if (shorter as f64) / (longer as f64) < config.size_tolerance {
        return false;
    }

    a.checksum.abs_diff(b.checksum) < config.hash_distance_bound
}

/// Find near-identical file pairs in catalog order
pub fn detect_duplication(
    catalog: &[Component],
    cache: &ContentCache,
    config: &AnalysisConfig,
) -> DuplicationOutcome {
    let eligible: Vec<&Component> = catalog
        .iter()
        .filter(|c| c.lines_of_code >= config.min_lines && !is_test_path(&c.path))
        .collect();

    let candidates: Vec<Candidate> = map_in_batches(&eligible, config.batch_width, |&component| {
        let source = cache.get(&component.path);
        if !source.is_readable() {
            debug!(path = %component.path, "unreadable file dropped from duplication");
            return None;
        }
        let line_count = line_count(source.text());
        let checksum = content_checksum(source.text());
        Some(Candidate {
            component,
            source,
            line_count,
            checksum,
        })
    })
    .into_iter()
    .flatten()
    .collect();

    debug!(candidates = candidates.len(), "duplication candidates loaded");

    let mut outcome = DuplicationOutcome::default();

    'pairs: for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            if outcome.comparisons >= config.max_comparisons {
                outcome.truncated = true;
                break 'pairs;
            }
            outcome.comparisons += 1;

            if !passes_prefilters(a, b, config) {
                continue;
            }

            let score = similarity(a.text(), b.text());
            if score >= config.similarity_threshold {
                outcome.instances.push(DuplicationInstance {
                    files: [a.component.path.clone(), b.component.path.clone()],
                    lines: a.line_count.min(b.line_count),
                    similarity: score,
                    snippet: preview_lines(a.text(), config.snippet_lines, SNIPPET_MAX_BYTES),
                    suggestion: EXTRACT_SUGGESTION.to_string(),
                });
            }
        }
    }

    if outcome.truncated {
        let message = format!(
            "comparison limit of {} reached; duplication results are partial",
            config.max_comparisons
        );
        warn!(found = outcome.instances.len(), "{}", message);
        outcome.message = Some(message);
    }

    info!(
        comparisons = outcome.comparisons,
        instances = outcome.instances.len(),
        "duplication analysis complete"
    );

    outcome
}
