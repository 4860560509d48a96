//! Aggregate 0-100 health score
//!
//! A linear penalty model: start at 100, subtract a fixed amount per finding,
//! clamp. Deliberately simple so the weights are easy to read and tune.

use crate::schema::{
    CircularDependency, ComplexityMetric, ComplexityScore, CouplingMetric, CouplingScore,
    DuplicationInstance,
};

pub const HIGH_COUPLING_PENALTY: i64 = 3;
pub const DUPLICATION_PENALTY: i64 = 5;
pub const VERY_COMPLEX_PENALTY: i64 = 4;
pub const COMPLEX_PENALTY: i64 = 2;
pub const CYCLE_PENALTY: i64 = 10;

/// Findings counted by the scorer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PenaltyBreakdown {
    pub high_coupling: usize,
    pub duplications: usize,
    pub very_complex: usize,
    pub complex: usize,
    pub cycles: usize,
}

impl PenaltyBreakdown {
    pub fn from_findings(
        coupling: &[CouplingMetric],
        duplication: &[DuplicationInstance],
        complexity: &[ComplexityMetric],
        cycles: &[CircularDependency],
    ) -> Self {
        Self {
            high_coupling: coupling
                .iter()
                .filter(|m| m.score == CouplingScore::High)
                .count(),
            duplications: duplication.len(),
            very_complex: complexity
                .iter()
                .filter(|m| m.score == ComplexityScore::VeryComplex)
                .count(),
            complex: complexity
                .iter()
                .filter(|m| m.score == ComplexityScore::Complex)
                .count(),
            cycles: cycles.len(),
        }
    }

    /// Total points deducted before clamping
    pub fn total_penalty(&self) -> i64 {
        self.high_coupling as i64 * HIGH_COUPLING_PENALTY
            + self.duplications as i64 * DUPLICATION_PENALTY
            + self.very_complex as i64 * VERY_COMPLEX_PENALTY
            + self.complex as i64 * COMPLEX_PENALTY
            + self.cycles as i64 * CYCLE_PENALTY
    }

    pub fn score(&self) -> u8 {
        (100 - self.total_penalty()).clamp(0, 100) as u8
    }
}

/// Combine the four engines' findings into one score in [0, 100]
pub fn calculate_health_score(
    coupling: &[CouplingMetric],
    duplication: &[DuplicationInstance],
    complexity: &[ComplexityMetric],
    cycles: &[CircularDependency],
) -> u8 {
    PenaltyBreakdown::from_findings(coupling, duplication, complexity, cycles).score()
}
