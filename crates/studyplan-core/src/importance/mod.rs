//! Topic Importance Analysis
//!
//! Normalizes historical question data into a 0-1 importance score per unit.
//! Appearance frequency is weighted above raw mark allocation: a unit that
//! shows up every year matters more than one that carried a single heavy
//! question once.
//!
//! Pure and idempotent: the same history always yields the same mapping.

use std::collections::HashMap;

use crate::plan::QuestionRecord;

// ============================================================================
// CONFIG
// ============================================================================

/// Weighting between the two normalized importance signals
///
/// Weights should sum to 1.0 to keep scores in [0, 1].
#[derive(Debug, Clone)]
pub struct ImportanceWeights {
    /// Weight of normalized question frequency
    pub frequency_weight: f64,
    /// Weight of normalized total marks
    pub marks_weight: f64,
}

impl Default for ImportanceWeights {
    fn default() -> Self {
        Self {
            frequency_weight: 0.6,
            marks_weight: 0.4,
        }
    }
}

// ============================================================================
// ANALYZER
// ============================================================================

/// Importance analyzer over historical question records
pub struct ImportanceAnalyzer {
    weights: ImportanceWeights,
}

impl Default for ImportanceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportanceAnalyzer {
    /// Create an analyzer with the default 0.6/0.4 weighting
    pub fn new() -> Self {
        Self {
            weights: ImportanceWeights::default(),
        }
    }

    /// Create with custom weights
    pub fn with_weights(weights: ImportanceWeights) -> Self {
        Self { weights }
    }

    /// Get current weights
    pub fn weights(&self) -> &ImportanceWeights {
        &self.weights
    }

    /// Score each unit seen in the history
    ///
    /// Per unit: accumulate question count and total marks, normalize both by
    /// their maxima across units, then blend with the configured weights. A
    /// zero maximum normalizes to 0.0 rather than dividing by zero. Empty
    /// history yields an empty mapping.
    pub fn analyze(&self, history: &[QuestionRecord]) -> HashMap<String, f64> {
        let mut frequency: HashMap<String, u32> = HashMap::new();
        let mut total_marks: HashMap<String, f64> = HashMap::new();

        for record in history {
            *frequency.entry(record.unit_name.clone()).or_insert(0) += 1;
            *total_marks.entry(record.unit_name.clone()).or_insert(0.0) += record.marks;
        }

        let max_frequency = frequency.values().copied().max().unwrap_or(0);
        let max_marks = total_marks.values().copied().fold(0.0_f64, f64::max);

        frequency
            .iter()
            .map(|(unit, &count)| {
                let norm_frequency = if max_frequency > 0 {
                    f64::from(count) / f64::from(max_frequency)
                } else {
                    0.0
                };
                let marks = total_marks.get(unit).copied().unwrap_or(0.0);
                let norm_marks = if max_marks > 0.0 { marks / max_marks } else { 0.0 };

                let score = self.weights.frequency_weight * norm_frequency
                    + self.weights.marks_weight * norm_marks;
                (unit.clone(), score)
            })
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
