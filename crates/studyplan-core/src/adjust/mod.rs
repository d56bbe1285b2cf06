//! Feedback-Driven Schedule Adjustment
//!
//! Rewrites the durations of an existing plan from understanding feedback:
//! topics the learner struggles with get more time and an attention flag,
//! topics already mastered get less, and the middle band is left alone. The
//! input plan is never mutated; the caller receives a fresh copy plus an
//! audit record explaining what moved and why.
//!
//! Serializing "adjust, then persist" against the same stored plan is the
//! caller's concern; this engine only computes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plan::{StudyFeedback, StudyPlan};

// ============================================================================
// CONFIG
// ============================================================================

/// Thresholds and multipliers for the adjustment pass
#[derive(Debug, Clone)]
pub struct AdjusterConfig {
    /// Understanding strictly below this marks a topic as struggling
    pub struggling_below: f64,
    /// Understanding strictly above this marks a topic as efficient
    pub efficient_above: f64,
    /// Duration multiplier for struggling topics
    pub struggling_multiplier: f64,
    /// Duration multiplier for efficient topics
    pub efficient_multiplier: f64,
}

impl Default for AdjusterConfig {
    fn default() -> Self {
        Self {
            struggling_below: 0.6,
            efficient_above: 0.8,
            struggling_multiplier: 1.3,
            efficient_multiplier: 0.8,
        }
    }
}

// ============================================================================
// OUTPUT TYPES
// ============================================================================

/// Audit record for one adjustment run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentReasons {
    /// Id for this adjustment run, derived from the subject, timestamp, and
    /// classification so identical runs carry identical records
    pub id: Uuid,
    /// Topics that received more time, sorted by name
    pub struggling_topics: Vec<String>,
    /// Topics that received less time, sorted by name
    pub efficient_topics: Vec<String>,
    /// Mean understanding across all scored topics (0.0 when no scores)
    pub average_understanding: f64,
    /// When the adjustment was computed
    pub adjusted_at: DateTime<Utc>,
}

/// Result of an adjustment run: the rewritten plan plus its audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentOutcome {
    /// Human-readable summary for the caller's messaging layer
    pub message: String,
    /// Rewritten copy of the plan
    pub plan: StudyPlan,
    /// Why durations moved
    pub adjustment_reasons: AdjustmentReasons,
}

// ============================================================================
// ADJUSTER
// ============================================================================

/// Feedback-driven plan adjuster
pub struct ScheduleAdjuster {
    config: AdjusterConfig,
}

impl Default for ScheduleAdjuster {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleAdjuster {
    /// Create an adjuster with the default thresholds
    pub fn new() -> Self {
        Self {
            config: AdjusterConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: AdjusterConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &AdjusterConfig {
        &self.config
    }

    /// Rebalance a plan from feedback, stamping the audit record with the
    /// supplied timestamp
    ///
    /// Fully deterministic for fixed inputs: repeated calls yield
    /// byte-identical output, audit record included.
    pub fn adjust(
        &self,
        plan: &StudyPlan,
        feedback: &StudyFeedback,
        adjusted_at: DateTime<Utc>,
    ) -> AdjustmentOutcome {
        let mut struggling: Vec<String> = feedback
            .understanding_scores
            .iter()
            .filter(|&(_, &score)| score < self.config.struggling_below)
            .map(|(name, _)| name.clone())
            .collect();
        struggling.sort();

        let mut efficient: Vec<String> = feedback
            .understanding_scores
            .iter()
            .filter(|&(_, &score)| score > self.config.efficient_above)
            .map(|(name, _)| name.clone())
            .collect();
        efficient.sort();

        let mut adjusted = plan.clone();
        for day in &mut adjusted.daily_schedule {
            for topic in &mut day.topics {
                if struggling.binary_search(&topic.name).is_ok() {
                    topic.study_duration_hours *= self.config.struggling_multiplier;
                    topic.needs_extra_attention = true;
                } else if efficient.binary_search(&topic.name).is_ok() {
                    topic.study_duration_hours *= self.config.efficient_multiplier;
                }
            }
            day.refresh_recommended_hours();
        }

        let average_understanding = if feedback.understanding_scores.is_empty() {
            0.0
        } else {
            feedback.understanding_scores.values().sum::<f64>()
                / feedback.understanding_scores.len() as f64
        };

        let message = format!(
            "Schedule rebalanced: {} topic(s) need extra attention, {} topic(s) trimmed",
            struggling.len(),
            efficient.len()
        );

        let id = audit_id(&plan.subject_id, adjusted_at, &struggling, &efficient);

        AdjustmentOutcome {
            message,
            plan: adjusted,
            adjustment_reasons: AdjustmentReasons {
                id,
                struggling_topics: struggling,
                efficient_topics: efficient,
                average_understanding,
                adjusted_at,
            },
        }
    }

    /// Convenience wrapper stamping the audit record with the current time
    pub fn adjust_now(&self, plan: &StudyPlan, feedback: &StudyFeedback) -> AdjustmentOutcome {
        self.adjust(plan, feedback, Utc::now())
    }
}

/// Name-based (v5) audit id over the run's identifying inputs, so the same
/// adjustment always carries the same id
fn audit_id(
    subject_id: &str,
    adjusted_at: DateTime<Utc>,
    struggling: &[String],
    efficient: &[String],
) -> Uuid {
    let mut name = format!("{subject_id}|{}", adjusted_at.to_rfc3339());
    for topic in struggling.iter().chain(efficient) {
        name.push('|');
        name.push_str(topic);
    }
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}

// ============================================================================
// TESTS
// ============================================================================
