//! Spaced Repetition Review Injection
//!
//! Re-surfaces previously studied material at fixed, widening intervals.
//! When building day `d`, every interval `k` whose source day `d - k` exists
//! in the schedule so far contributes that day's fresh topics as half-length
//! review entries.
//!
//! Reviews are intentionally not deduplicated: a topic whose source day is
//! hit by two intervals at once appears twice, as extra reinforcement. Review
//! entries themselves are never re-reviewed, so review chains stop at one
//! level.

use crate::plan::{DayPlan, ScheduledTopic};

/// Review injection parameters
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Days back from the current day to look for review material
    pub intervals: Vec<u32>,
    /// Factor applied to the source duration for a review sitting
    pub review_duration_factor: f64,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            intervals: vec![1, 3, 7, 14, 30, 60],
            review_duration_factor: 0.5,
        }
    }
}

/// Fixed-interval review scheduler
pub struct SpacedRepetitionScheduler {
    config: ReviewConfig,
}

impl Default for SpacedRepetitionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SpacedRepetitionScheduler {
    /// Create a scheduler with the standard 1/3/7/14/30/60 day intervals
    pub fn new() -> Self {
        Self {
            config: ReviewConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: ReviewConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Review entries due on `current_day`, drawn from the schedule built so
    /// far (days `1..current_day`)
    pub fn reviews_for_day(
        &self,
        previous_schedule: &[DayPlan],
        current_day: u32,
    ) -> Vec<ScheduledTopic> {
        let mut reviews = Vec::new();
        for &interval in &self.config.intervals {
            let Some(review_day) = current_day.checked_sub(interval) else {
                continue;
            };
            if review_day < 1 || review_day as usize > previous_schedule.len() {
                continue;
            }
            let source = &previous_schedule[review_day as usize - 1];
            for topic in source.topics.iter().filter(|t| !t.is_review) {
                let mut review = topic.clone();
                review.is_review = true;
                review.study_duration_hours *= self.config.review_duration_factor;
                reviews.push(review);
            }
        }
        reviews
    }
}

// ============================================================================
// TESTS
// ============================================================================
