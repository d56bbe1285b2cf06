//! Priority Topic Selection
//!
//! Picks which topics enter a given day under a capacity constraint, as a
//! bucketed greedy fill in strict priority order:
//!
//! 1. Weak-area topics, hard-capped per day so a single day is never
//!    saturated by remediation at the expense of breadth
//! 2. High-importance non-weak topics
//! 3. Medium-importance non-weak topics
//! 4. Everything else
//!
//! Buckets are computed as explicit index sets over the remaining pool, and
//! selection within a bucket preserves the pool's relative order. Ties are
//! therefore broken by input order, which the builder has already sorted by
//! its weak-boosted importance key.

use crate::plan::Topic;

/// Selection parameters
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Hard cap on newly introduced weak-area topics per day
    pub max_weak_per_day: usize,
    /// Importance strictly above this is the high bucket
    pub high_importance: f64,
    /// Importance at or above this (and at or below high) is the medium bucket
    pub medium_importance: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_weak_per_day: 2,
            high_importance: 0.7,
            medium_importance: 0.4,
        }
    }
}

/// A day's worth of picks from the remaining pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Index positions into the pool passed to [`PriorityTopicSelector::select`],
    /// in the order the topics should appear on the day
    pub indices: Vec<usize>,
    /// Number of topics consumed from the pool (equals `indices.len()`;
    /// no topic is ever selected twice)
    pub consumed: usize,
}

/// Capacity-constrained topic selector
pub struct PriorityTopicSelector {
    config: SelectorConfig,
}

impl Default for PriorityTopicSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityTopicSelector {
    /// Create a selector with the default caps and thresholds
    pub fn new() -> Self {
        Self {
            config: SelectorConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Pick up to `capacity` topics from `remaining`
    ///
    /// Returns index positions into `remaining`. The weak-area bucket is
    /// capped at `max_weak_per_day` regardless of spare capacity.
    pub fn select(&self, remaining: &[Topic], capacity: usize) -> Selection {
        let mut picked: Vec<usize> = Vec::with_capacity(capacity.min(remaining.len()));
        if capacity == 0 || remaining.is_empty() {
            return Selection {
                indices: picked,
                consumed: 0,
            };
        }

        let weak: Vec<usize> = (0..remaining.len())
            .filter(|&i| remaining[i].is_weak_area)
            .collect();
        let high: Vec<usize> = (0..remaining.len())
            .filter(|&i| {
                !remaining[i].is_weak_area && remaining[i].importance > self.config.high_importance
            })
            .collect();
        let medium: Vec<usize> = (0..remaining.len())
            .filter(|&i| {
                !remaining[i].is_weak_area
                    && remaining[i].importance >= self.config.medium_importance
                    && remaining[i].importance <= self.config.high_importance
            })
            .collect();
        let rest: Vec<usize> = (0..remaining.len())
            .filter(|&i| {
                !remaining[i].is_weak_area && remaining[i].importance < self.config.medium_importance
            })
            .collect();

        let weak_quota = self.config.max_weak_per_day.min(capacity);
        picked.extend(weak.into_iter().take(weak_quota));

        for bucket in [high, medium, rest] {
            if picked.len() >= capacity {
                break;
            }
            picked.extend(bucket.into_iter().take(capacity - picked.len()));
        }

        let consumed = picked.len();
        Selection {
            indices: picked,
            consumed,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
