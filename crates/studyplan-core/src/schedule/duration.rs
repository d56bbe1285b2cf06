//! Study Duration Estimation
//!
//! Recommends hours for one topic sitting from the weakness flag and the
//! importance score. Weakness compounds with importance, then the result is
//! clamped to a sane per-sitting range.

/// Duration estimation parameters
#[derive(Debug, Clone)]
pub struct DurationConfig {
    /// Starting point for every topic, in hours
    pub base_hours: f64,
    /// Multiplier for weak-area topics
    pub weak_multiplier: f64,
    /// Multiplier when importance exceeds `high_importance`
    pub high_importance_multiplier: f64,
    /// Multiplier when importance exceeds `medium_importance` only
    pub medium_importance_multiplier: f64,
    /// Importance above this gets the high multiplier
    pub high_importance: f64,
    /// Importance above this (and at or below high) gets the medium multiplier
    pub medium_importance: f64,
    /// Floor for a single sitting, in hours
    pub min_hours: f64,
    /// Ceiling for a single sitting, in hours
    pub max_hours: f64,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            base_hours: 1.0,
            weak_multiplier: 1.5,
            high_importance_multiplier: 1.3,
            medium_importance_multiplier: 1.1,
            high_importance: 0.8,
            medium_importance: 0.5,
            min_hours: 0.5,
            max_hours: 4.0,
        }
    }
}

/// Per-topic study duration estimator
pub struct DurationEstimator {
    config: DurationConfig,
}

impl Default for DurationEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl DurationEstimator {
    /// Create an estimator with the default parameters
    pub fn new() -> Self {
        Self {
            config: DurationConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: DurationConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &DurationConfig {
        &self.config
    }

    /// Recommended hours for one topic sitting, clamped to
    /// `[min_hours, max_hours]`
    pub fn estimate(&self, is_weak_area: bool, importance: f64) -> f64 {
        let mut hours = self.config.base_hours;
        if is_weak_area {
            hours *= self.config.weak_multiplier;
        }
        if importance > self.config.high_importance {
            hours *= self.config.high_importance_multiplier;
        } else if importance > self.config.medium_importance {
            hours *= self.config.medium_importance_multiplier;
        }
        hours.clamp(self.config.min_hours, self.config.max_hours)
    }
}

// ============================================================================
// TESTS
// ============================================================================
