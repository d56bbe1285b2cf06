//! # Studyplan Core
//!
//! Adaptive study scheduling engine. Turns a set of exam topics, their
//! historical importance, and a learner's weaknesses into a day-by-day study
//! calendar, and rebalances that calendar as performance feedback arrives.
//!
//! - **Importance analysis**: normalizes historical question frequency and
//!   marks into a 0-1 relevance score per unit
//! - **Priority packing**: bucketed greedy fill of topics into days, with a
//!   hard cap on weak-area remediation per day
//! - **Spaced repetition**: fixed-interval review injection (1/3/7/14/30/60
//!   days) at half duration
//! - **Dependency sequencing**: Kahn's topological sort over prerequisites,
//!   degrading gracefully on cycles
//! - **Feedback adjustment**: bounded multiplicative duration rewrites from
//!   understanding scores, with an audit record per run
//!
//! Every operation is a synchronous, side-effect-free computation over value
//! types: the engine holds no cache, no singleton, no I/O. Concurrent runs
//! for different learners cannot interfere; serializing concurrent
//! adjustments of the *same* persisted plan belongs to the calling system.
//!
//! ## Quick Start
//!
//! ```rust
//! use studyplan_core::{BuildRequest, ScheduleAdjuster, ScheduleBuilder, StudyFeedback};
//! use chrono::NaiveDate;
//!
//! let request = BuildRequest {
//!     subject_id: "biology-12".to_string(),
//!     syllabus: Default::default(), // empty syllabus falls back to synthetic topics
//!     history: vec![],
//!     performance: Default::default(),
//!     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//!     exam_date: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
//! };
//!
//! let plan = ScheduleBuilder::new().build(&request)?;
//! assert_eq!(plan.total_days as usize, plan.daily_schedule.len());
//!
//! let outcome = ScheduleAdjuster::new().adjust_now(&plan, &StudyFeedback::default());
//! assert_eq!(outcome.plan.total_days, plan.total_days);
//! # Ok::<(), studyplan_core::ScheduleError>(())
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod adjust;
pub mod error;
pub mod importance;
pub mod plan;
pub mod review;
pub mod schedule;
pub mod sequence;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Plan types
pub use plan::{
    BuildRequest, DayPlan, PerformanceSnapshot, QuestionRecord, ScheduledTopic, StudyFeedback,
    StudyPlan, Syllabus, SyllabusUnit, Topic,
};

// Engine components
pub use adjust::{AdjusterConfig, AdjustmentOutcome, AdjustmentReasons, ScheduleAdjuster};
pub use importance::{ImportanceAnalyzer, ImportanceWeights};
pub use review::{ReviewConfig, SpacedRepetitionScheduler};
pub use schedule::{
    DurationConfig, DurationEstimator, PriorityTopicSelector, ScheduleBuilder, Selection,
    SelectorConfig,
};
pub use sequence::{SequenceResult, TopicSequencer};

// Errors
pub use error::{Result, ScheduleError};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        BuildRequest, DayPlan, PerformanceSnapshot, QuestionRecord, Result, ScheduleAdjuster,
        ScheduleBuilder, ScheduleError, ScheduledTopic, StudyFeedback, StudyPlan, Syllabus,
        SyllabusUnit, Topic, TopicSequencer,
    };
}
