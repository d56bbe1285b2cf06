//! Study Plan Types - The value model of the scheduling engine
//!
//! Everything here is a plain value type: the engine receives inputs by
//! reference and returns freshly constructed outputs, so two scheduling runs
//! never share state. Field names are part of the persistence contract and
//! serialize as-is (snake_case), with dates in `YYYY-MM-DD` form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// SYLLABUS AND HISTORY INPUTS
// ============================================================================

/// One unit of a subject syllabus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyllabusUnit {
    /// Unit display name (e.g. "Unit 3: Thermodynamics")
    pub name: String,
    /// Topic display names within the unit
    pub topics: Vec<String>,
}

/// A subject syllabus as supplied by the content collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Syllabus {
    /// Units in syllabus order
    #[serde(default)]
    pub units: Vec<SyllabusUnit>,
}

impl Syllabus {
    /// Total number of topics across all units
    pub fn topic_count(&self) -> usize {
        self.units.iter().map(|u| u.topics.len()).sum()
    }
}

/// One historical exam question, reduced to the fields the importance
/// analyzer consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Unit the question was asked under
    pub unit_name: String,
    /// Marks allocated to the question
    pub marks: f64,
}

/// Learner weak/strong areas from the performance-tracking collaborator
///
/// Membership is checked by exact string equality against topic names, which
/// matches how the tracking side records them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    /// Topics the learner underperforms in
    #[serde(default)]
    pub weak_topics: Vec<String>,
    /// Topics the learner has already mastered
    #[serde(default)]
    pub strong_topics: Vec<String>,
}

/// Post-study feedback used to rebalance an existing plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyFeedback {
    /// Per-topic understanding in [0, 1]
    #[serde(default)]
    pub understanding_scores: HashMap<String, f64>,
    /// Per-topic hours actually spent. Not used by the adjustment math yet;
    /// retained for telemetry and future pacing heuristics.
    #[serde(default)]
    pub time_taken: HashMap<String, f64>,
}

// ============================================================================
// TOPICS
// ============================================================================

/// A topic ready for scheduling
///
/// Importance and the weak/strong flags are supplied by external analysis and
/// treated as immutable for the duration of one scheduling run. Identity is
/// the `name` field, unique within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Topic display name (identity within a scheduling run)
    pub name: String,
    /// Owning syllabus unit
    pub unit: String,
    /// Exam relevance in [0, 1]
    pub importance: f64,
    /// Learner underperforms in this topic
    #[serde(default)]
    pub is_weak_area: bool,
    /// Learner has already mastered this topic
    #[serde(default)]
    pub is_strong_area: bool,
}

/// A topic placed on a concrete day, annotated with a duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTopic {
    /// Topic display name
    pub name: String,
    /// Owning syllabus unit
    pub unit: String,
    /// Exam relevance in [0, 1]
    pub importance: f64,
    /// Learner underperforms in this topic
    #[serde(default)]
    pub is_weak_area: bool,
    /// Learner has already mastered this topic
    #[serde(default)]
    pub is_strong_area: bool,
    /// Recommended study time for this sitting, in hours.
    /// Fresh topics land in [0.5, 4.0]; review copies are halved.
    pub study_duration_hours: f64,
    /// This entry is a spaced-repetition review of earlier material
    #[serde(default)]
    pub is_review: bool,
    /// Flagged by the adjuster when feedback shows the learner struggling
    #[serde(default)]
    pub needs_extra_attention: bool,
}

impl ScheduledTopic {
    /// Place a topic with the given duration; review and attention flags
    /// start cleared
    pub fn from_topic(topic: &Topic, study_duration_hours: f64) -> Self {
        Self {
            name: topic.name.clone(),
            unit: topic.unit.clone(),
            importance: topic.importance,
            is_weak_area: topic.is_weak_area,
            is_strong_area: topic.is_strong_area,
            study_duration_hours,
            is_review: false,
            needs_extra_attention: false,
        }
    }
}

// ============================================================================
// DAY PLANS
// ============================================================================

/// One calendar day of the schedule
///
/// The atomic unit of the plan: the day's assigned topics plus three fields
/// derived from them. Construct via [`DayPlan::new`] so the derived fields
/// always agree with `topics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day index, strictly increasing across the plan
    pub day: u32,
    /// Calendar date of this day
    pub date: NaiveDate,
    /// Assigned topics, fresh topics before review entries
    pub topics: Vec<ScheduledTopic>,
    /// Sum of the day's topic durations. Unbounded by design: weak-area days
    /// may exceed a nominal daily budget.
    pub recommended_hours: f64,
    /// Names of the day's weak-area topics
    pub focus_topics: Vec<String>,
    /// The day carries at least one spaced-repetition review
    pub spaced_repetition_session: bool,
}

impl DayPlan {
    /// Assemble a day, deriving the summary fields from its topics
    pub fn new(day: u32, date: NaiveDate, topics: Vec<ScheduledTopic>) -> Self {
        let recommended_hours = topics.iter().map(|t| t.study_duration_hours).sum();
        let focus_topics = topics
            .iter()
            .filter(|t| t.is_weak_area)
            .map(|t| t.name.clone())
            .collect();
        let spaced_repetition_session = topics.iter().any(|t| t.is_review);
        Self {
            day,
            date,
            topics,
            recommended_hours,
            focus_topics,
            spaced_repetition_session,
        }
    }

    /// Recompute `recommended_hours` after durations change in place
    pub fn refresh_recommended_hours(&mut self) {
        self.recommended_hours = self.topics.iter().map(|t| t.study_duration_hours).sum();
    }
}

// ============================================================================
// STUDY PLAN
// ============================================================================

/// A complete day-by-day study calendar for one subject
///
/// Invariants maintained by the builder:
/// - `total_days == daily_schedule.len()`
/// - `daily_schedule[i].day == i + 1`
/// - dates run contiguously from `start_date` to `exam_date` inclusive
///
/// Progress tracking (days completed, on-track state) is owned by the
/// persistence layer; this engine neither stores nor updates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Subject this plan covers
    pub subject_id: String,
    /// First study day
    pub start_date: NaiveDate,
    /// Exam day (last study day)
    pub exam_date: NaiveDate,
    /// Number of calendar days, inclusive of both ends
    pub total_days: u32,
    /// One entry per calendar day
    pub daily_schedule: Vec<DayPlan>,
}

impl StudyPlan {
    /// Sum of recommended hours across the whole plan
    pub fn total_recommended_hours(&self) -> f64 {
        self.daily_schedule.iter().map(|d| d.recommended_hours).sum()
    }
}

// ============================================================================
// BUILD REQUEST
// ============================================================================

/// Everything the builder needs for one scheduling run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRequest {
    /// Subject the plan is for
    pub subject_id: String,
    /// Syllabus to flatten into topics. An empty syllabus triggers the
    /// synthetic-topic fallback rather than an error.
    #[serde(default)]
    pub syllabus: Syllabus,
    /// Historical questions feeding the importance analyzer
    #[serde(default)]
    pub history: Vec<QuestionRecord>,
    /// Learner weak/strong areas
    #[serde(default)]
    pub performance: PerformanceSnapshot,
    /// First study day
    pub start_date: NaiveDate,
    /// Exam day
    pub exam_date: NaiveDate,
}

// ============================================================================
// TESTS
// ============================================================================
