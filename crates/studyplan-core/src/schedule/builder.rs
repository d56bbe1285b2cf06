//! Schedule Construction
//!
//! Turns a syllabus, question history, and learner performance snapshot into
//! a complete day-by-day [`StudyPlan`]:
//!
//! 1. Flatten the syllabus into topics, scored by the importance analyzer and
//!    flagged from the learner's weak/strong lists
//! 2. Sort by a single weak-boosted importance key so weak areas surface
//!    early without a separate pass
//! 3. Walk the calendar, each day drawing fresh topics through the priority
//!    selector, annotating durations, and injecting spaced-repetition reviews
//!
//! Construction never returns an empty plan: an empty syllabus is replaced by
//! a synthetic fallback pool, and days after the pool runs dry still carry
//! review sessions. The only failure mode is an inverted date range.

use chrono::Duration;

use crate::error::{Result, ScheduleError};
use crate::importance::ImportanceAnalyzer;
use crate::plan::{BuildRequest, DayPlan, ScheduledTopic, StudyPlan, Topic};
use crate::review::SpacedRepetitionScheduler;
use crate::schedule::{DurationEstimator, PriorityTopicSelector};

/// Weak-area boost applied to the pre-sort key
const WEAK_AREA_SORT_BOOST: f64 = 1.5;

/// Importance assigned when a unit has no question history
const DEFAULT_IMPORTANCE: f64 = 0.5;

/// Synthetic fallback pool shape: `FALLBACK_UNITS * FALLBACK_TOPICS_PER_UNIT`
/// topics replace an empty syllabus
const FALLBACK_UNITS: usize = 3;
const FALLBACK_TOPICS_PER_UNIT: usize = 4;

/// Day-by-day study plan builder
pub struct ScheduleBuilder {
    analyzer: ImportanceAnalyzer,
    selector: PriorityTopicSelector,
    estimator: DurationEstimator,
    reviewer: SpacedRepetitionScheduler,
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleBuilder {
    /// Create a builder with default components
    pub fn new() -> Self {
        Self {
            analyzer: ImportanceAnalyzer::new(),
            selector: PriorityTopicSelector::new(),
            estimator: DurationEstimator::new(),
            reviewer: SpacedRepetitionScheduler::new(),
        }
    }

    /// Create a builder from explicitly configured components
    pub fn with_components(
        analyzer: ImportanceAnalyzer,
        selector: PriorityTopicSelector,
        estimator: DurationEstimator,
        reviewer: SpacedRepetitionScheduler,
    ) -> Self {
        Self {
            analyzer,
            selector,
            estimator,
            reviewer,
        }
    }

    /// Build a complete study plan for the request's date window
    ///
    /// Fails only when `start_date > exam_date`. Both endpoint days are
    /// study days, so a same-day window yields a one-day plan.
    pub fn build(&self, request: &BuildRequest) -> Result<StudyPlan> {
        if request.start_date > request.exam_date {
            return Err(ScheduleError::InvalidDateRange {
                start_date: request.start_date,
                exam_date: request.exam_date,
            });
        }
        let total_days = (request.exam_date - request.start_date).num_days() as u32 + 1;

        let mut pool = self.assemble_topics(request);
        // One composite descending key: weak areas surface earlier without
        // disturbing the importance order among equals.
        pool.sort_by(|a, b| sort_key(b).total_cmp(&sort_key(a)));

        let topics_per_day = (pool.len() / total_days as usize).max(1);

        let mut daily_schedule: Vec<DayPlan> = Vec::with_capacity(total_days as usize);
        let mut current_date = request.start_date;

        for day in 1..=total_days {
            let selection = self.selector.select(&pool, topics_per_day);
            let mut day_topics: Vec<ScheduledTopic> = selection
                .indices
                .iter()
                .map(|&i| {
                    let topic = &pool[i];
                    let hours = self.estimator.estimate(topic.is_weak_area, topic.importance);
                    ScheduledTopic::from_topic(topic, hours)
                })
                .collect();

            // Consume the picks so no topic is introduced twice. Removal runs
            // highest-index first to keep the remaining positions valid.
            let mut picked = selection.indices;
            picked.sort_unstable_by(|a, b| b.cmp(a));
            for index in picked {
                pool.remove(index);
            }

            if day > 1 {
                day_topics.extend(self.reviewer.reviews_for_day(&daily_schedule, day));
            }

            daily_schedule.push(DayPlan::new(day, current_date, day_topics));
            current_date += Duration::days(1);
        }

        Ok(StudyPlan {
            subject_id: request.subject_id.clone(),
            start_date: request.start_date,
            exam_date: request.exam_date,
            total_days,
            daily_schedule,
        })
    }

    /// Flatten the syllabus into scored, flagged topics
    ///
    /// Importance resolves topic name first, then the owning unit, then the
    /// neutral default. Weak/strong flags are exact string membership against
    /// the learner's lists.
    fn assemble_topics(&self, request: &BuildRequest) -> Vec<Topic> {
        let importance = self.analyzer.analyze(&request.history);

        let mut topics: Vec<Topic> = Vec::with_capacity(request.syllabus.topic_count());
        for unit in &request.syllabus.units {
            for name in &unit.topics {
                let score = importance
                    .get(name)
                    .or_else(|| importance.get(&unit.name))
                    .copied()
                    .unwrap_or(DEFAULT_IMPORTANCE);
                topics.push(Topic {
                    name: name.clone(),
                    unit: unit.name.clone(),
                    importance: score,
                    is_weak_area: request.performance.weak_topics.contains(name),
                    is_strong_area: request.performance.strong_topics.contains(name),
                });
            }
        }

        if topics.is_empty() {
            tracing::info!(
                subject_id = %request.subject_id,
                "Empty syllabus; substituting synthetic fallback topics"
            );
            topics = fallback_topics();
        }
        topics
    }
}

fn sort_key(topic: &Topic) -> f64 {
    if topic.is_weak_area {
        topic.importance * WEAK_AREA_SORT_BOOST
    } else {
        topic.importance
    }
}

/// Deterministic stand-in pool so the schedule is never empty
fn fallback_topics() -> Vec<Topic> {
    (0..FALLBACK_UNITS * FALLBACK_TOPICS_PER_UNIT)
        .map(|i| Topic {
            name: format!("Topic {}", i + 1),
            unit: format!("Unit {}", i / FALLBACK_TOPICS_PER_UNIT + 1),
            importance: DEFAULT_IMPORTANCE,
            is_weak_area: false,
            is_strong_area: false,
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
