//! Plan Module
//!
//! Value types shared across the engine:
//! - Syllabus and history inputs
//! - Topic records with importance and weak/strong flags
//! - Day plans and the complete study plan

mod types;

pub use types::{
    BuildRequest, DayPlan, PerformanceSnapshot, QuestionRecord, ScheduledTopic, StudyFeedback,
    StudyPlan, Syllabus, SyllabusUnit, Topic,
};
