//! Engine error taxonomy
//!
//! The scheduler is deliberately hard to fail: empty syllabi, missing
//! history, cyclic prerequisites, and exhausted topic pools all degrade to
//! documented fallback behavior instead of surfacing errors. The only
//! caller-visible failure is a date range that cannot hold a schedule.

use chrono::NaiveDate;

/// Scheduling error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The study window is empty: the start date falls after the exam date
    #[error("Invalid date range: start date {start_date} is after exam date {exam_date}")]
    InvalidDateRange {
        /// First day of the study window
        start_date: NaiveDate,
        /// Exam day (last day of the window)
        exam_date: NaiveDate,
    },
}

/// Scheduling result type
pub type Result<T> = std::result::Result<T, ScheduleError>;
