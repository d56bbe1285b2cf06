//! Schedule Module
//!
//! Day-by-day plan construction:
//! - Duration estimation per topic sitting
//! - Capacity-constrained priority selection per day
//! - The builder walking the calendar from start date to exam date

mod builder;
mod duration;
mod selector;

pub use builder::ScheduleBuilder;
pub use duration::{DurationConfig, DurationEstimator};
pub use selector::{PriorityTopicSelector, Selection, SelectorConfig};
