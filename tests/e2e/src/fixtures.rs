//! Test Data Factory
//!
//! Generates realistic scheduling inputs:
//! - A class-12 biology syllabus with history and weak areas
//! - Parameterized syllabi for sizing scenarios
//! - Feedback records keyed off a built plan

use chrono::NaiveDate;
use studyplan_core::{
    BuildRequest, PerformanceSnapshot, QuestionRecord, StudyFeedback, StudyPlan, Syllabus,
    SyllabusUnit,
};

/// Factory for scheduling test data
pub struct PlanFixtures;

impl PlanFixtures {
    /// A realistic biology request: three units, eight topics, two weak
    /// areas, history concentrated on genetics
    pub fn biology_request() -> BuildRequest {
        let syllabus = Syllabus {
            units: vec![
                SyllabusUnit {
                    name: "Cell Biology".to_string(),
                    topics: vec![
                        "Cell Structure".to_string(),
                        "Cell Division".to_string(),
                        "Membrane Transport".to_string(),
                    ],
                },
                SyllabusUnit {
                    name: "Genetics".to_string(),
                    topics: vec![
                        "Mendelian Inheritance".to_string(),
                        "DNA Replication".to_string(),
                        "Gene Expression".to_string(),
                    ],
                },
                SyllabusUnit {
                    name: "Ecology".to_string(),
                    topics: vec!["Ecosystems".to_string(), "Nutrient Cycles".to_string()],
                },
            ],
        };
        let history = vec![
            question("Genetics", 12.0),
            question("Genetics", 8.0),
            question("Genetics", 6.0),
            question("Cell Biology", 10.0),
            question("Cell Biology", 5.0),
            question("Ecology", 4.0),
        ];
        let performance = PerformanceSnapshot {
            weak_topics: vec!["DNA Replication".to_string(), "Nutrient Cycles".to_string()],
            strong_topics: vec!["Cell Structure".to_string()],
        };
        BuildRequest {
            subject_id: "biology-12".to_string(),
            syllabus,
            history,
            performance,
            start_date: date(2025, 3, 1),
            exam_date: date(2025, 3, 21),
        }
    }

    /// A request with an empty syllabus, exercising the synthetic fallback
    pub fn empty_syllabus_request() -> BuildRequest {
        BuildRequest {
            subject_id: "unseeded".to_string(),
            syllabus: Syllabus::default(),
            history: vec![],
            performance: PerformanceSnapshot::default(),
            start_date: date(2025, 3, 1),
            exam_date: date(2025, 3, 14),
        }
    }

    /// Feedback that marks every fresh topic of the plan's first day as
    /// struggling and every topic of the second day as efficient
    pub fn polarized_feedback(plan: &StudyPlan) -> StudyFeedback {
        let mut feedback = StudyFeedback::default();
        if let Some(day) = plan.daily_schedule.first() {
            for topic in day.topics.iter().filter(|t| !t.is_review) {
                feedback
                    .understanding_scores
                    .insert(topic.name.clone(), 0.2);
                feedback.time_taken.insert(topic.name.clone(), 2.5);
            }
        }
        if let Some(day) = plan.daily_schedule.get(1) {
            for topic in day.topics.iter().filter(|t| !t.is_review) {
                feedback
                    .understanding_scores
                    .entry(topic.name.clone())
                    .or_insert(0.95);
            }
        }
        feedback
    }
}

fn question(unit: &str, marks: f64) -> QuestionRecord {
    QuestionRecord {
        unit_name: unit.to_string(),
        marks,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}
