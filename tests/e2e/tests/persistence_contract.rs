//! Persistence Contract
//!
//! The storage layer treats plans as opaque JSON records, so the field names
//! and date format the engine emits are a compatibility surface. These tests
//! pin that surface.

use studyplan_core::{ScheduleAdjuster, ScheduleBuilder, ScheduleError, StudyFeedback};
use studyplan_e2e_tests::fixtures::PlanFixtures;

#[test]
fn day_plan_json_carries_stable_field_names() {
    let plan = ScheduleBuilder::new()
        .build(&PlanFixtures::biology_request())
        .unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["subject_id"], "biology-12");
    assert_eq!(json["start_date"], "2025-03-01");
    assert_eq!(json["exam_date"], "2025-03-21");
    assert_eq!(json["total_days"], 21);

    let day = &json["daily_schedule"][0];
    for field in [
        "day",
        "date",
        "topics",
        "recommended_hours",
        "focus_topics",
        "spaced_repetition_session",
    ] {
        assert!(day.get(field).is_some(), "missing field: {field}");
    }
    assert_eq!(day["day"], 1);
    assert_eq!(day["date"], "2025-03-01");

    let topic = &day["topics"][0];
    for field in [
        "name",
        "unit",
        "importance",
        "is_weak_area",
        "is_strong_area",
        "study_duration_hours",
        "is_review",
        "needs_extra_attention",
    ] {
        assert!(topic.get(field).is_some(), "missing topic field: {field}");
    }
}

#[test]
fn reloaded_durations_keep_exact_float_bits() {
    // A weak, high-importance topic gets 1.0 * 1.5 * 1.3 hours. That product
    // is not exactly representable in decimal, so a lossy JSON parse would
    // reload it one ULP off and break equality with the stored plan.
    let plan = ScheduleBuilder::new()
        .build(&PlanFixtures::biology_request())
        .unwrap();
    let boosted: Vec<f64> = plan
        .daily_schedule
        .iter()
        .flat_map(|day| &day.topics)
        .filter(|t| t.is_weak_area && t.importance > 0.8)
        .map(|t| t.study_duration_hours)
        .collect();
    assert!(!boosted.is_empty());
    assert!(boosted.contains(&(1.0 * 1.5 * 1.3)));

    let json = serde_json::to_string(&plan).unwrap();
    let reloaded: studyplan_core::StudyPlan = serde_json::from_str(&json).unwrap();
    for (orig, back) in plan
        .daily_schedule
        .iter()
        .flat_map(|day| &day.topics)
        .zip(reloaded.daily_schedule.iter().flat_map(|day| &day.topics))
    {
        assert_eq!(
            orig.study_duration_hours.to_bits(),
            back.study_duration_hours.to_bits(),
            "duration drifted for {}",
            orig.name
        );
    }
    assert_eq!(reloaded, plan);
}

#[test]
fn adjustment_outcome_json_shape() {
    let plan = ScheduleBuilder::new()
        .build(&PlanFixtures::biology_request())
        .unwrap();
    let outcome = ScheduleAdjuster::new().adjust_now(&plan, &StudyFeedback::default());
    let json = serde_json::to_value(&outcome).unwrap();

    assert!(json["message"].is_string());
    assert!(json["plan"]["daily_schedule"].is_array());
    let reasons = &json["adjustment_reasons"];
    assert!(reasons["id"].is_string());
    assert!(reasons["struggling_topics"].is_array());
    assert!(reasons["efficient_topics"].is_array());
    assert!(reasons["average_understanding"].is_number());
    assert!(reasons["adjusted_at"].is_string());
}

#[test]
fn inverted_range_surfaces_as_error_not_panic() {
    let mut request = PlanFixtures::biology_request();
    std::mem::swap(&mut request.start_date, &mut request.exam_date);

    match ScheduleBuilder::new().build(&request) {
        Err(ScheduleError::InvalidDateRange {
            start_date,
            exam_date,
        }) => {
            assert!(start_date > exam_date);
        }
        other => panic!("expected InvalidDateRange, got {other:?}"),
    }
}

#[test]
fn feedback_record_deserializes_from_collaborator_shape() {
    let json = r#"{
        "understanding_scores": {"DNA Replication": 0.4, "Ecosystems": 0.9},
        "time_taken": {"DNA Replication": 3.0}
    }"#;
    let feedback: StudyFeedback = serde_json::from_str(json).unwrap();
    assert_eq!(feedback.understanding_scores.len(), 2);
    assert_eq!(feedback.time_taken.len(), 1);

    let plan = ScheduleBuilder::new()
        .build(&PlanFixtures::biology_request())
        .unwrap();
    let outcome = ScheduleAdjuster::new().adjust_now(&plan, &feedback);
    assert_eq!(
        outcome.adjustment_reasons.struggling_topics,
        vec!["DNA Replication"]
    );
    assert_eq!(outcome.adjustment_reasons.efficient_topics, vec!["Ecosystems"]);
}
