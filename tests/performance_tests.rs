mod common;

use learnpath_engine::adaptive::types::{
    AnswerRecord, CareerGoal, DifficultyLevel, LearnerBackground, LearnerProfile, Pace,
    PerformanceLevel, ProgressRecord,
};
use learnpath_engine::adaptive::PerformanceUpdate;
use learnpath_engine::services::checkpoint::{
    self, CheckpointQuestion, CheckpointSubmission, QuestionType,
};
use learnpath_engine::AdaptivePathEngine;

use common::{answer_window, sample_course, sample_modules};

#[test]
fn integration_fast_and_accurate_learner_is_excellent() {
    let engine = AdaptivePathEngine::default();
    let update = engine.analyze_performance(&answer_window(18, 20, 30.0));

    let snapshot = update.snapshot().expect("snapshot");
    assert_eq!(snapshot.success_rate, 90.0);
    assert_eq!(snapshot.performance_level, PerformanceLevel::Excellent);
    assert_eq!(snapshot.recommended_pace, Pace::Fast);
    assert!(snapshot.weak_areas.is_empty());
}

#[test]
fn integration_low_success_rate_is_struggling_regardless_of_speed() {
    let engine = AdaptivePathEngine::default();
    for seconds in [5.0, 40.0, 80.0, 120.0] {
        let update = engine.analyze_performance(&answer_window(10, 20, seconds));
        let snapshot = update.snapshot().expect("snapshot");
        assert_eq!(snapshot.success_rate, 50.0);
        assert_eq!(snapshot.performance_level, PerformanceLevel::Struggling);
        assert_eq!(snapshot.recommended_pace, Pace::Slow);
    }
}

#[test]
fn integration_slow_answers_are_struggling() {
    let engine = AdaptivePathEngine::default();
    let update = engine.analyze_performance(&answer_window(20, 20, 95.0));
    assert_eq!(update.snapshot().unwrap().performance_level, PerformanceLevel::Struggling);
}

#[test]
fn integration_accurate_but_unhurried_is_average() {
    let engine = AdaptivePathEngine::default();
    let update = engine.analyze_performance(&answer_window(18, 20, 60.0));
    let snapshot = update.snapshot().unwrap();
    assert_eq!(snapshot.performance_level, PerformanceLevel::Average);
    assert_eq!(snapshot.recommended_pace, Pace::Normal);
}

#[test]
fn integration_no_answers_leaves_record_untouched() {
    let engine = AdaptivePathEngine::default();
    assert_eq!(engine.analyze_performance(&[]), PerformanceUpdate::Unchanged);
}

#[test]
fn integration_weak_areas_replace_previous_set() {
    let engine = AdaptivePathEngine::default();
    let answers = vec![
        AnswerRecord::new("loops", false, 50.0),
        AnswerRecord::new("closures", false, 50.0),
        AnswerRecord::new("loops", false, 50.0),
        AnswerRecord::new("closures", false, 50.0),
        AnswerRecord::new("traits", false, 50.0),
        AnswerRecord::new("loops", true, 50.0),
    ];

    let mut record = ProgressRecord::default();
    record.weak_areas = vec!["generics".to_string()];

    let update = engine.analyze_performance(&answers);
    let updated = update.snapshot().unwrap().apply_to(&record);
    assert_eq!(updated.weak_areas, vec!["loops", "closures"]);
    assert_eq!(updated.performance_level, PerformanceLevel::Struggling);
}

#[test]
fn integration_analysis_feeds_next_path() {
    let engine = AdaptivePathEngine::default();
    let profile = LearnerProfile::new(LearnerBackground::Intermediate, CareerGoal::Other);
    let course = sample_course(DifficultyLevel::Intermediate);
    let modules = sample_modules(3, DifficultyLevel::Intermediate);

    let before = engine
        .generate_adaptive_path(&profile, &course, &modules, Some(&ProgressRecord::default()))
        .unwrap();
    assert_eq!(before.adaptive_path.recommended_pace, Pace::Normal);

    let update = engine.analyze_performance(&answer_window(19, 20, 20.0));
    let record = update.snapshot().unwrap().apply_to(&ProgressRecord::default());

    let after = engine
        .generate_adaptive_path(&profile, &course, &modules, Some(&record))
        .unwrap();
    assert_eq!(after.user.performance_level, PerformanceLevel::Excellent);
    assert_eq!(after.adaptive_path.recommended_pace, Pace::Fast);
    assert_eq!(after.adaptive_path.modules[0].estimated_time, 28);
}

#[test]
fn integration_update_serializes_with_kind_tag() {
    let engine = AdaptivePathEngine::default();
    let update = engine.analyze_performance(&answer_window(1, 1, 10.0));
    let json = serde_json::to_value(update).unwrap();
    assert_eq!(json["kind"], "updated");
    assert_eq!(json["performanceLevel"], "excellent");
    assert_eq!(json["recommendedPace"], "fast");

    let unchanged = serde_json::to_value(PerformanceUpdate::Unchanged).unwrap();
    assert_eq!(unchanged["kind"], "unchanged");
}

#[test]
fn integration_graded_checkpoints_drive_classification() {
    let question = CheckpointQuestion {
        id: "loops".to_string(),
        question_type: QuestionType::ShortAnswer,
        options: Vec::new(),
        correct_answer: "for".to_string(),
        acceptable_answers: vec!["while".to_string()],
        hint: Some("Keyword that iterates".to_string()),
        explanation: None,
        max_retries: 3,
        points: 10,
    };

    let attempts = ["repeat", "goto", "  While "];
    let mut answers = Vec::new();
    for (previous, given) in attempts.iter().enumerate() {
        let submission = CheckpointSubmission {
            user_answer: given.to_string(),
            time_spent_seconds: 120.0,
            hint_used: previous > 0,
        };
        let outcome =
            checkpoint::submit_checkpoint(&question, &submission, previous as u32).unwrap();
        answers.insert(0, outcome.answer);
    }
    assert!(answers[0].is_correct);

    let extra = CheckpointSubmission {
        user_answer: "for".to_string(),
        ..Default::default()
    };
    assert!(checkpoint::submit_checkpoint(&question, &extra, 3).is_err());

    let engine = AdaptivePathEngine::default();
    let snapshot = engine.analyze_performance(&answers).snapshot().cloned().unwrap();
    assert_eq!(snapshot.performance_level, PerformanceLevel::Struggling);
    assert_eq!(snapshot.recommended_pace, Pace::Slow);
    assert_eq!(snapshot.weak_areas, vec!["loops"]);
}
