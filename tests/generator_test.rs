use chrono::NaiveDate;
use harmony::config::{AppConfig, InitialStatusPolicy};
use harmony::context::{DayContext, ExamPhase, Mood, Specials};
use harmony::plan::{BlockStatus, BlockType};
use harmony::planner;
use harmony::subjects::{Difficulty, Subject};

fn context(mood: Mood, exam_phase: ExamPhase) -> DayContext {
    DayContext {
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        mood,
        exam_phase,
        specials: Specials::default(),
    }
}

fn subject(name: &str, code: &str) -> Subject {
    Subject {
        name: name.to_string(),
        code: code.to_string(),
        credits: 4,
        difficulty: Difficulty::Medium,
        notes: String::new(),
    }
}

#[test]
fn test_load_table_follows_mood() {
    let subjects = vec![subject("Math", "MTH"), subject("Physics", "PHY")];
    let config = AppConfig::default();

    let cases = [(Mood::Low, 3), (Mood::Normal, 4), (Mood::High, 5)];
    for (mood, expected) in cases {
        let blocks = planner::generate(&context(mood, ExamPhase::None), &subjects, &config);
        assert_eq!(blocks.len(), expected, "Load should depend only on mood");
    }

    // Subject list size does not change the load
    let one = planner::generate(
        &context(Mood::High, ExamPhase::None),
        &[subject("Math", "MTH")],
        &config,
    );
    assert_eq!(one.len(), 5, "Load should be independent of subject count");
}

#[test]
fn test_duration_follows_mood_not_exam_phase() {
    let subjects = vec![subject("Math", "MTH")];
    let config = AppConfig::default();

    let low = planner::generate(&context(Mood::Low, ExamPhase::Esa), &subjects, &config);
    assert!(low.iter().all(|b| b.duration_min == 30));

    let normal = planner::generate(&context(Mood::Normal, ExamPhase::None), &subjects, &config);
    assert!(normal.iter().all(|b| b.duration_min == 50));

    let high = planner::generate(&context(Mood::High, ExamPhase::Isa), &subjects, &config);
    assert!(high.iter().all(|b| b.duration_min == 50));
}

#[test]
fn test_round_robin_subject_rotation() {
    let subjects = vec![subject("Math", "MTH"), subject("Physics", "PHY")];
    let config = AppConfig::default();

    let blocks = planner::generate(&context(Mood::High, ExamPhase::None), &subjects, &config);
    let codes: Vec<&str> = blocks.iter().map(|b| b.subject_code.as_str()).collect();
    assert_eq!(codes, vec!["MTH", "PHY", "MTH", "PHY", "MTH"]);
}

#[test]
fn test_exam_phase_scenario() {
    let subjects = vec![subject("Math", "MTH")];
    let config = AppConfig::default();

    let blocks = planner::generate(&context(Mood::Low, ExamPhase::Isa), &subjects, &config);
    assert_eq!(blocks.len(), 3);
    for block in &blocks {
        assert_eq!(block.duration_min, 30);
        assert_eq!(block.block_type, BlockType::Exam);
        assert_eq!(block.subject_code, "MTH");
        assert!(
            block.title.contains("Math"),
            "Exam title should reference the subject name"
        );
    }
}

#[test]
fn test_empty_subjects_fall_back_to_general_study() {
    let config = AppConfig::default();

    let blocks = planner::generate(&context(Mood::High, ExamPhase::None), &[], &config);
    assert_eq!(blocks.len(), 5);
    for block in &blocks {
        assert_eq!(block.subject_code, "GEN");
        assert!(block.title.contains("General Study"));
    }

    // Blank-named subjects are filtered before rotation
    let blanks = vec![subject("", "X1"), subject("   ", "X2")];
    let blocks = planner::generate(&context(Mood::Low, ExamPhase::None), &blanks, &config);
    assert!(blocks.iter().all(|b| b.subject_code == "GEN"));
}

#[test]
fn test_initial_status_policy() {
    let subjects = vec![subject("Math", "MTH")];
    let ctx = context(Mood::Normal, ExamPhase::None);

    // Default: everything pending, "next" stays a derived query
    let default = planner::generate(&ctx, &subjects, &AppConfig::default());
    assert!(default.iter().all(|b| b.status == BlockStatus::Pending));

    let first_active = AppConfig {
        initial_status: InitialStatusPolicy::FirstActive,
        ..AppConfig::default()
    };
    let blocks = planner::generate(&ctx, &subjects, &first_active);
    assert_eq!(blocks[0].status, BlockStatus::Active);
    assert!(blocks[1..].iter().all(|b| b.status == BlockStatus::Pending));
}

#[test]
fn test_block_ids_are_unique() {
    let subjects = vec![subject("Math", "MTH")];
    let blocks = planner::generate(
        &context(Mood::High, ExamPhase::None),
        &subjects,
        &AppConfig::default(),
    );

    let mut ids: Vec<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), blocks.len(), "Each block gets a fresh id");
}
