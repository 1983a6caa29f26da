use chrono::Utc;
use uuid::Uuid;

use crate::config::{AppConfig, InitialStatusPolicy};
use crate::context::{DayContext, ExamPhase, Mood};
use crate::plan::{BlockStatus, BlockType, StudyBlock};
use crate::subjects::Subject;

/// Number of blocks for a day, from the mood self-report alone.
fn base_load(mood: Mood) -> usize {
    match mood {
        Mood::High => 5,
        Mood::Normal => 4,
        Mood::Low => 3,
    }
}

/// Minutes per block. Exam phase changes labels, never durations.
fn block_duration(mood: Mood) -> u32 {
    match mood {
        Mood::Low => 30,
        Mood::Normal | Mood::High => 50,
    }
}

/// Derive a day's study blocks from the check-in and the subject list.
/// Pure: no storage access, no side effects beyond fresh ids/timestamps.
pub fn generate(context: &DayContext, subjects: &[Subject], config: &AppConfig) -> Vec<StudyBlock> {
    let fallback = Subject::general_study();
    let mut pool: Vec<&Subject> = subjects
        .iter()
        .filter(|s| !s.name.trim().is_empty())
        .collect();
    if pool.is_empty() {
        pool.push(&fallback);
    }

    let load = base_load(context.mood);
    let duration = block_duration(context.mood);
    let exam = context.exam_phase != ExamPhase::None;

    let mut blocks = Vec::with_capacity(load);
    for i in 0..load {
        // Short subject lists repeat round-robin.
        let subject = pool[i % pool.len()];
        let status = match config.initial_status {
            InitialStatusPolicy::FirstActive if i == 0 => BlockStatus::Active,
            _ => BlockStatus::Pending,
        };
        blocks.push(StudyBlock {
            id: Uuid::new_v4().to_string(),
            title: if exam {
                format!("Exam prep: {}", subject.name)
            } else {
                format!("Focused study: {}", subject.name)
            },
            subject_code: subject.code.clone(),
            duration_min: duration,
            block_type: if exam { BlockType::Exam } else { BlockType::Study },
            status,
            created_at: Utc::now(),
            completed_at: None,
            scheduled_time: None,
        });
    }

    blocks
}
