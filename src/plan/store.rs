use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::context::DayContext;
use crate::error::HarmonyError;
use crate::plan::{BlockStatus, BlockType, DayPlan, StudyBlock};
use crate::planner;
use crate::storage::{self, DataDir};
use crate::subjects::Subject;

/// Load the stored plan for `date`, absent when none exists. A plan file
/// whose recorded date disagrees with its key is treated as absent.
pub async fn load_plan(data: &DataDir, date: NaiveDate) -> Option<DayPlan> {
    let plan: DayPlan = storage::read_json(&data.plan_path(date)).await?;
    if plan.date != date {
        tracing::warn!(
            requested = %date,
            stored = %plan.date,
            "Plan file date mismatch, treating as absent"
        );
        return None;
    }
    Some(plan)
}

pub async fn save_plan(data: &DataDir, plan: &DayPlan) -> Result<(), HarmonyError> {
    storage::write_json(&data.plan_path(plan.date), plan).await
}

/// Load the plan for `date`, generating and persisting one if absent.
/// Generation happens at most once per date: a second call returns the
/// stored blocks unmodified.
pub async fn ensure_plan(
    data: &DataDir,
    date: NaiveDate,
    context: &DayContext,
    subjects: &[Subject],
    config: &AppConfig,
) -> Result<Vec<StudyBlock>, HarmonyError> {
    if let Some(plan) = load_plan(data, date).await {
        return Ok(plan.blocks);
    }

    let blocks = planner::generate(context, subjects, config);
    let plan = DayPlan {
        date,
        blocks,
        context: Some(context.clone()),
    };
    save_plan(data, &plan).await?;
    tracing::info!(date = %date, blocks = plan.blocks.len(), "Generated daily plan");
    Ok(plan.blocks)
}

/// Append a user-authored block with a fresh id. Its scheduled time chains
/// off the previous last block, defaulting to the configured day start.
pub async fn add_block(
    data: &DataDir,
    date: NaiveDate,
    title: &str,
    duration_min: u32,
    subject_code: &str,
    config: &AppConfig,
) -> Result<Vec<StudyBlock>, HarmonyError> {
    let mut plan = load_plan(data, date)
        .await
        .unwrap_or_else(|| DayPlan::empty(date));

    let scheduled_time = next_slot(plan.blocks.last(), config);
    plan.blocks.push(StudyBlock {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        subject_code: subject_code.to_string(),
        duration_min,
        block_type: BlockType::Study,
        status: BlockStatus::Pending,
        created_at: Utc::now(),
        completed_at: None,
        scheduled_time: Some(scheduled_time),
    });

    save_plan(data, &plan).await?;
    Ok(plan.blocks)
}

fn next_slot(last: Option<&StudyBlock>, config: &AppConfig) -> String {
    if let Some(block) = last {
        if let Some(time) = block.scheduled_time.as_deref() {
            if let Ok(start) = NaiveTime::parse_from_str(time, "%H:%M") {
                let end = start + Duration::minutes(block.duration_min as i64);
                return end.format("%H:%M").to_string();
            }
        }
    }
    config.day_start.clone()
}

/// Remove the block with matching id. A missing id is a no-op.
pub async fn delete_block(
    data: &DataDir,
    date: NaiveDate,
    id: &str,
) -> Result<Vec<StudyBlock>, HarmonyError> {
    let mut plan = load_plan(data, date)
        .await
        .unwrap_or_else(|| DayPlan::empty(date));
    plan.blocks.retain(|b| b.id != id);
    save_plan(data, &plan).await?;
    Ok(plan.blocks)
}

/// Mark the block done and stamp its completion time. Already-done or
/// missing ids are no-ops, so repeated calls leave the first timestamp.
pub async fn complete_block(
    data: &DataDir,
    date: NaiveDate,
    id: &str,
) -> Result<Vec<StudyBlock>, HarmonyError> {
    let mut plan = load_plan(data, date)
        .await
        .unwrap_or_else(|| DayPlan::empty(date));

    let mut changed = false;
    if let Some(block) = plan.blocks.iter_mut().find(|b| b.id == id) {
        if block.status != BlockStatus::Done {
            block.status = BlockStatus::Done;
            block.completed_at = Some(Utc::now());
            changed = true;
        }
    }

    if changed {
        save_plan(data, &plan).await?;
    }
    Ok(plan.blocks)
}
