use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::HarmonyError;
use crate::plan::{store as plan_store, BlockStatus};
use crate::storage::{self, DataDir};
use crate::week;

const GOALS_FILE: &str = "goals.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTargets {
    pub target_blocks: u32,
    pub target_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    pub daily: GoalTargets,
    pub weekly: GoalTargets,
}

impl Default for Goals {
    fn default() -> Self {
        Goals {
            daily: GoalTargets {
                target_blocks: 4,
                target_minutes: 180, // 3 hours
            },
            weekly: GoalTargets {
                target_blocks: 25,
                target_minutes: 1200, // 20 hours
            },
        }
    }
}

pub async fn load_goals(data: &DataDir) -> Goals {
    storage::read_json(&data.file(GOALS_FILE))
        .await
        .unwrap_or_default()
}

pub async fn save_goals(data: &DataDir, goals: &Goals) -> Result<(), HarmonyError> {
    storage::write_json(&data.file(GOALS_FILE), goals).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekProgress {
    pub blocks_completed: u32,
    pub minutes_completed: u32,
    pub week_start: NaiveDate,
}

/// Sum done blocks and their minutes across the Monday-aligned week
/// containing `today`.
pub async fn week_progress(data: &DataDir, today: NaiveDate) -> WeekProgress {
    let start = week::week_start(today);
    let mut blocks_completed = 0;
    let mut minutes_completed = 0;

    for offset in 0..7 {
        let date = start + Duration::days(offset);
        if let Some(plan) = plan_store::load_plan(data, date).await {
            for block in plan.blocks.iter().filter(|b| b.status == BlockStatus::Done) {
                blocks_completed += 1;
                minutes_completed += block.duration_min;
            }
        }
    }

    WeekProgress {
        blocks_completed,
        minutes_completed,
        week_start: start,
    }
}
