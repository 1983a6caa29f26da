use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::HarmonyError;
use crate::storage::{self, DataDir};

const STREAK_FILE: &str = "streak.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakData {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_completed_date: Option<NaiveDate>,
    pub history: Vec<NaiveDate>,
}

pub async fn load_streak(data: &DataDir) -> StreakData {
    storage::read_json(&data.file(STREAK_FILE))
        .await
        .unwrap_or_default()
}

/// Record that at least one block was completed on `today`. The streak
/// continues only when yesterday was the last completed date; a second
/// call on the same day is a no-op.
pub async fn record_completion(
    data: &DataDir,
    today: NaiveDate,
) -> Result<StreakData, HarmonyError> {
    let mut streak = load_streak(data).await;

    if streak.last_completed_date == Some(today) {
        return Ok(streak);
    }

    let yesterday = today - Duration::days(1);
    streak.current_streak = if streak.last_completed_date == Some(yesterday) {
        streak.current_streak + 1
    } else {
        1
    };
    streak.longest_streak = streak.longest_streak.max(streak.current_streak);
    streak.last_completed_date = Some(today);
    streak.history.push(today);

    storage::write_json(&data.file(STREAK_FILE), &streak).await?;
    Ok(streak)
}
