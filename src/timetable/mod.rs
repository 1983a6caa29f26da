use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::HarmonyError;
use crate::storage::{self, DataDir};

const TIMETABLE_FILE: &str = "timetable.json";

/// One fixed weekly class from onboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassEntry {
    pub id: String,
    pub subject_name: String,
    pub subject_code: String,
    pub location: String,
    /// Short day name, "Mon".."Sun".
    pub day: String,
    /// "HH:MM" start time.
    pub time: String,
    #[serde(default)]
    pub color: Option<String>,
}

pub async fn load_timetable(data: &DataDir) -> Vec<ClassEntry> {
    storage::read_json(&data.file(TIMETABLE_FILE))
        .await
        .unwrap_or_default()
}

pub async fn save_timetable(data: &DataDir, entries: &[ClassEntry]) -> Result<(), HarmonyError> {
    storage::write_json(&data.file(TIMETABLE_FILE), &entries).await
}

pub fn short_day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Classes on one weekday, sorted by start time.
pub fn classes_on(entries: &[ClassEntry], day: &str) -> Vec<ClassEntry> {
    let mut classes: Vec<ClassEntry> = entries.iter().filter(|c| c.day == day).cloned().collect();
    classes.sort_by(|a, b| a.time.cmp(&b.time));
    classes
}
