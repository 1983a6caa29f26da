pub mod store;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Low,
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamPhase {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "ISA")]
    Isa,
    #[serde(rename = "ESA")]
    Esa,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specials {
    pub holiday: bool,
    pub sick: bool,
    pub bunked: bool,
}

/// The user's one-per-day self-report. Immutable once the day passes;
/// overwritten freely by repeated check-ins on the same day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayContext {
    pub date: NaiveDate,
    pub mood: Mood,
    pub exam_phase: ExamPhase,
    #[serde(default)]
    pub specials: Specials,
}

/// Today's calendar date in the user's local timezone.
pub fn today_key() -> NaiveDate {
    Local::now().date_naive()
}
