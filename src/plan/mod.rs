pub mod store;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::context::DayContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStatus {
    Pending,
    Active,
    Done,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Study,
    Revision,
    Exam,
    Break,
}

/// One schedulable unit of focused work. Ids are unique within a day's
/// list and stable for the block's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyBlock {
    pub id: String,
    pub title: String,
    pub subject_code: String,
    pub duration_min: u32,
    pub block_type: BlockType,
    pub status: BlockStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// "HH:MM" bookkeeping for quick-added blocks; not load-bearing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
}

/// The unit of persistence: one date, its block list, and optionally the
/// check-in it was generated from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub blocks: Vec<StudyBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<DayContext>,
}

impl DayPlan {
    pub fn empty(date: NaiveDate) -> Self {
        DayPlan {
            date,
            blocks: Vec::new(),
            context: None,
        }
    }
}

/// The block currently surfaced to the user: first in list order that is
/// not done. Always derived, never stored.
pub fn next_block(blocks: &[StudyBlock]) -> Option<&StudyBlock> {
    blocks.iter().find(|b| b.status != BlockStatus::Done)
}
