use serde::Serialize;

use crate::plan::{BlockStatus, StudyBlock};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayStats {
    pub blocks_done: u32,
    pub total_planned: u32,
    /// Percent of planned blocks done, rounded.
    pub completion_rate: u32,
    /// Minutes over done blocks only.
    pub total_minutes: u32,
}

pub fn day_stats(blocks: &[StudyBlock]) -> DayStats {
    if blocks.is_empty() {
        return DayStats::default();
    }

    let blocks_done = blocks
        .iter()
        .filter(|b| b.status == BlockStatus::Done)
        .count() as u32;
    let total_minutes = blocks
        .iter()
        .filter(|b| b.status == BlockStatus::Done)
        .map(|b| b.duration_min)
        .sum();

    DayStats {
        blocks_done,
        total_planned: blocks.len() as u32,
        completion_rate: ((blocks_done as f32 / blocks.len() as f32) * 100.0).round() as u32,
        total_minutes,
    }
}
