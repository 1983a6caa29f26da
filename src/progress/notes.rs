use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::HarmonyError;
use crate::storage::{self, DataDir};

const NOTES_FILE: &str = "block_notes.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockNote {
    pub block_id: String,
    pub subject_code: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub edited: bool,
}

pub async fn load_notes(data: &DataDir) -> Vec<BlockNote> {
    storage::read_json(&data.file(NOTES_FILE))
        .await
        .unwrap_or_default()
}

/// Upsert the note for a block. Rewrites keep the original created_at and
/// flip the edited flag.
pub async fn save_note(
    data: &DataDir,
    block_id: &str,
    subject_code: &str,
    content: &str,
) -> Result<Vec<BlockNote>, HarmonyError> {
    let mut notes = load_notes(data).await;

    match notes.iter_mut().find(|n| n.block_id == block_id) {
        Some(existing) => {
            existing.subject_code = subject_code.to_string();
            existing.content = content.to_string();
            existing.edited = true;
        }
        None => notes.push(BlockNote {
            block_id: block_id.to_string(),
            subject_code: subject_code.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
            edited: false,
        }),
    }

    storage::write_json(&data.file(NOTES_FILE), &notes).await?;
    Ok(notes)
}

/// Case-insensitive substring search over note contents.
pub fn search_notes(notes: &[BlockNote], query: &str) -> Vec<BlockNote> {
    let query = query.to_lowercase();
    notes
        .iter()
        .filter(|n| n.content.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
