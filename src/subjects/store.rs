use crate::error::HarmonyError;
use crate::storage::{self, DataDir};
use crate::subjects::Subject;

const SUBJECTS_FILE: &str = "subjects.json";

/// Load the subject list, empty when nothing is stored yet.
pub async fn load_subjects(data: &DataDir) -> Vec<Subject> {
    storage::read_json(&data.file(SUBJECTS_FILE))
        .await
        .unwrap_or_default()
}

pub async fn save_subjects(data: &DataDir, subjects: &[Subject]) -> Result<(), HarmonyError> {
    storage::write_json(&data.file(SUBJECTS_FILE), &subjects).await
}
