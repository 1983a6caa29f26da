use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::context::DayContext;
use crate::error::HarmonyError;
use crate::storage::{self, DataDir};

const CONTEXTS_FILE: &str = "day_contexts.json";

/// Load the full date-keyed check-in history. A corrupt file decays to an
/// empty map.
pub async fn load_contexts(data: &DataDir) -> BTreeMap<NaiveDate, DayContext> {
    storage::read_json(&data.file(CONTEXTS_FILE))
        .await
        .unwrap_or_default()
}

/// Upsert the check-in for its date and persist the whole map.
pub async fn save_context(data: &DataDir, context: DayContext) -> Result<(), HarmonyError> {
    let mut all = load_contexts(data).await;
    all.insert(context.date, context);
    storage::write_json(&data.file(CONTEXTS_FILE), &all).await
}

pub async fn get_context(data: &DataDir, date: NaiveDate) -> Option<DayContext> {
    load_contexts(data).await.remove(&date)
}

/// Whether the user has checked in for `date` yet.
pub async fn has_context(data: &DataDir, date: NaiveDate) -> bool {
    load_contexts(data).await.contains_key(&date)
}
