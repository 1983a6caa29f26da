use chrono::{Datelike, Duration, NaiveDate};

use crate::context::store as context_store;
use crate::error::HarmonyError;
use crate::plan::{store as plan_store, DayPlan};
use crate::storage::DataDir;

/// Monday of the week containing `date`. Sunday maps six days back, so the
/// week convention is Monday..Sunday throughout.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Assemble the 7-day window for the week containing `reference`. Each
/// day's blocks come from that date's own stored plan; absent dates yield
/// empty lists and are never generated here.
pub async fn get_week(data: &DataDir, reference: NaiveDate) -> Vec<DayPlan> {
    let start = week_start(reference);
    let contexts = context_store::load_contexts(data).await;

    let mut days = Vec::with_capacity(7);
    for offset in 0..7 {
        let date = start + Duration::days(offset);
        let mut plan = plan_store::load_plan(data, date)
            .await
            .unwrap_or_else(|| DayPlan::empty(date));
        if plan.context.is_none() {
            plan.context = contexts.get(&date).cloned();
        }
        days.push(plan);
    }
    days
}

/// Move one block between two dated plans: read both, remove from source,
/// append to destination, persist both. Returns Ok(false) and touches
/// nothing when the block is not in the source plan. Whether the target
/// date is allowed (e.g. not in the past) is the caller's policy.
pub async fn move_block(
    data: &DataDir,
    block_id: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<bool, HarmonyError> {
    let mut source = match plan_store::load_plan(data, from).await {
        Some(plan) => plan,
        None => return Ok(false),
    };
    let index = match source.blocks.iter().position(|b| b.id == block_id) {
        Some(i) => i,
        None => return Ok(false),
    };

    // Same-day move is a successful no-op; reloading the destination below
    // would otherwise duplicate the block.
    if from == to {
        return Ok(true);
    }

    let mut dest = plan_store::load_plan(data, to)
        .await
        .unwrap_or_else(|| DayPlan::empty(to));

    let block = source.blocks.remove(index);
    dest.blocks.push(block);

    // Destination first: a fault here leaves both stored plans untouched.
    plan_store::save_plan(data, &dest).await?;
    plan_store::save_plan(data, &source).await?;

    tracing::info!(block_id, from = %from, to = %to, "Moved block between days");
    Ok(true)
}
