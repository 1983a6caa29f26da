use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::config::{self, AppConfig};
use crate::context::DayContext;
use crate::error::HarmonyError;
use crate::plan::{self, store as plan_store, DayPlan, StudyBlock};
use crate::storage::DataDir;
use crate::subjects::store as subjects_store;

/// Application-wide handle: the data directory, the loaded config, and an
/// in-memory copy of today's plan so the timer UI can poll "next" without
/// re-reading disk. All mutations write through the store and refresh the
/// cache; a cache entry for a stale date is ignored.
#[derive(Clone)]
pub struct App {
    data: DataDir,
    config: AppConfig,
    today_plan: Arc<RwLock<Option<DayPlan>>>,
}

impl App {
    pub fn new(data: DataDir, config: AppConfig) -> Self {
        App {
            data,
            config,
            today_plan: Arc::new(RwLock::new(None)),
        }
    }

    /// Open the platform data directory and load config.toml.
    pub async fn open() -> Self {
        let data = DataDir::resolve();
        let config = config::load_config(&data).await;
        App::new(data, config)
    }

    pub fn data(&self) -> &DataDir {
        &self.data
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn cached_blocks(&self, date: NaiveDate) -> Option<Vec<StudyBlock>> {
        let guard = self.today_plan.read();
        guard
            .as_ref()
            .filter(|p| p.date == date)
            .map(|p| p.blocks.clone())
    }

    fn cache(&self, date: NaiveDate, blocks: Vec<StudyBlock>) {
        *self.today_plan.write() = Some(DayPlan {
            date,
            blocks,
            context: None,
        });
    }

    /// Load or generate today's plan from the user's check-in. Subjects are
    /// snapshotted from the registry at generation time.
    pub async fn ensure_today(&self, context: &DayContext) -> Result<Vec<StudyBlock>, HarmonyError> {
        let date = context.date;
        if let Some(blocks) = self.cached_blocks(date) {
            return Ok(blocks);
        }

        let subjects = subjects_store::load_subjects(&self.data).await;
        let blocks =
            plan_store::ensure_plan(&self.data, date, context, &subjects, &self.config).await?;
        self.cache(date, blocks.clone());
        Ok(blocks)
    }

    /// First not-done block for `date`, or None when the plan is finished
    /// or absent.
    pub async fn next_block(&self, date: NaiveDate) -> Option<StudyBlock> {
        if let Some(blocks) = self.cached_blocks(date) {
            return plan::next_block(&blocks).cloned();
        }

        let stored = plan_store::load_plan(&self.data, date).await?;
        let next = plan::next_block(&stored.blocks).cloned();
        self.cache(date, stored.blocks);
        next
    }

    pub async fn add_block(
        &self,
        date: NaiveDate,
        title: &str,
        duration_min: u32,
        subject_code: &str,
    ) -> Result<Vec<StudyBlock>, HarmonyError> {
        let blocks = plan_store::add_block(
            &self.data,
            date,
            title,
            duration_min,
            subject_code,
            &self.config,
        )
        .await?;
        self.cache(date, blocks.clone());
        Ok(blocks)
    }

    pub async fn delete_block(
        &self,
        date: NaiveDate,
        id: &str,
    ) -> Result<Vec<StudyBlock>, HarmonyError> {
        let blocks = plan_store::delete_block(&self.data, date, id).await?;
        self.cache(date, blocks.clone());
        Ok(blocks)
    }

    pub async fn complete_block(
        &self,
        date: NaiveDate,
        id: &str,
    ) -> Result<Vec<StudyBlock>, HarmonyError> {
        let blocks = plan_store::complete_block(&self.data, date, id).await?;
        self.cache(date, blocks.clone());
        Ok(blocks)
    }
}
