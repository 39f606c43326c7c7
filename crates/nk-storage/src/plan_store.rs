//! File system storage for the daily plan

use nk_core::atomic::write_atomic;
use nk_core::error::{NoteKeepError, Result};
use nk_core::plan::{DailyPlan, PlanState, PlanStorage, MAX_TODO_ITEMS};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name used under the data directory
const PLAN_FILE_NAME: &str = "plan.json";

/// JSON file based plan storage
pub struct FilePlanStore {
    path: PathBuf,
}

impl FilePlanStore {
    /// Create a store backed by `path`
    ///
    /// Nothing is created on disk until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store in the default data directory (~/.notekeep)
    pub fn default_location() -> Self {
        let base_dir = directories::ProjectDirs::from("com", "notekeep", "notekeep")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".notekeep")
            });

        Self::new(base_dir.join(PLAN_FILE_NAME))
    }

    /// Path of the plan file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write plan atomically (write to temp, sync, then rename)
    fn atomic_write(&self, plan: &DailyPlan) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| NoteKeepError::io(parent, e))?;
                debug!("Created plan directory: {:?}", parent);
            }
        }

        let content = serde_json::to_vec_pretty(plan)?;
        write_atomic(&self.path, &content)?;

        debug!("Saved plan to {:?}", self.path);
        Ok(())
    }
}

impl PlanStorage for FilePlanStore {
    fn load(&self) -> Result<PlanState> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No plan at {:?}, starting fresh", self.path);
                return Ok(PlanState::Absent);
            }
            Err(e) => return Err(NoteKeepError::io(&self.path, e)),
        };

        let plan: DailyPlan = serde_json::from_str(&content).map_err(|e| {
            NoteKeepError::from(e).with_context(format!("Invalid plan file {}", self.path.display()))
        })?;
        if plan.is_over_capacity() {
            warn!(
                "Plan {:?} has {} todo items, more than the {} slots; no new items can be added",
                self.path,
                plan.todo.len(),
                MAX_TODO_ITEMS
            );
        }
        Ok(PlanState::Loaded(plan))
    }

    fn save(&self, plan: &DailyPlan) -> Result<()> {
        self.atomic_write(plan)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
