//! Daily plan model and storage trait
//!
//! A plan holds today's focus, free-form notes and open todo items. New items
//! can only be added while fewer than [`MAX_TODO_ITEMS`] are open; items that
//! are already stored are never dropped. Only unfinished items are carried
//! from one save to the next.

use crate::error::{NoteKeepError, Result};
use serde::{Deserialize, Serialize};

/// Number of todo slots in a plan
pub const MAX_TODO_ITEMS: usize = 7;

/// A day's plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Today's focus
    #[serde(default)]
    pub focus: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// Open todo items
    #[serde(default)]
    pub todo: Vec<String>,
}

impl DailyPlan {
    /// Build a plan from the current todo rows, dropping finished and blank ones
    pub fn carry_over<'a>(
        focus: impl Into<String>,
        notes: impl Into<String>,
        items: impl IntoIterator<Item = (bool, &'a str)>,
    ) -> Self {
        let todo = items
            .into_iter()
            .filter(|(done, text)| !done && !text.trim().is_empty())
            .map(|(_, text)| text.to_string())
            .collect();

        Self {
            focus: focus.into(),
            notes: notes.into(),
            todo,
        }
    }

    /// Add a todo item
    pub fn add_todo(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(NoteKeepError::Validation(
                "Todo item cannot be empty".to_string(),
            ));
        }
        if self.todo.len() >= MAX_TODO_ITEMS {
            return Err(NoteKeepError::Validation(format!(
                "Plan already has {} todo items",
                MAX_TODO_ITEMS
            )));
        }
        self.todo.push(text);
        Ok(())
    }

    /// Mark an item done and carry the remaining ones over
    pub fn complete(&mut self, index: usize) -> Result<String> {
        let Some(finished) = self.todo.get(index).cloned() else {
            return Err(NoteKeepError::Validation(format!(
                "No todo item at position {}",
                index + 1
            )));
        };

        let rows = self
            .todo
            .iter()
            .enumerate()
            .map(|(i, text)| (i == index, text.as_str()));
        let next = DailyPlan::carry_over(self.focus.clone(), self.notes.clone(), rows);
        *self = next;
        Ok(finished)
    }

    /// Whether more items are stored than there are slots
    pub fn is_over_capacity(&self) -> bool {
        self.todo.len() > MAX_TODO_ITEMS
    }
}

/// Result of loading a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanState {
    /// No plan has been saved yet
    Absent,
    /// A previously saved plan
    Loaded(DailyPlan),
}

impl PlanState {
    /// Whether a saved plan exists
    pub fn is_absent(&self) -> bool {
        matches!(self, PlanState::Absent)
    }

    /// The saved plan, or an empty one on first run
    pub fn into_plan(self) -> DailyPlan {
        match self {
            PlanState::Absent => DailyPlan::default(),
            PlanState::Loaded(plan) => plan,
        }
    }
}

/// Trait for plan storage implementations
pub trait PlanStorage {
    /// Load the stored plan
    fn load(&self) -> Result<PlanState>;

    /// Save the plan, replacing any previous one
    fn save(&self, plan: &DailyPlan) -> Result<()>;

    /// Check if a plan has been saved
    fn exists(&self) -> bool;

    /// Load, apply `edit` and save
    fn update<F>(&self, edit: F) -> Result<DailyPlan>
    where
        F: FnOnce(&mut DailyPlan) -> Result<()>,
    {
        let mut plan = self.load()?.into_plan();
        edit(&mut plan)?;
        self.save(&plan)?;
        Ok(plan)
    }
}
