//! Plan command
//!
//! Keep today's focus, notes and open todo items.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use nk_core::config::Config;
use nk_core::plan::{DailyPlan, PlanState, PlanStorage, MAX_TODO_ITEMS};
use nk_storage::FilePlanStore;

/// Arguments for the plan command
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Plan file (defaults to the data directory)
    #[arg(long, env = "NOTEKEEP_PLAN_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: PlanCommand,
}

/// Plan subcommands
#[derive(Debug, Subcommand)]
pub enum PlanCommand {
    /// Show the current plan
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set today's focus
    Focus {
        /// Focus text
        text: String,
    },

    /// Set the notes
    Notes {
        /// Notes text
        text: String,
    },

    /// Add a todo item
    Add {
        /// Todo text
        text: String,
    },

    /// Mark a todo item done (1-based position)
    Done {
        /// Item position as shown by `plan show`
        position: usize,
    },

    /// Start over with an empty plan
    Clear,

    /// Print the plan file path
    Path,
}

/// Execute the plan command
pub fn execute(args: PlanArgs, config: &Config) -> Result<()> {
    let store = match args.file.or_else(|| config.planner.file.clone()) {
        Some(path) => FilePlanStore::new(path),
        None => FilePlanStore::default_location(),
    };

    match args.command {
        PlanCommand::Show { json } => show_plan(&store, json),
        PlanCommand::Focus { text } => edit_plan(&store, |plan| {
            plan.focus = text;
            Ok(())
        }),
        PlanCommand::Notes { text } => edit_plan(&store, |plan| {
            plan.notes = text;
            Ok(())
        }),
        PlanCommand::Add { text } => edit_plan(&store, |plan| plan.add_todo(text)),
        PlanCommand::Done { position } => complete_item(&store, position),
        PlanCommand::Clear => {
            store.save(&DailyPlan::default())?;
            println!("Plan cleared.");
            Ok(())
        }
        PlanCommand::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
    }
}

fn show_plan(store: &FilePlanStore, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let plan = match store.load()? {
        PlanState::Absent => {
            eprintln!(
                "{} No plan saved yet. Run '{}' to start one.",
                "⚠".yellow(),
                "notekeep plan focus <text>".cyan()
            );
            return Ok(());
        }
        PlanState::Loaded(plan) => plan,
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("{}", "Focus:".bold().underline());
    println!("{}", plan.focus);
    println!();
    println!(
        "{} ({}/{})",
        "Todo:".bold().underline(),
        plan.todo.len(),
        MAX_TODO_ITEMS
    );
    for (i, item) in plan.todo.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
    println!();
    println!("{}", "Notes:".bold().underline());
    println!("{}", plan.notes);

    Ok(())
}

fn edit_plan<F>(store: &FilePlanStore, edit: F) -> Result<()>
where
    F: FnOnce(&mut DailyPlan) -> nk_core::Result<()>,
{
    use colored::Colorize;

    store
        .update(edit)
        .with_context(|| format!("Failed to update plan {}", store.path().display()))?;
    eprintln!("{} Plan saved.", "✓".green());
    Ok(())
}

fn complete_item(store: &FilePlanStore, position: usize) -> Result<()> {
    use colored::Colorize;

    let index = position
        .checked_sub(1)
        .context("Positions start at 1")?;
    let mut finished = String::new();
    store
        .update(|plan| {
            finished = plan.complete(index)?;
            Ok(())
        })
        .with_context(|| format!("Failed to update plan {}", store.path().display()))?;

    eprintln!("{} Done: {}", "✓".green(), finished);
    Ok(())
}
