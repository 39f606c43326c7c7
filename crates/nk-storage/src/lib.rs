//! nk-storage - Storage library for notekeep
//!
//! This crate opens note files into documents and persists the daily plan.

mod document_store;
mod plan_store;

pub use document_store::open_document;
pub use plan_store::FilePlanStore;
