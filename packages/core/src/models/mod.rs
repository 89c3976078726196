//! Data Models
//!
//! Core data structures for the extraction and reconciliation engine:
//!
//! - `ParsedTask` - one checklist item lifted out of the document text
//! - `TaggedRow` - a line that already carries a remote identifier tag
//! - `ParseOutcome` - everything one parse pass produces
//! - `DocumentEdit` - a line-range replacement handed back to the host editor
//!
//! All records are created fresh per parse/sync invocation and discarded
//! afterwards. The document text itself is the only durable store of sync
//! state.

mod edit;
mod task;

pub use edit::DocumentEdit;
pub use task::{DueDate, LocalId, ParseAnomaly, ParseOutcome, ParsedTask, TaggedRow};
