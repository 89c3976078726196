//! Marksync Core Engine
//!
//! Extracts checklist-style action items from free-form markdown text and
//! reconciles them with a remote task-tracking service, exactly once each.
//! The document itself is the only durable store of sync state: a created
//! task gets an inline remote-identifier tag written back to its line, and
//! a tagged task whose identifier is no longer open remotely gets its
//! checkbox flipped.
//!
//! # Architecture
//!
//! - **No ambient state**: the engine receives text and returns edits; host
//!   editor access and network transport live behind explicit interfaces
//! - **Line-oriented parsing**: classifier and state machine over one pass
//!   of the document, no markdown AST
//! - **Per-task failure**: one rejected create never discards the progress
//!   of the rest of the batch
//!
//! # Modules
//!
//! - [`models`] - task records, parse outcomes, document edits
//! - [`parser`] - field extractors, line classifier, document state machine
//! - [`services`] - reconciliation and the sync orchestrator
//! - [`remote`] - the abstract task-service capability
//! - [`config`] - persisted settings

pub mod config;
pub mod models;
pub mod parser;
pub mod remote;
pub mod services;

// Re-export commonly used types
pub use config::*;
pub use models::*;
pub use parser::*;
pub use services::*;
