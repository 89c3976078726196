//! Sync Services
//!
//! - [`reconcile`] - pure diffing of a parse outcome against the remote
//!   open-task set, plus creation ordering
//! - [`sync_service`] - the orchestrator that drives the remote client and
//!   assembles the document edits
//! - [`error`] - error and per-task failure types

pub mod error;
pub mod reconcile;
pub mod sync_service;

pub use error::{FailureReason, SyncError, TaskFailure};
pub use reconcile::{order_for_creation, reconcile, Reconciliation, RemoteIdMap};
pub use sync_service::{CreatedRecord, SyncOutcome, SyncReport, SyncService};
