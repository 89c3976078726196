//! Sync Orchestrator
//!
//! Drives one full pass over a document: list the open remote tasks, parse
//! the text, reconcile, create what is new (parents before children) and
//! assemble the edits the host editor must apply. The service never mutates
//! the document itself and never throws away partial progress: every create
//! that succeeded has its tag edit in the report even when later creates
//! fail or the caller cancels.

use crate::config::SyncSettings;
use crate::models::{DocumentEdit, LocalId, ParseAnomaly};
use crate::parser::parse_document;
use crate::remote::{CreateTask, TaskService};
use crate::services::error::{SyncError, TaskFailure};
use crate::services::reconcile::{order_for_creation, reconcile, RemoteIdMap};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// How a sync pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncOutcome {
    /// The document held nothing to create and nothing to complete. Not an
    /// error; the remote create operation was never called.
    NoTasksFound,
    /// At least one create call or completion edit was attempted.
    Synced,
}

/// One successful create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    pub local_id: LocalId,
    pub remote_id: String,
}

/// Everything one sync pass produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub outcome: SyncOutcome,
    /// Document edits in application order: one tag append per created task,
    /// then one checkbox flip per completed row.
    pub edits: Vec<DocumentEdit>,
    pub created: Vec<CreatedRecord>,
    /// Per-task failures. Never empties the rest of the report.
    pub failures: Vec<TaskFailure>,
    pub completed_rows: Vec<usize>,
    pub anomalies: Vec<ParseAnomaly>,
}

impl SyncReport {
    fn no_tasks(anomalies: Vec<ParseAnomaly>) -> Self {
        Self {
            outcome: SyncOutcome::NoTasksFound,
            edits: Vec::new(),
            created: Vec::new(),
            failures: Vec::new(),
            completed_rows: Vec::new(),
            anomalies,
        }
    }
}

/// Orchestrates parse, reconciliation and remote creation for one document.
///
/// The remote client is injected so tests can substitute an in-memory fake.
pub struct SyncService {
    client: Arc<dyn TaskService>,
    settings: SyncSettings,
}

impl SyncService {
    pub fn new(client: Arc<dyn TaskService>, settings: SyncSettings) -> Self {
        Self { client, settings }
    }

    /// Run one sync pass over `text` and return the report.
    ///
    /// Fails only when the open-task listing itself fails; every later
    /// problem is recorded per task inside the report.
    pub async fn sync_text(&self, text: &str) -> Result<SyncReport, SyncError> {
        let open_ids: HashSet<String> = self
            .client
            .list_open_task_ids()
            .await
            .map_err(SyncError::ListOpenTasks)?
            .into_iter()
            .collect();

        let outcome = parse_document(text, &self.settings.due_lang);
        let recon = reconcile(&outcome, &open_ids);

        if recon.new_tasks.is_empty() && recon.completed_rows.is_empty() {
            tracing::info!("no tasks found");
            return Ok(SyncReport::no_tasks(outcome.anomalies));
        }

        let lines: Vec<&str> = text.lines().collect();
        let mut edits = Vec::new();
        let mut created = Vec::new();
        let mut failures = Vec::new();

        if !recon.new_tasks.is_empty() {
            // project inventory, as a sanity signal before creating anything;
            // task-to-project routing is not part of this engine
            match self.client.list_projects().await {
                Ok(projects) => {
                    tracing::debug!(count = projects.len(), "remote projects available");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "project listing failed, continuing");
                }
            }

            let mut remote_ids = RemoteIdMap::new();
            for task in order_for_creation(recon.new_tasks) {
                let parent_remote_id = if task.is_top_level() {
                    None
                } else {
                    match remote_ids.resolve(task.parent_local_id) {
                        Some(id) => Some(id.to_string()),
                        None => {
                            // parent create failed or was skipped; skip the
                            // child and keep going with the rest of the batch
                            tracing::warn!(
                                local_id = task.local_id,
                                parent_local_id = task.parent_local_id,
                                "skipping task with unresolved parent"
                            );
                            failures.push(TaskFailure::unresolved_parent(&task));
                            continue;
                        }
                    }
                };

                let payload = CreateTask::from_parsed(&task, parent_remote_id);
                match self.client.create_task(payload).await {
                    Ok(created_task) => {
                        remote_ids.record(task.local_id, created_task.id.clone());
                        if let Some(line) = lines.get(task.text_row) {
                            edits.push(DocumentEdit::append_remote_tag(
                                task.text_row,
                                line,
                                &created_task.id,
                            ));
                        }
                        created.push(CreatedRecord {
                            local_id: task.local_id,
                            remote_id: created_task.id,
                        });
                    }
                    Err(err) => {
                        tracing::warn!(
                            local_id = task.local_id,
                            error = %err,
                            "remote create failed"
                        );
                        failures.push(TaskFailure::remote_call(&task, &err));
                    }
                }
            }
        }

        for row in &recon.completed_rows {
            if let Some(line) = lines.get(*row) {
                edits.push(DocumentEdit::mark_completed(*row, line));
            }
        }

        tracing::info!(
            created = created.len(),
            completed = recon.completed_rows.len(),
            failed = failures.len(),
            "sync pass finished"
        );

        Ok(SyncReport {
            outcome: SyncOutcome::Synced,
            edits,
            created,
            failures,
            completed_rows: recon.completed_rows,
            anomalies: outcome.anomalies,
        })
    }
}

// Include tests
#[cfg(test)]
#[path = "sync_service_test.rs"]
mod sync_service_test;
