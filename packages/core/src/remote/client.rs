//! Abstract task-service client
//!
//! Implementations wrap a concrete tracker API; tests substitute an
//! in-memory fake. The orchestrator only ever sees this trait, so the sync
//! logic is exercised end to end without any transport.

use crate::models::ParsedTask;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by a task-service implementation.
///
/// These are reported per create call and collected by the orchestrator;
/// one failing task never aborts the whole batch.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The service rejected the payload (empty content, unknown parent, ...).
    #[error("invalid task payload: {reason}")]
    InvalidPayload { reason: String },

    /// The call never completed (connectivity, timeout, server error).
    #[error("transport failure: {reason}")]
    Transport { reason: String },
}

impl TaskServiceError {
    /// Create an InvalidPayload error
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            reason: reason.into(),
        }
    }

    /// Create a Transport error
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }
}

/// One project as listed by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteProject {
    pub id: String,
    pub name: String,
}

/// Payload for a create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTask {
    pub content: String,
    /// Urgency rank 1-4, 1 most urgent.
    pub priority: u8,
    /// Free-text due expression, interpreted by the service's own parser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    pub description: String,
    /// Remote identifier of the parent task; must already exist remotely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_remote_id: Option<String>,
}

impl CreateTask {
    /// Build the payload for a parsed task, with the parent reference the
    /// orchestrator resolved (None for top-level tasks).
    pub fn from_parsed(task: &ParsedTask, parent_remote_id: Option<String>) -> Self {
        Self {
            content: task.content.clone(),
            priority: task.priority,
            due_string: task.due.as_ref().map(|due| due.due_string.clone()),
            due_lang: task.due.as_ref().map(|due| due.due_lang.clone()),
            description: task.description.clone(),
            parent_remote_id,
        }
    }
}

/// Response of a successful create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTask {
    /// Service-assigned identifier, embedded into the document as the
    /// remote identifier tag.
    pub id: String,
}

/// Capability handed to the sync orchestrator.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// List all projects visible to the account.
    async fn list_projects(&self) -> Result<Vec<RemoteProject>, TaskServiceError>;

    /// List the identifiers of every currently-open task.
    async fn list_open_task_ids(&self) -> Result<Vec<String>, TaskServiceError>;

    /// Create one task and return its service-assigned identifier.
    async fn create_task(&self, task: CreateTask) -> Result<CreatedTask, TaskServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DueDate, ParsedTask};

    fn parsed(content: &str) -> ParsedTask {
        ParsedTask {
            local_id: 1,
            parent_local_id: 1,
            remote_id: None,
            content: content.to_string(),
            description: "notes".to_string(),
            priority: 2,
            due: Some(DueDate {
                due_string: "friday".to_string(),
                due_lang: "en".to_string(),
            }),
            text_row: 0,
        }
    }

    #[test]
    fn test_from_parsed_copies_fields() {
        let payload = CreateTask::from_parsed(&parsed("Buy milk"), Some("99".to_string()));
        assert_eq!(payload.content, "Buy milk");
        assert_eq!(payload.priority, 2);
        assert_eq!(payload.due_string, Some("friday".to_string()));
        assert_eq!(payload.due_lang, Some("en".to_string()));
        assert_eq!(payload.description, "notes");
        assert_eq!(payload.parent_remote_id, Some("99".to_string()));
    }

    #[test]
    fn test_error_messages() {
        let err = TaskServiceError::invalid_payload("content must not be empty");
        assert_eq!(
            format!("{}", err),
            "invalid task payload: content must not be empty"
        );
        let err = TaskServiceError::transport("connection refused");
        assert_eq!(format!("{}", err), "transport failure: connection refused");
    }
}
