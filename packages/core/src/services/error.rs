//! Error types for the sync layer
//!
//! Only the initial open-task listing can fail the whole pass; everything
//! after it degrades per task. Failed tasks are collected as [`TaskFailure`]
//! records in the report so partial successes, and the document edits they
//! already earned, are never discarded.

use crate::models::{LocalId, ParsedTask};
use crate::remote::TaskServiceError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal sync errors.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Listing currently-open remote tasks failed. Without that set neither
    /// duplicate suppression nor completion detection is possible, so the
    /// pass cannot start.
    #[error("failed to list open remote tasks: {0}")]
    ListOpenTasks(#[source] TaskServiceError),
}

/// Why one task could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// The task's parent was never created remotely, so the child cannot
    /// reference it. The child is skipped, not retried.
    UnresolvedParent { parent_local_id: LocalId },

    /// The remote service rejected or failed the create call.
    RemoteCallFailure { message: String },
}

/// One task that did not make it to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFailure {
    pub local_id: LocalId,
    pub content: String,
    pub reason: FailureReason,
}

impl TaskFailure {
    /// Create an UnresolvedParent failure for `task`
    pub fn unresolved_parent(task: &ParsedTask) -> Self {
        Self {
            local_id: task.local_id,
            content: task.content.clone(),
            reason: FailureReason::UnresolvedParent {
                parent_local_id: task.parent_local_id,
            },
        }
    }

    /// Create a RemoteCallFailure for `task`
    pub fn remote_call(task: &ParsedTask, err: &TaskServiceError) -> Self {
        Self {
            local_id: task.local_id,
            content: task.content.clone(),
            reason: FailureReason::RemoteCallFailure {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> ParsedTask {
        ParsedTask {
            local_id: 5,
            parent_local_id: 2,
            remote_id: None,
            content: "Fix roof".to_string(),
            description: String::new(),
            priority: 1,
            due: None,
            text_row: 9,
        }
    }

    #[test]
    fn test_unresolved_parent_failure() {
        let failure = TaskFailure::unresolved_parent(&task());
        assert_eq!(failure.local_id, 5);
        assert_eq!(failure.content, "Fix roof");
        assert_eq!(
            failure.reason,
            FailureReason::UnresolvedParent { parent_local_id: 2 }
        );
    }

    #[test]
    fn test_remote_call_failure_carries_message() {
        let err = TaskServiceError::transport("timeout");
        let failure = TaskFailure::remote_call(&task(), &err);
        assert_eq!(
            failure.reason,
            FailureReason::RemoteCallFailure {
                message: "transport failure: timeout".to_string()
            }
        );
    }

    #[test]
    fn test_sync_error_display() {
        let err = SyncError::ListOpenTasks(TaskServiceError::transport("connection refused"));
        assert_eq!(
            format!("{}", err),
            "failed to list open remote tasks: transport failure: connection refused"
        );
    }
}
