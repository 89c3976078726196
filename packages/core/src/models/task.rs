//! Parsed task records
//!
//! A parse pass walks the document once and produces a flat, document-ordered
//! list of [`ParsedTask`] records. Hierarchy is expressed through
//! `parent_local_id` rather than nesting, which keeps the creation loop a
//! simple iteration while still letting children reference the remote
//! identifier their parent's create call returned.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a task at parse time.
///
/// Monotonically increasing in document order, unique within one parse run,
/// and deliberately NOT stable across runs. Cross-run identity lives in the
/// remote identifier tag embedded in the document text.
pub type LocalId = u32;

/// A free-text due-date expression plus the language it is written in.
///
/// The expression is passed through verbatim to the remote service's own
/// date-language parser. Nothing here interprets it as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDate {
    /// Contiguous token captured after the due label, e.g. "2024-01-05"
    /// or "tomorrow". Expressions containing spaces are not supported.
    pub due_string: String,
    /// Language code forwarded with the expression, e.g. "en".
    pub due_lang: String,
}

/// One checklist item extracted from the document.
///
/// # Examples
///
/// ```rust
/// use marksync_core::parser::parse_document;
///
/// let outcome = parse_document("- [ ] Buy milk due: 2024-01-05 p2", "en");
/// let task = &outcome.tasks[0];
/// assert_eq!(task.content, "Buy milk");
/// assert_eq!(task.priority, 3);
/// assert_eq!(task.due.as_ref().unwrap().due_string, "2024-01-05");
/// assert!(task.is_top_level());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTask {
    /// Parse-time identifier, strictly increasing in document order.
    pub local_id: LocalId,

    /// `local_id` of the structurally enclosing task, or this task's own
    /// `local_id` when it is top-level. A parent always sits at an earlier
    /// `text_row` and a strictly shallower indent.
    pub parent_local_id: LocalId,

    /// Remote identifier already attached to the source line, if any.
    /// Tasks carrying a live remote identifier are never re-created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,

    /// Line content with all recognized notations stripped: checkbox marker,
    /// due token, priority token, remote identifier tag. Single line,
    /// trimmed. May be empty, which is reported as an anomaly.
    pub content: String,

    /// Contiguous deeper-indented follow-up lines, de-indented relative to
    /// the task's own indent and newline-joined. Lines inside fenced code
    /// blocks are captured verbatim, blank lines included.
    pub description: String,

    /// Urgency rank 1-4 where 1 is most urgent. Defaults to 4 when the line
    /// carries no priority notation.
    pub priority: u8,

    /// Optional due-date expression, forwarded untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DueDate>,

    /// Zero-based document row of the task's own line. Used to write the
    /// remote identifier tag back after creation.
    pub text_row: usize,
}

impl ParsedTask {
    /// A task is top-level when its parent reference points at itself.
    pub fn is_top_level(&self) -> bool {
        self.parent_local_id == self.local_id
    }
}

/// A task line that already carries a remote identifier tag.
///
/// Such lines were synced by a previous run. They are never re-created;
/// their only role is the completed-task check, where a tag whose identifier
/// is no longer open remotely marks the row for a checkbox flip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedRow {
    /// Zero-based document row of the tagged line.
    pub row: usize,
    /// The embedded remote identifier, digits only.
    pub remote_id: String,
}

/// Reportable oddity found during parsing. Never fatal; the task is still
/// emitted so the caller can decide whether to sync or skip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseAnomaly {
    /// A task line whose content is empty once every notation is stripped.
    EmptyContent { row: usize, local_id: LocalId },
}

impl std::fmt::Display for ParseAnomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent { row, local_id } => write!(
                f,
                "task {} at row {} cleaned to empty content",
                local_id, row
            ),
        }
    }
}

/// Everything one parse pass produces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Extracted tasks, in document order.
    pub tasks: Vec<ParsedTask>,
    /// Rows that already carry a remote identifier tag, in document order.
    pub tagged_rows: Vec<TaggedRow>,
    /// Non-fatal oddities observed while parsing.
    pub anomalies: Vec<ParseAnomaly>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_is_self_referential() {
        let task = ParsedTask {
            local_id: 3,
            parent_local_id: 3,
            remote_id: None,
            content: "Water plants".to_string(),
            description: String::new(),
            priority: 4,
            due: None,
            text_row: 0,
        };
        assert!(task.is_top_level());
    }

    #[test]
    fn test_child_is_not_top_level() {
        let task = ParsedTask {
            local_id: 4,
            parent_local_id: 3,
            remote_id: None,
            content: "Fill watering can".to_string(),
            description: String::new(),
            priority: 4,
            due: None,
            text_row: 1,
        };
        assert!(!task.is_top_level());
    }

    #[test]
    fn test_anomaly_display_names_row_and_id() {
        let anomaly = ParseAnomaly::EmptyContent { row: 7, local_id: 2 };
        assert_eq!(
            format!("{}", anomaly),
            "task 2 at row 7 cleaned to empty content"
        );
    }
}
