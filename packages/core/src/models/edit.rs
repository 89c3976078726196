//! Document edits
//!
//! The engine never touches the document itself. Every change it wants is
//! expressed as a [`DocumentEdit`] and handed back to the host editor, whose
//! contract is a `replaceLineRange(startRow, startCol, endRow, endCol, text)`
//! operation. Columns count characters, not bytes.

use crate::parser::fields::format_remote_tag;
use serde::{Deserialize, Serialize};

/// A single line-range replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEdit {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
    /// Replacement text for the addressed range.
    pub text: String,
}

impl DocumentEdit {
    /// Replace the whole of `row` (currently `current_line`) with `text`.
    fn replace_line(row: usize, current_line: &str, text: String) -> Self {
        Self {
            start_row: row,
            start_col: 0,
            end_row: row,
            end_col: current_line.chars().count(),
            text,
        }
    }

    /// Append the remote identifier tag to a freshly created task's line.
    ///
    /// The tag is the durable cross-run cue that suppresses duplicate
    /// creation and enables completed-task detection.
    pub fn append_remote_tag(row: usize, current_line: &str, remote_id: &str) -> Self {
        let text = format!("{} {}", current_line, format_remote_tag(remote_id));
        Self::replace_line(row, current_line, text)
    }

    /// Flip the checkbox of a task whose remote counterpart was completed
    /// or deleted. Only the first checkbox marker changes; the rest of the
    /// line is preserved byte for byte.
    pub fn mark_completed(row: usize, current_line: &str) -> Self {
        let text = current_line.replacen("[ ]", "[x]", 1);
        Self::replace_line(row, current_line, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_remote_tag_keeps_line_and_adds_tag() {
        let edit = DocumentEdit::append_remote_tag(4, "- [ ] Buy milk", "42");
        assert_eq!(edit.start_row, 4);
        assert_eq!(edit.end_row, 4);
        assert_eq!(edit.start_col, 0);
        assert_eq!(edit.end_col, "- [ ] Buy milk".chars().count());
        assert_eq!(edit.text, "- [ ] Buy milk %%{{sync-id42}}%%");
    }

    #[test]
    fn test_mark_completed_flips_first_checkbox_only() {
        let edit = DocumentEdit::mark_completed(2, "- [ ] tick [ ] boxes");
        assert_eq!(edit.text, "- [x] tick [ ] boxes");
    }

    #[test]
    fn test_columns_count_characters_not_bytes() {
        let line = "- [ ] Café run ☕";
        let edit = DocumentEdit::mark_completed(0, line);
        assert_eq!(edit.end_col, line.chars().count());
        assert!(line.len() > line.chars().count());
    }
}
