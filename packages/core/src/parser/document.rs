//! Document Parser
//!
//! Walks the classified line stream once, top to bottom, and emits the task
//! forest. State is held in an explicit machine rather than loose variables
//! so every transition is independently testable:
//!
//! - `current` - the task whose description lines are being accumulated
//! - `in_code_block` / `fence_indent` - fenced-block tracking; entering a
//!   fence does not reset the enclosing task accumulation
//! - `ancestors` - stack of still-open `(local_id, indent)` pairs used to
//!   resolve each new task's parent
//!
//! Lines must be processed strictly in document order; the state at line n
//! depends on everything before it.

use crate::models::{DueDate, LocalId, ParseAnomaly, ParseOutcome, ParsedTask, TaggedRow};
use crate::parser::classifier::{classify, LineKind, TaskLine};
use crate::parser::fields;

#[derive(Debug)]
struct Ancestor {
    local_id: LocalId,
    indent: usize,
}

/// A task line whose description is still being collected.
#[derive(Debug)]
struct TaskAccumulator {
    local_id: LocalId,
    parent_local_id: LocalId,
    raw: String,
    indent: usize,
    text_row: usize,
    description: Vec<String>,
}

/// Line-oriented state machine producing a [`ParseOutcome`].
///
/// Feed it classified lines via [`step`](Self::step), then call
/// [`finish`](Self::finish). The [`parse_document`] helper drives the whole
/// pipeline for callers that just have text.
pub struct DocumentParser {
    due_lang: String,
    next_local_id: LocalId,
    current: Option<TaskAccumulator>,
    in_code_block: bool,
    fence_indent: usize,
    ancestors: Vec<Ancestor>,
    tasks: Vec<ParsedTask>,
    tagged_rows: Vec<TaggedRow>,
    anomalies: Vec<ParseAnomaly>,
}

impl DocumentParser {
    pub fn new(due_lang: impl Into<String>) -> Self {
        Self {
            due_lang: due_lang.into(),
            next_local_id: 1,
            current: None,
            in_code_block: false,
            fence_indent: 0,
            ancestors: Vec::new(),
            tasks: Vec::new(),
            tagged_rows: Vec::new(),
            anomalies: Vec::new(),
        }
    }

    /// Advance the machine by one classified line.
    pub fn step(&mut self, line: &TaskLine<'_>) {
        if line.kind == LineKind::CodeFence {
            if !self.in_code_block {
                self.fence_indent = line.indent;
            }
            self.in_code_block = !self.in_code_block;
            // the fence line itself belongs to the description, stripped
            // like every other line of the block
            if let Some(acc) = self.current.as_mut() {
                acc.description.push(strip_indent(line.raw, self.fence_indent));
            }
            return;
        }

        if self.in_code_block {
            // verbatim capture, blank lines included; only the enclosing
            // list indentation is removed
            if let Some(acc) = self.current.as_mut() {
                acc.description.push(strip_indent(line.raw, self.fence_indent));
            }
            return;
        }

        match line.kind {
            LineKind::Blank => self.flush(),
            LineKind::TaskMarker => self.start_task(line),
            LineKind::Bullet | LineKind::Plain => self.follow_up_line(line),
            LineKind::CodeFence => unreachable!("handled above"),
        }
    }

    /// A bullet or plain line outside any fence. Deeper lines extend the
    /// accumulating description; same or shallower depth closes the task.
    /// The line itself is not a task marker, so nothing new starts here.
    fn follow_up_line(&mut self, line: &TaskLine<'_>) {
        let task_indent = match self.current.as_ref() {
            Some(acc) => acc.indent,
            None => return,
        };
        if line.indent > task_indent {
            if let Some(acc) = self.current.as_mut() {
                acc.description.push(strip_indent(line.raw, task_indent));
            }
        } else {
            self.flush();
        }
    }

    /// Flush any trailing accumulator and hand back the outcome.
    pub fn finish(mut self) -> ParseOutcome {
        self.flush();
        ParseOutcome {
            tasks: self.tasks,
            tagged_rows: self.tagged_rows,
            anomalies: self.anomalies,
        }
    }

    fn start_task(&mut self, line: &TaskLine<'_>) {
        self.flush();

        let local_id = self.next_local_id;
        self.next_local_id += 1;

        if let Some(remote_id) = fields::extract_remote_id(line.raw) {
            // carry-over from a previous run: only a candidate for the
            // completed-task check, never a new task, never an ancestor
            self.tagged_rows.push(TaggedRow {
                row: line.row,
                remote_id,
            });
            return;
        }

        while self
            .ancestors
            .last()
            .is_some_and(|ancestor| ancestor.indent >= line.indent)
        {
            self.ancestors.pop();
        }
        let parent_local_id = self
            .ancestors
            .last()
            .map(|ancestor| ancestor.local_id)
            .unwrap_or(local_id);
        self.ancestors.push(Ancestor {
            local_id,
            indent: line.indent,
        });

        self.current = Some(TaskAccumulator {
            local_id,
            parent_local_id,
            raw: line.raw.to_string(),
            indent: line.indent,
            text_row: line.row,
            description: Vec::new(),
        });
    }

    fn flush(&mut self) {
        let acc = match self.current.take() {
            Some(acc) => acc,
            None => return,
        };

        let content = fields::clean_content(&acc.raw);
        if content.is_empty() {
            tracing::warn!(
                row = acc.text_row,
                local_id = acc.local_id,
                "task line cleaned to empty content"
            );
            self.anomalies.push(ParseAnomaly::EmptyContent {
                row: acc.text_row,
                local_id: acc.local_id,
            });
        }

        let due = fields::extract_due_date(&acc.raw).map(|due_string| DueDate {
            due_string,
            due_lang: self.due_lang.clone(),
        });

        self.tasks.push(ParsedTask {
            local_id: acc.local_id,
            parent_local_id: acc.parent_local_id,
            remote_id: None,
            content,
            description: acc.description.join("\n"),
            priority: fields::extract_priority(&acc.raw),
            due,
            text_row: acc.text_row,
        });
    }
}

/// Parse a full document in one call.
pub fn parse_document(text: &str, due_lang: &str) -> ParseOutcome {
    let mut parser = DocumentParser::new(due_lang);
    for (row, raw) in text.lines().enumerate() {
        parser.step(&classify(row, raw));
    }
    parser.finish()
}

/// Drop the first `indent` characters of a line, clipped at the line's end.
fn strip_indent(line: &str, indent: usize) -> String {
    match line.char_indices().nth(indent) {
        Some((offset, _)) => line[offset..].to_string(),
        None => String::new(),
    }
}

// Include tests
#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;
