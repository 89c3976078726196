//! Line Classifier
//!
//! Classifies one raw document line into its structural kind and indent
//! depth. Classification is stateless; whether a line sits inside a fenced
//! code block is the document parser's business, not the classifier's.
//!
//! Checked (`[x]`) items are intentionally NOT classified as task markers.
//! Only open items are eligible for sync; completion is discovered through
//! absence from the remote open-task set, never by scanning checkbox state.

use regex::Regex;
use std::sync::OnceLock;

/// Fenced code block delimiter: three backticks, optional language tag,
/// alone on the line. The leading whitespace is the fence's reference
/// indent.
const FENCE_PATTERN: &str = r"^(\s*)```([a-zA-Z0-9]+)?$";

/// Open, unchecked checkbox item. The leading whitespace-and-dash run is
/// the structural indent.
const TASK_MARKER_PATTERN: &str = r"^(\s*-+) \[ \] ";

/// Generic bullet line, same indent rule as task markers.
const BULLET_PATTERN: &str = r"^(\s*-+)\s*";

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FENCE_PATTERN).unwrap())
}

fn task_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TASK_MARKER_PATTERN).unwrap())
}

fn bullet_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BULLET_PATTERN).unwrap())
}

/// Structural kind of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace-only line.
    Blank,
    /// Fenced code block delimiter.
    CodeFence,
    /// Open checkbox item, eligible to become a task.
    TaskMarker,
    /// Bullet or dash line that is not an open checkbox item.
    Bullet,
    /// Anything else. Plain lines always report indent 0.
    Plain,
}

/// One classified line, borrowed from the document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine<'a> {
    /// The raw line, untrimmed.
    pub raw: &'a str,
    /// Zero-based row in the document.
    pub row: usize,
    pub kind: LineKind,
    /// Length of the leading whitespace-and-dash run (fence: whitespace
    /// only), used to infer nesting.
    pub indent: usize,
}

/// Classify one line. First match wins, in the order: blank, code fence,
/// task marker, bullet, plain.
pub fn classify(row: usize, raw: &str) -> TaskLine<'_> {
    if raw.trim().is_empty() {
        return TaskLine {
            raw,
            row,
            kind: LineKind::Blank,
            indent: 0,
        };
    }
    if let Some(caps) = fence_regex().captures(raw) {
        return TaskLine {
            raw,
            row,
            kind: LineKind::CodeFence,
            indent: caps[1].len(),
        };
    }
    if let Some(caps) = task_marker_regex().captures(raw) {
        return TaskLine {
            raw,
            row,
            kind: LineKind::TaskMarker,
            indent: caps[1].len(),
        };
    }
    if let Some(caps) = bullet_regex().captures(raw) {
        return TaskLine {
            raw,
            row,
            kind: LineKind::Bullet,
            indent: caps[1].len(),
        };
    }
    TaskLine {
        raw,
        row,
        kind: LineKind::Plain,
        indent: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(raw: &str) -> LineKind {
        classify(0, raw).kind
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(kind_of(""), LineKind::Blank);
        assert_eq!(kind_of("   \t"), LineKind::Blank);
    }

    #[test]
    fn test_fence_with_and_without_language() {
        assert_eq!(kind_of("```"), LineKind::CodeFence);
        assert_eq!(kind_of("```rust"), LineKind::CodeFence);
        // trailing prose disqualifies the line as a delimiter
        assert_eq!(kind_of("``` not a fence"), LineKind::Plain);
    }

    #[test]
    fn test_fence_reference_indent_is_leading_whitespace() {
        let line = classify(3, "  ```python");
        assert_eq!(line.kind, LineKind::CodeFence);
        assert_eq!(line.indent, 2);
    }

    #[test]
    fn test_task_marker_indent_counts_whitespace_and_dashes() {
        let top = classify(0, "- [ ] Buy milk");
        assert_eq!(top.kind, LineKind::TaskMarker);
        assert_eq!(top.indent, 1);

        let nested = classify(1, "  - [ ] Skim it first");
        assert_eq!(nested.kind, LineKind::TaskMarker);
        assert_eq!(nested.indent, 3);
    }

    #[test]
    fn test_checked_items_are_bullets_not_task_markers() {
        assert_eq!(kind_of("- [x] already done"), LineKind::Bullet);
    }

    #[test]
    fn test_bullet_without_checkbox() {
        let line = classify(0, "  - just a note");
        assert_eq!(line.kind, LineKind::Bullet);
        assert_eq!(line.indent, 3);
    }

    #[test]
    fn test_plain_text_has_zero_indent() {
        let line = classify(0, "    indented prose without a dash");
        assert_eq!(line.kind, LineKind::Plain);
        assert_eq!(line.indent, 0);
    }
}
