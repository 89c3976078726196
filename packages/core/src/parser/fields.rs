//! Inline notation extractors
//!
//! Task lines carry informal micro-notations: a priority shorthand or glyph,
//! a due-date token, and (after a successful sync) a remote identifier tag.
//! The extractors here are purely textual, stateless, and best-effort: a
//! missing or malformed token yields the documented default rather than an
//! error. Each removal performed by [`clean_content`] is idempotent and the
//! removal order never reintroduces a previously removed token.

use regex::Regex;
use std::sync::OnceLock;

/// Priority notation: space-delimited shorthand `p1`-`p4` or one of the four
/// urgency glyphs. Only the first match on a line governs.
const PRIORITY_PATTERN: &str = r" (p[1-4]|⏫|🔼|🔽|⏬)( |$)";

/// Due-date notation: a `due: ` label or calendar glyph followed by one
/// contiguous run of word, digit, dash and dot characters. Runs cannot
/// contain spaces; that limitation is deliberate.
const DUE_PATTERN: &str = r"(?:due: |📅 )([a-zA-Z0-9\-\.]+)";

/// Unchecked checkbox marker, as it appears inside a task line.
const CHECKBOX_PATTERN: &str = r"- \[ \] ";

/// Remote identifier tag as recognized on read. The `%%...%%` comment
/// wrapper written by [`format_remote_tag`] is tolerated but not required.
const SYNC_TAG_PATTERN: &str = r"\{\{sync-id(\d+)\}\}";

/// Remote identifier tag plus its optional wrapper and leading whitespace,
/// for removal during content cleaning.
const SYNC_TAG_REMOVE_PATTERN: &str = r"\s*(?:%%)?\{\{sync-id\d+\}\}(?:%%)?";

fn priority_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PRIORITY_PATTERN).unwrap())
}

fn due_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DUE_PATTERN).unwrap())
}

fn checkbox_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CHECKBOX_PATTERN).unwrap())
}

fn sync_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SYNC_TAG_PATTERN).unwrap())
}

fn sync_tag_remove_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SYNC_TAG_REMOVE_PATTERN).unwrap())
}

/// Extract the urgency rank of a task line.
///
/// Glyphs map directly: ⏫ is 1 (most urgent) down to ⏬ at 4. The shorthand
/// digit is inverted (`p1` -> 4, `p4` -> 1) so that 1 always means most
/// urgent, matching the remote service's convention. A line without any
/// priority notation ranks 4.
///
/// # Examples
///
/// ```rust
/// use marksync_core::parser::fields::extract_priority;
///
/// assert_eq!(extract_priority("- [ ] Fix roof ⏫"), 1);
/// assert_eq!(extract_priority("- [ ] Buy milk p2"), 3);
/// assert_eq!(extract_priority("- [ ] Water plants"), 4);
/// ```
pub fn extract_priority(line: &str) -> u8 {
    let caps = match priority_regex().captures(line) {
        Some(caps) => caps,
        None => return 4,
    };
    match &caps[1] {
        "⏫" => 1,
        "🔼" => 2,
        "🔽" => 3,
        "⏬" => 4,
        shorthand => 5 - (shorthand.as_bytes()[1] - b'0'),
    }
}

/// Extract the due-date expression of a task line, label stripped.
///
/// Returns the first captured run, or `None` when the line carries no due
/// token. The run stops at the first space, so multi-word expressions are
/// truncated to their first word.
///
/// # Examples
///
/// ```rust
/// use marksync_core::parser::fields::extract_due_date;
///
/// assert_eq!(
///     extract_due_date("- [ ] Buy milk due: 2024-01-05"),
///     Some("2024-01-05".to_string())
/// );
/// assert_eq!(extract_due_date("- [ ] Water plants"), None);
/// ```
pub fn extract_due_date(line: &str) -> Option<String> {
    due_regex().captures(line).map(|caps| caps[1].to_string())
}

/// Extract the remote identifier embedded in a previously synced line.
pub fn extract_remote_id(line: &str) -> Option<String> {
    sync_tag_regex()
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Render the remote identifier tag appended to a line after creation.
pub fn format_remote_tag(remote_id: &str) -> String {
    format!("%%{{{{sync-id{}}}}}%%", remote_id)
}

/// Strip every recognized notation from a raw task line.
///
/// Removes the checkbox marker, due tokens (label and value), priority
/// tokens and remote identifier tags, collapses embedded newlines and trims
/// the result. The returned content may be empty; callers report that as an
/// anomaly.
pub fn clean_content(raw: &str) -> String {
    let cleaned = checkbox_regex().replace_all(raw, "");
    let cleaned = due_regex().replace_all(&cleaned, "");
    let cleaned = priority_regex().replace_all(&cleaned, "");
    let cleaned = sync_tag_remove_regex().replace_all(&cleaned, "");
    cleaned.replace('\n', "").trim().to_string()
}
