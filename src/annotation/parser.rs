//! Parser for annotation lines such as `// TODO [ui][layout]: fix padding`.
//!
//! # Grammar
//!
//! ```text
//! <anything> COMMENT STATUS [tag1][tag2]... : message
//! ```
//!
//! - `COMMENT` is a comment introducer: `//`, `/*`, `#`, `--`, or a `*`
//!   opening a block comment continuation line. Only whitespace may sit
//!   between it and `STATUS`.
//! - `STATUS` is exactly `TODO` or `DONE` as a whole word.
//! - Each tag is `[text]` where `text` is non-empty and contains no `]`.
//!   Whitespace between groups is allowed.
//! - The message is everything after the colon, trimmed, and must not be
//!   empty.
//!
//! When the text between `STATUS` and the first colon starts with `[` but is
//! not a run of well-formed tag groups (for example `TODO[notclosed: msg`),
//! the line still parses, with no tags and the raw text folded into the
//! message.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::domain::{Status, Tag};

static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{COMMENT_INTRO}\b(TODO|DONE)\b[ \t]*((?:\[[^\]]+\][ \t]*)*):(.*)"
    ))
    .expect("annotation regex is valid")
});

static MALFORMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{COMMENT_INTRO}\b(TODO|DONE)\b[ \t]*(\[[^:]*):(.*)"))
        .expect("malformed regex is valid")
});

/// Comment introducers accepted before the status token.
const COMMENT_INTRO: &str = r"(?://|/\*|#|--|^[ \t]*\*)[ \t]*";

static TAG_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("tag regex is valid"));

static TAG_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\[[^\]]+\][ \t]*)*$").expect("tag run regex is valid")
});

/// Fields extracted from one annotation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub status: Status,
    /// Byte range of the `TODO`/`DONE` token within the line.
    pub status_range: Range<usize>,
    pub tags: Vec<Tag>,
    pub message: String,
}

/// Parses a single line of text.
///
/// Returns `None` if the line is not an annotation.
///
/// ```
/// use todoly::annotation::parse_line;
/// use todoly::domain::Status;
///
/// let parsed = parse_line("// DONE [API][Auth]: rotate keys").unwrap();
/// assert_eq!(parsed.status, Status::Done);
/// assert_eq!(parsed.tags[0].as_str(), "api");
/// assert_eq!(parsed.message, "rotate keys");
///
/// assert!(parse_line("let todo = 1;").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    parse_well_formed(line).or_else(|| parse_malformed(line))
}

fn parse_well_formed(line: &str) -> Option<ParsedLine> {
    let caps = ANNOTATION.captures(line)?;
    let status_match = caps.get(1)?;
    let message = caps.get(3)?.as_str().trim();
    if message.is_empty() {
        return None;
    }

    let tags = caps
        .get(2)
        .map(|m| parse_tags(m.as_str()))
        .unwrap_or_default();

    Some(ParsedLine {
        status: Status::from_token(status_match.as_str())?,
        status_range: status_match.range(),
        tags,
        message: message.to_string(),
    })
}

fn parse_malformed(line: &str) -> Option<ParsedLine> {
    let caps = MALFORMED.captures(line)?;
    let status_match = caps.get(1)?;
    let bracket_text = caps.get(2)?.as_str().trim_end();

    // Well-formed groups mean the strict grammar rejected the line for
    // another reason (an empty message), not because of tag syntax.
    if TAG_RUN.is_match(bracket_text) {
        return None;
    }

    let message = line[status_match.end()..].trim();

    Some(ParsedLine {
        status: Status::from_token(status_match.as_str())?,
        status_range: status_match.range(),
        tags: Vec::new(),
        message: message.to_string(),
    })
}

/// Extracts tags from a run of bracket groups, preserving order.
fn parse_tags(raw: &str) -> Vec<Tag> {
    TAG_GROUP
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| Tag::new(m.as_str()).ok())
        .collect()
}
