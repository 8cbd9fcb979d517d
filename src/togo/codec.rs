//! # Line Codec
//!
//! Pure conversion between one raw todo.txt line and a [`Task`]. Nothing in
//! here touches the filesystem.
//!
//! ## Decoding
//!
//! Decoding consumes the line left to right:
//!
//! 1. A leading `x ` marks the task as done and is stripped.
//! 2. With [`CodecOptions::parse_priority`] on, a leading `(A) ` sets the
//!    priority and is stripped. It is off by default.
//! 3. The rest is scanned for `YYYY-MM-DD` tokens that are real calendar
//!    dates. On a done task the first two become the completion and creation
//!    dates. Otherwise only the first is taken, as the creation date. Each
//!    taken date is cut out together with one following space. A completion
//!    date only ever exists on a done task, so on an open line such as
//!    `2021-01-01 2021-01-02 foo` the second date stays in the subject.
//! 4. Whatever is left is the subject, untouched.
//!
//! Decoding never fails. Anything it does not recognize stays in the subject.
//!
//! ## Encoding
//!
//! Encoding emits the present fields in canonical order, separated by single
//! spaces:
//!
//! ```text
//! ["x"] ["(A)"] [completion-date] [creation-date] [subject]
//! ```
//!
//! The priority segment is only written when `parse_priority` is on, so in
//! the default mode encode and decode are not inverses for priority. They are
//! for the done flag, both dates and a subject without date-shaped text.

use crate::model::Task;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

const DONE_MARKER: &str = "x ";
const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid date regex"));

/// Knobs for the codec, threaded in from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// Recognize and emit the `(A)` priority tag.
    pub parse_priority: bool,
}

/// Decodes a line with the default options.
pub fn decode(line: &str) -> Task {
    decode_with(line, CodecOptions::default())
}

pub fn decode_with(line: &str, options: CodecOptions) -> Task {
    let mut task = Task::default();
    let mut rest = line;

    if let Some(stripped) = rest.strip_prefix(DONE_MARKER) {
        task.done = true;
        rest = stripped;
    }

    if options.parse_priority {
        if let Some((priority, stripped)) = split_priority(rest) {
            task.priority = Some(priority);
            rest = stripped;
        }
    }

    let wanted = if task.done { 2 } else { 1 };
    let dates = find_dates(rest, wanted);
    match dates.as_slice() {
        [] => {}
        [(_, creation)] => task.creation_date = Some(*creation),
        [(_, completion), (_, creation), ..] => {
            task.completion_date = Some(*completion);
            task.creation_date = Some(*creation);
        }
    }

    task.subject = cut_spans(rest, dates.iter().map(|(span, _)| span.clone()));
    task
}

/// Encodes a task with the default options.
pub fn encode(task: &Task) -> String {
    encode_with(task, CodecOptions::default())
}

pub fn encode_with(task: &Task, options: CodecOptions) -> String {
    let mut parts: Vec<String> = Vec::new();

    if task.done {
        parts.push("x".to_string());
    }
    if options.parse_priority {
        if let Some(priority) = task.priority {
            parts.push(format!("({})", priority));
        }
    }
    if let Some(date) = task.completion_date {
        parts.push(format_date(date));
    }
    if let Some(date) = task.creation_date {
        parts.push(format_date(date));
    }
    if !task.subject.is_empty() {
        parts.push(task.subject.clone());
    }

    parts.join(" ")
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Splits a leading `(X)` priority tag off `text`.
///
/// The tag must be one uppercase ASCII letter and be followed by a space or
/// the end of the text.
pub fn split_priority(text: &str) -> Option<(char, &str)> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'(' || bytes[2] != b')' {
        return None;
    }
    let letter = bytes[1];
    if !letter.is_ascii_uppercase() {
        return None;
    }

    let after = &text[3..];
    if after.is_empty() {
        return Some((letter as char, after));
    }
    after
        .strip_prefix(' ')
        .map(|stripped| (letter as char, stripped))
}

/// First `limit` valid dates in `text`, each with the span to cut (the date
/// plus one trailing space when there is one).
fn find_dates(text: &str, limit: usize) -> Vec<(Range<usize>, NaiveDate)> {
    DATE_RE
        .find_iter(text)
        .filter_map(|m| {
            let date = NaiveDate::parse_from_str(m.as_str(), DATE_FORMAT).ok()?;
            let end = if text[m.end()..].starts_with(' ') {
                m.end() + 1
            } else {
                m.end()
            };
            Some((m.start()..end, date))
        })
        .take(limit)
        .collect()
}

fn cut_spans<I: IntoIterator<Item = Range<usize>>>(text: &str, spans: I) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
