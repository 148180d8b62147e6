//! Result rendering.
//!
//! Only the accent field has its markers styled; pronunciation and example
//! are shown as plain text, markers included.

use kansai_core::accent::{escape_html, render_html, segments, strip_markers, AccentSegment};

use crate::api::WordRecord;

const ANSI_RED: &str = "\x1b[31m";
const ANSI_BLUE: &str = "\x1b[34m";
const ANSI_RESET: &str = "\x1b[0m";

/// HTML fragment for the result pane.
pub fn result_html(record: &WordRecord) -> String {
    format!(
        "<h2 class=\"searched-word\">{}</h2>\n\
         <div class=\"accent-pattern\">{}</div>\n\
         <p class=\"pronunciation\">{}</p>\n\
         <p class=\"example\">{}</p>",
        escape_html(&record.word),
        render_html(&record.accent),
        escape_html(&record.pronunciation),
        escape_html(&record.example),
    )
}

/// Multi-line terminal rendering. With `color`, rise markers are red and
/// fall markers blue.
pub fn result_text(record: &WordRecord, color: bool) -> String {
    format!(
        "【{}】\nアクセント: {}\n発音: {}\n例文: {}",
        record.word,
        accent_text(&record.accent, color),
        record.pronunciation,
        record.example,
    )
}

/// One line per entry for listings: headword and unmarked reading.
pub fn list_line(record: &WordRecord) -> String {
    match record.id {
        Some(id) => format!("{id:>4}  {}  ({})", record.word, strip_markers(&record.pronunciation)),
        None => format!("   -  {}  ({})", record.word, strip_markers(&record.pronunciation)),
    }
}

fn accent_text(accent: &str, color: bool) -> String {
    if !color {
        return accent.to_string();
    }
    segments(accent)
        .into_iter()
        .map(|segment| match segment {
            AccentSegment::Text(text) => text.to_string(),
            AccentSegment::Rise => format!("{ANSI_RED}↗{ANSI_RESET}"),
            AccentSegment::Fall => format!("{ANSI_BLUE}↘{ANSI_RESET}"),
        })
        .collect()
}
