//! Pitch-accent markers.
//!
//! Accent and pronunciation strings carry two inline glyphs: [`RISE`] marks
//! the point where pitch goes up and [`FALL`] where it drops. This module
//! splits such strings into segments and renders them as HTML with each
//! marker wrapped in a styled span.

/// Pitch rises after this point.
pub const RISE: char = '↗';

/// Pitch falls after this point.
pub const FALL: char = '↘';

/// One piece of an annotated reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentSegment<'a> {
    Text(&'a str),
    Rise,
    Fall,
}

/// Split an annotated reading into text runs and markers, in order.
///
/// Empty text runs are never produced.
pub fn segments(annotated: &str) -> Vec<AccentSegment<'_>> {
    let mut out = Vec::new();
    let mut start = 0;

    for (idx, ch) in annotated.char_indices() {
        let marker = match ch {
            RISE => AccentSegment::Rise,
            FALL => AccentSegment::Fall,
            _ => continue,
        };
        if start < idx {
            out.push(AccentSegment::Text(&annotated[start..idx]));
        }
        out.push(marker);
        start = idx + ch.len_utf8();
    }

    if start < annotated.len() {
        out.push(AccentSegment::Text(&annotated[start..]));
    }
    out
}

/// The reading with all markers removed.
pub fn strip_markers(annotated: &str) -> String {
    annotated.chars().filter(|c| *c != RISE && *c != FALL).collect()
}

/// Render an annotated reading as HTML.
///
/// Text is escaped; markers become `<span class="accent-up">↗</span>` and
/// `<span class="accent-down">↘</span>`.
pub fn render_html(annotated: &str) -> String {
    let mut html = String::with_capacity(annotated.len() * 2);
    for segment in segments(annotated) {
        match segment {
            AccentSegment::Text(text) => push_escaped(&mut html, text),
            AccentSegment::Rise => html.push_str("<span class=\"accent-up\">↗</span>"),
            AccentSegment::Fall => html.push_str("<span class=\"accent-down\">↘</span>"),
        }
    }
    html
}

/// Escape `text` for use in HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
