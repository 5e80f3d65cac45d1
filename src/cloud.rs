//! Cloud layout: scale each ranked word between the smallest and largest count,
//! assign colors, and render the HTML fragment the page inserts.

use std::fmt::Write;

use crate::analyzer::RankedEntry;
use crate::config::CloudStyle;

/// Cyclic color palette, picked by position.
pub const PALETTE: [&str; 16] = [
    "#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe", "#00f2fe", "#43e97b", "#38f9d7",
    "#ffecd2", "#fcb69f", "#a8edea", "#fed6e3", "#d299c2", "#fef9d7", "#667eea", "#764ba2",
];

/// Shown when there is nothing to draw.
pub const EMPTY_MESSAGE: &str = "No words found to display. Try adding more text!";

/// A ranked word with everything needed to draw it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DisplayEntry {
    pub word: String,
    pub count: u32,
    /// 0.0 for the least frequent word, 1.0 for the most frequent.
    pub scale: f64,
    pub font_size: f64,
    pub color_index: usize,
    pub color: &'static str,
    pub title: String,
}

/// Notification text for a word, e.g. `"cloud" appears 2 times`.
pub fn describe(word: &str, count: u32) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("\"{word}\" appears {count} time{plural}")
}

/// Lay out a ranked list. Order and counts are kept as given.
pub fn layout(entries: &[RankedEntry], style: &CloudStyle) -> Vec<DisplayEntry> {
    let Some(max) = entries.iter().map(|e| e.count).max() else {
        return Vec::new();
    };
    let min = entries.iter().map(|e| e.count).min().unwrap_or(max);
    let span = max - min;
    let range = style.max_font_rem - style.min_font_rem;

    entries
        .iter()
        .enumerate()
        .map(|(index, e)| {
            let scale = if span == 0 {
                1.0
            } else {
                f64::from(e.count - min) / f64::from(span)
            };
            let color_index = index % PALETTE.len();
            DisplayEntry {
                word: e.word.clone(),
                count: e.count,
                scale,
                font_size: style.min_font_rem + scale * range,
                color_index,
                color: PALETTE[color_index],
                title: describe(&e.word, e.count),
            }
        })
        .collect()
}

/// Render the layout as `<span class="cloud-word">` elements, or the
/// placeholder paragraph when empty.
///
/// Words are lowercase ASCII letters, so they need no escaping; the title
/// only adds double quotes, which are written as `&quot;`.
pub fn render_html(layout: &[DisplayEntry]) -> String {
    if layout.is_empty() {
        return format!("<p class=\"placeholder-text\">{EMPTY_MESSAGE}</p>");
    }
    let mut html = String::new();
    for (index, d) in layout.iter().enumerate() {
        let _ = write!(
            html,
            "<span class=\"cloud-word\" data-word=\"{word}\" data-count=\"{count}\" \
             title=\"{title}\" style=\"font-size: {size:.3}rem; color: {color}; \
             animation-delay: {delay:.1}s; cursor: pointer;\">{word}</span>",
            word = d.word,
            count = d.count,
            title = d.title.replace('"', "&quot;"),
            size = d.font_size,
            color = d.color,
            delay = index as f64 * 0.1,
        );
    }
    html
}
