//! Maps a lookup result and a calendar date to the fields the reader shows.
//! Nothing here touches a UI toolkit; front ends copy the model into widgets.

use chrono::NaiveDate;
use serde::Serialize;

use crate::date_key::to_picker_text;
use crate::entry::{AlternateEntry, DevotionalEntry};

pub const TITLE_NOT_FOUND: &str = "Title not found";
pub const VERSE_NOT_FOUND: &str = "Verse not found.";
pub const POEM_NOT_FOUND: &str = "Poem not found.";
pub const NO_ENTRY_TITLE: &str = "No Entry Available";
pub const NO_ENTRY_BODY: &str = "There is no devotional entry for this day.";
pub const LOAD_ERROR_TITLE: &str = "Error loading data.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoemLine {
    pub text: String,
    pub blank: bool,
}

impl PoemLine {
    fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let blank = text.trim().is_empty();
        Self { text, blank }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayModel {
    pub header_title: String,
    pub subtitle_date: String,
    pub primary_body: String,
    /// `None` hides the alternate-translation block.
    pub alternate_body: Option<String>,
    pub verse_ref: String,
    pub poem_lines: Vec<PoemLine>,
    pub nav_date_label: String,
    pub picker_text: String,
}

impl DisplayModel {
    pub fn alternate_visible(&self) -> bool {
        self.alternate_body.is_some()
    }

    /// Shown in place of the reading when the primary dataset failed to load.
    pub fn load_error(message: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            header_title: LOAD_ERROR_TITLE.to_string(),
            subtitle_date: String::new(),
            primary_body: message.into(),
            alternate_body: None,
            verse_ref: String::new(),
            poem_lines: Vec::new(),
            nav_date_label: long_form(date),
            picker_text: to_picker_text(date),
        }
    }
}

/// Long-form date used for the subtitle and navigation label, e.g. "June 2".
pub fn long_form(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

/// Splits a poem into display lines, dropping stray carriage returns.
pub fn poem_lines(poem: &str) -> Vec<PoemLine> {
    poem.split('\n')
        .map(|line| PoemLine::new(line.replace('\r', "")))
        .collect()
}

pub fn render(
    entry: Option<&DevotionalEntry>,
    alternate: Option<&AlternateEntry>,
    date: NaiveDate,
) -> DisplayModel {
    let nav_date_label = long_form(date);
    let picker_text = to_picker_text(date);

    let Some(entry) = entry else {
        return DisplayModel {
            header_title: NO_ENTRY_TITLE.to_string(),
            subtitle_date: long_form(date),
            primary_body: NO_ENTRY_BODY.to_string(),
            alternate_body: None,
            verse_ref: String::new(),
            poem_lines: Vec::new(),
            nav_date_label,
            picker_text,
        };
    };

    let poem_lines = match non_empty(&entry.poem) {
        Some(poem) => poem_lines(poem),
        None => vec![PoemLine::new(POEM_NOT_FOUND)],
    };

    DisplayModel {
        header_title: non_empty(&entry.title)
            .unwrap_or(TITLE_NOT_FOUND)
            .to_string(),
        subtitle_date: non_empty(&entry.display_date)
            .map(str::to_string)
            .unwrap_or_else(|| long_form(date)),
        primary_body: non_empty(&entry.primary_text)
            .unwrap_or(VERSE_NOT_FOUND)
            .to_string(),
        alternate_body: alternate
            .and_then(AlternateEntry::visible_text)
            .map(str::to_string),
        verse_ref: entry.verse_ref.clone().unwrap_or_default(),
        poem_lines,
        nav_date_label,
        picker_text,
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_form_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(long_form(date), "June 2");
    }

    #[test]
    fn crlf_poem_lines_lose_carriage_returns() {
        let lines = poem_lines("a\r\n\r\nb");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "a");
        assert!(lines[1].blank);
        assert_eq!(lines[1].text, "");
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        assert!(poem_lines("   \t")[0].blank);
    }
}
