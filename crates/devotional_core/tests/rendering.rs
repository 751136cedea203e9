use chrono::NaiveDate;
use devotional_core::entry::{AlternateEntry, DevotionalEntry};
use devotional_core::render::{self, PoemLine};

fn june_2() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date")
}

fn full_entry() -> DevotionalEntry {
    DevotionalEntry {
        day_key: Some("0602".to_string()),
        title: Some("Still Waters".to_string()),
        display_date: Some("June 2nd".to_string()),
        primary_text: Some("He leadeth me beside the still waters.".to_string()),
        verse_ref: Some("Psalm 23:2".to_string()),
        poem: Some("Line one\n\nLine three".to_string()),
        month: Some(6),
    }
}

#[test]
fn absent_entry_renders_the_fallback_set() {
    let alt = AlternateEntry {
        text: Some("ignored without an entry".to_string()),
        reference: None,
    };
    let view = render::render(None, Some(&alt), june_2());

    assert_eq!(view.header_title, "No Entry Available");
    assert_eq!(view.subtitle_date, "June 2");
    assert_eq!(view.primary_body, "There is no devotional entry for this day.");
    assert_eq!(view.verse_ref, "");
    assert!(!view.alternate_visible());
    assert!(view.poem_lines.is_empty());
    assert_eq!(view.nav_date_label, "June 2");
    assert_eq!(view.picker_text, "2025-06-02");
}

#[test]
fn poem_splits_into_lines_with_blank_flag() {
    let view = render::render(Some(&full_entry()), None, june_2());
    assert_eq!(
        view.poem_lines,
        vec![
            PoemLine {
                text: "Line one".to_string(),
                blank: false
            },
            PoemLine {
                text: String::new(),
                blank: true
            },
            PoemLine {
                text: "Line three".to_string(),
                blank: false
            },
        ]
    );
}

#[test]
fn present_entry_uses_its_fields() {
    let alt = AlternateEntry {
        text: Some("He leads me beside still waters.".to_string()),
        reference: Some("Psalm 23:2".to_string()),
    };
    let view = render::render(Some(&full_entry()), Some(&alt), june_2());

    assert_eq!(view.header_title, "Still Waters");
    assert_eq!(view.subtitle_date, "June 2nd");
    assert_eq!(view.primary_body, "He leadeth me beside the still waters.");
    assert_eq!(
        view.alternate_body.as_deref(),
        Some("He leads me beside still waters.")
    );
    assert_eq!(view.verse_ref, "Psalm 23:2");
}

#[test]
fn missing_fields_fall_back_independently() {
    let entry = DevotionalEntry {
        day_key: Some("0602".to_string()),
        verse_ref: Some("John 1:1".to_string()),
        ..DevotionalEntry::default()
    };
    let view = render::render(Some(&entry), None, june_2());

    assert_eq!(view.header_title, "Title not found");
    assert_eq!(view.subtitle_date, "June 2");
    assert_eq!(view.primary_body, "Verse not found.");
    assert_eq!(view.verse_ref, "John 1:1");
    assert_eq!(view.poem_lines.len(), 1);
    assert_eq!(view.poem_lines[0].text, "Poem not found.");
    assert!(!view.poem_lines[0].blank);
}

#[test]
fn empty_alternate_text_stays_hidden() {
    let alt = AlternateEntry {
        text: Some(String::new()),
        reference: None,
    };
    let view = render::render(Some(&full_entry()), Some(&alt), june_2());
    assert!(view.alternate_body.is_none());
}

#[test]
fn whitespace_alternate_text_is_still_shown() {
    let alt = AlternateEntry {
        text: Some("   ".to_string()),
        reference: None,
    };
    let view = render::render(Some(&full_entry()), Some(&alt), june_2());
    assert_eq!(view.alternate_body.as_deref(), Some("   "));
}

#[test]
fn load_error_view_carries_the_message() {
    let view = render::DisplayModel::load_error("unable to read data/entries.json", june_2());
    assert_eq!(view.header_title, "Error loading data.");
    assert_eq!(view.primary_body, "unable to read data/entries.json");
    assert_eq!(view.picker_text, "2025-06-02");
    assert!(view.poem_lines.is_empty());
}
