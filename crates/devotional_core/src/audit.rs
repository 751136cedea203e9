//! Read-only integrity checks over a loaded dataset: key problems in the
//! primary entries, and gaps or likely truncation in the alternate
//! translations.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::date_key::DayKey;
use crate::entry::{AlternateEntry, DevotionalEntry};
use crate::store::EntryStore;

const VALID_ENDINGS: [char; 7] = ['.', '!', '?', '"', '\u{201D}', '\'', '\u{2019}'];
const LOW_LENGTH_RATIO: f64 = 0.5;
const HIGH_LENGTH_RATIO: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IssueKind {
    DuplicateKey,
    InvalidKey,
    MissingAlternate,
    ReferenceMismatch { entry: String, alternate: String },
    EmptyAlternate,
    LengthLow { percent: u32 },
    LengthHigh { percent: u32 },
    SuspiciousEnding { last: char },
}

impl IssueKind {
    fn label(&self) -> &'static str {
        match self {
            IssueKind::DuplicateKey => "Duplicate Key",
            IssueKind::InvalidKey => "Invalid Key",
            IssueKind::MissingAlternate => "Missing Alternate",
            IssueKind::ReferenceMismatch { .. } => "Ref Mismatch",
            IssueKind::EmptyAlternate => "Empty Text",
            IssueKind::LengthLow { .. } => "Length Warning (Low)",
            IssueKind::LengthHigh { .. } => "Length Warning (High)",
            IssueKind::SuspiciousEnding { .. } => "Suspicious Ending",
        }
    }

    fn details(&self) -> String {
        match self {
            IssueKind::DuplicateKey => "more than one entry uses this key".to_string(),
            IssueKind::InvalidKey => "key is not a month-day".to_string(),
            IssueKind::MissingAlternate => "entry has no alternate translation".to_string(),
            IssueKind::ReferenceMismatch { entry, alternate } => {
                format!("entry '{entry}' vs alternate '{alternate}'")
            }
            IssueKind::EmptyAlternate => "alternate text is empty".to_string(),
            IssueKind::LengthLow { percent } | IssueKind::LengthHigh { percent } => {
                format!("alternate is {percent}% the length of the primary text")
            }
            IssueKind::SuspiciousEnding { last } => format!("ends with '{last}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditIssue {
    pub day_key: String,
    pub kind: IssueKind,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub issues: Vec<AuditIssue>,
}

impl AuditReport {
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn for_key<'a>(&'a self, day_key: &'a str) -> impl Iterator<Item = &'a IssueKind> + 'a {
        self.issues
            .iter()
            .filter(move |issue| issue.day_key == day_key)
            .map(|issue| &issue.kind)
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<6} | {:<21} | Details", "MMDD", "Issue Type")?;
        writeln!(f, "{}", "-".repeat(80))?;
        for issue in &self.issues {
            writeln!(
                f,
                "{:<6} | {:<21} | {}",
                issue.day_key,
                issue.kind.label(),
                issue.kind.details()
            )?;
        }
        writeln!(f, "{}", "-".repeat(80))?;
        write!(f, "Audit complete. Found {} potential issues.", self.issue_count())
    }
}

pub fn audit(store: &EntryStore) -> AuditReport {
    let mut issues = Vec::new();

    for key in store.duplicate_keys() {
        issues.push(AuditIssue {
            day_key: key.to_string(),
            kind: IssueKind::DuplicateKey,
        });
    }

    let mut first_by_key: BTreeMap<DayKey, &DevotionalEntry> = BTreeMap::new();
    for entry in store.entries() {
        match entry.key() {
            Some(key) => {
                first_by_key.entry(key).or_insert(entry);
            }
            None => issues.push(AuditIssue {
                day_key: entry.raw_key().to_string(),
                kind: IssueKind::InvalidKey,
            }),
        }
    }

    for (key, entry) in first_by_key {
        let day_key = key.to_string();
        let kinds = match store.alternates().get(&key) {
            Some(alternate) => check_alternate(entry, alternate),
            None => vec![IssueKind::MissingAlternate],
        };
        issues.extend(kinds.into_iter().map(|kind| AuditIssue {
            day_key: day_key.clone(),
            kind,
        }));
    }

    issues.sort_by(|a, b| a.day_key.cmp(&b.day_key));
    AuditReport { issues }
}

fn check_alternate(entry: &DevotionalEntry, alternate: &AlternateEntry) -> Vec<IssueKind> {
    let mut kinds = Vec::new();

    let entry_ref = normalise_spaces(entry.verse_ref.as_deref().unwrap_or_default());
    let alt_ref = normalise_spaces(alternate.reference.as_deref().unwrap_or_default());
    if entry_ref != alt_ref {
        kinds.push(IssueKind::ReferenceMismatch {
            entry: entry_ref,
            alternate: alt_ref,
        });
    }

    let Some(text) = alternate
        .text
        .as_deref()
        .filter(|text| !text.trim().is_empty())
    else {
        kinds.push(IssueKind::EmptyAlternate);
        return kinds;
    };

    let primary_len = entry
        .primary_text
        .as_deref()
        .map(|t| t.chars().count())
        .unwrap_or(0);
    if primary_len > 0 {
        let ratio = text.chars().count() as f64 / primary_len as f64;
        let percent = (ratio * 100.0) as u32;
        if ratio < LOW_LENGTH_RATIO {
            kinds.push(IssueKind::LengthLow { percent });
        } else if ratio > HIGH_LENGTH_RATIO {
            kinds.push(IssueKind::LengthHigh { percent });
        }
    }

    if let Some(last) = text.trim_end().chars().last() {
        if !VALID_ENDINGS.contains(&last) {
            kinds.push(IssueKind::SuspiciousEnding { last });
        }
    }

    kinds
}

fn normalise_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
