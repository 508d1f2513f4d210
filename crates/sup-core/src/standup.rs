use crate::error::{Result, SupError};
use crate::raw::RawSeed;
use crate::types::{Field, Identity, Member, StandupRecord};
use serde::de::DeserializeSeed;
use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse every document in a multi-document standup file.
///
/// Empty documents are skipped. Scalars keep the text they were written
/// with, so `project: 1.10` selects as `"1.10"` and `username: 0x1F` stays
/// `"0x1F"`.
pub fn parse_records(data: &str) -> Result<Vec<StandupRecord>> {
    // The first pass resolves each document's shape; the second reads the
    // same document again as raw text along that shape.
    let shapes = serde_yaml::Deserializer::from_str(data);
    let texts = serde_yaml::Deserializer::from_str(data);
    let mut records = Vec::new();
    for (index, (shape_doc, text_doc)) in shapes.zip(texts).enumerate() {
        let shape = Value::deserialize(shape_doc)?;
        if shape.is_null() {
            continue;
        }
        let invalid = |reason: String| SupError::InvalidDocument { index, reason };
        if !shape.is_mapping() {
            return Err(invalid("expected a mapping".to_string()));
        }
        let Field::Map(fields) = RawSeed(&shape).deserialize(text_doc)? else {
            return Err(invalid("expected a mapping".to_string()));
        };
        records.push(StandupRecord::from_fields(fields).map_err(invalid)?);
    }
    tracing::debug!(count = records.len(), "parsed standup records");
    Ok(records)
}

pub fn load_records(path: &Path) -> Result<Vec<StandupRecord>> {
    if !path.exists() {
        return Err(SupError::StandupFileNotFound(path.display().to_string()));
    }
    let data = std::fs::read_to_string(path)?;
    parse_records(&data)
}

// ---------------------------------------------------------------------------
// Record selection
// ---------------------------------------------------------------------------

/// Return the last record whose project is exactly `code`.
///
/// Matching is case-sensitive and untrimmed. When several records share the
/// code, the one appearing last in the file wins.
pub fn select_project(records: Vec<StandupRecord>, code: &str) -> Result<StandupRecord> {
    records
        .into_iter()
        .filter(|r| r.project == code)
        .last()
        .ok_or_else(|| SupError::ProjectNotFound(code.to_string()))
}

/// Project codes in file order, duplicates included.
pub fn project_codes(records: &[StandupRecord]) -> Vec<&str> {
    records.iter().map(|r| r.project.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Member resolution
// ---------------------------------------------------------------------------

/// The resolution candidates: the discussion placeholder, then `members`.
///
/// Returns a new list; `members` is left as it was.
pub fn candidates(members: &[Member]) -> Vec<Member> {
    std::iter::once(Member::discussion())
        .chain(members.iter().cloned())
        .collect()
}

/// Resolve `term` to the first candidate whose name or username contains it,
/// ignoring case. The placeholder is always checked first, so an empty term
/// or anything contained in "discussion" resolves to it.
pub fn resolve_member(term: &str, members: &[Member]) -> Option<Member> {
    let found = candidates(members).into_iter().find(|m| m.matches(term));
    match &found {
        Some(m) => tracing::debug!(term, member = %m, "resolved member"),
        None => tracing::debug!(term, "no member matched"),
    }
    found
}

// ---------------------------------------------------------------------------
// Derived-field attachment
// ---------------------------------------------------------------------------

/// What to attach to a selected record before rendering.
#[derive(Debug, Clone, Default)]
pub struct Attachments<'a> {
    /// Identity for the header slot.
    pub identity: Option<&'a Identity>,
    /// Search term for the next speaker.
    pub tail: Option<&'a str>,
}

/// Attach the identity header and the resolved next speaker.
///
/// The two attachments are independent. A tail term that matches nobody
/// leaves `name_tail` empty rather than failing.
pub fn attach(record: &mut StandupRecord, attachments: &Attachments<'_>) {
    if let Some(identity) = attachments.identity {
        record.name_header = Some(identity.clone());
    }
    if let Some(term) = attachments.tail {
        record.name_tail = resolve_member(term, &record.members);
        if record.name_tail.is_none() {
            tracing::warn!(term, project = %record.project, "tail search matched no member");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
