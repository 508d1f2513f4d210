use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Member
// ---------------------------------------------------------------------------

/// Name of the synthetic candidate that stands for open discussion.
pub const DISCUSSION: &str = "Discussion";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub name: String,
    pub username: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            username: Some(username.into()),
        }
    }

    /// The placeholder that is always offered first during resolution.
    pub fn discussion() -> Self {
        Self {
            name: DISCUSSION.to_string(),
            username: None,
        }
    }

    pub fn is_discussion(&self) -> bool {
        self.name == DISCUSSION && self.username.is_none()
    }

    /// Case-insensitive containment of `term` in the name or the username.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        if self.name.to_lowercase().contains(&needle) {
            return true;
        }
        self.username
            .as_deref()
            .is_some_and(|u| u.to_lowercase().contains(&needle))
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.username {
            Some(username) => write!(f, "{} ({username})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// The invoking user, as written into the header slot of a rendered standup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub username: String,
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A free-form value from the standup file, with every scalar kept exactly
/// as it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Text(String),
    List(Vec<Field>),
    Map(BTreeMap<String, Field>),
}

impl Field {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl Member {
    /// Build a member from a `members` entry.
    fn from_field(field: Field) -> Result<Self, String> {
        let Field::Map(mut map) = field else {
            return Err("expected a mapping".to_string());
        };
        let name = match map.remove("name") {
            Some(Field::Text(name)) => name,
            Some(_) => return Err("'name' must be a scalar".to_string()),
            None => return Err("missing field 'name'".to_string()),
        };
        let username = match map.remove("username") {
            None => None,
            Some(Field::Text(u)) if u.is_empty() => None,
            Some(Field::Text(u)) => Some(u),
            Some(_) => return Err("'username' must be a scalar".to_string()),
        };
        Ok(Self { name, username })
    }
}

// ---------------------------------------------------------------------------
// StandupRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandupRecord {
    pub project: String,
    pub members: Vec<Member>,
    /// Identity header, attached on request.
    pub name_header: Option<Identity>,
    /// Next speaker, attached when a tail search term is given.
    pub name_tail: Option<Member>,
    /// Every other key in the document, handed to the template untouched.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Field>,
}

impl StandupRecord {
    pub fn new(project: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            project: project.into(),
            members,
            name_header: None,
            name_tail: None,
            fields: BTreeMap::new(),
        }
    }

    /// Build a record from the top-level mapping of one document.
    ///
    /// `name_header` and `name_tail` are attachment slots, so keys of that
    /// name in the file are dropped.
    pub fn from_fields(mut fields: BTreeMap<String, Field>) -> Result<Self, String> {
        let project = match fields.remove("project") {
            Some(Field::Text(project)) => project,
            Some(_) => return Err("'project' must be a scalar".to_string()),
            None => return Err("missing field 'project'".to_string()),
        };
        let members = match fields.remove("members") {
            None => Vec::new(),
            Some(Field::Text(t)) if t.is_empty() => Vec::new(),
            Some(Field::List(items)) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| Member::from_field(item).map_err(|e| format!("members[{i}]: {e}")))
                .collect::<Result<_, _>>()?,
            Some(_) => return Err("'members' must be a list".to_string()),
        };
        fields.remove("name_header");
        fields.remove("name_tail");
        Ok(Self {
            project,
            members,
            name_header: None,
            name_tail: None,
            fields,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_name_case_insensitive() {
        let m = Member::new("Alice Smith", "asmith");
        assert!(m.matches("SMITH"));
        assert!(m.matches("lice"));
        assert!(!m.matches("bob"));
    }

    #[test]
    fn matches_username_when_present() {
        let m = Member::new("Robert", "bobby");
        assert!(m.matches("BOB"));
        assert!(!Member::discussion().matches("bobby"));
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(Member::new("x", "y").matches(""));
        assert!(Member::discussion().matches(""));
    }

    #[test]
    fn discussion_has_no_username() {
        let d = Member::discussion();
        assert_eq!(d.name, "Discussion");
        assert!(d.username.is_none());
        assert!(d.is_discussion());
        assert!(!Member::new("Discussion", "disc").is_discussion());
    }

    #[test]
    fn display_includes_username() {
        assert_eq!(Member::new("Bob", "bo").to_string(), "Bob (bo)");
        assert_eq!(Member::discussion().to_string(), "Discussion");
    }

    fn text_map(entries: &[(&str, Field)]) -> BTreeMap<String, Field> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn record_keeps_extra_fields() {
        let member = Field::Map(text_map(&[("name", "Alice".into()), ("username", "al".into())]));
        let fields = text_map(&[
            ("project", "AB001".into()),
            ("members", Field::List(vec![member])),
            ("status", "green".into()),
        ]);
        let r = StandupRecord::from_fields(fields).unwrap();
        assert_eq!(r.project, "AB001");
        assert_eq!(r.members, vec![Member::new("Alice", "al")]);
        assert_eq!(r.fields.get("status"), Some(&Field::from("green")));
        assert!(!r.fields.contains_key("project"));
        assert!(r.name_header.is_none());
        assert!(r.name_tail.is_none());
    }

    #[test]
    fn record_text_is_not_reinterpreted() {
        let member = Field::Map(text_map(&[("name", "True".into()), ("username", "~".into())]));
        let fields = text_map(&[
            ("project", "1.10".into()),
            ("members", Field::List(vec![member])),
            ("note", "~".into()),
        ]);
        let r = StandupRecord::from_fields(fields).unwrap();
        assert_eq!(r.project, "1.10");
        assert_eq!(r.members, vec![Member::new("True", "~")]);
        assert_eq!(r.fields["note"].as_text(), Some("~"));
    }

    #[test]
    fn record_empty_username_is_absent() {
        let member = Field::Map(text_map(&[("name", "Carol".into()), ("username", "".into())]));
        let fields = text_map(&[("project", "A".into()), ("members", Field::List(vec![member]))]);
        let r = StandupRecord::from_fields(fields).unwrap();
        assert!(r.members[0].username.is_none());
    }

    #[test]
    fn record_requires_scalar_project() {
        let err = StandupRecord::from_fields(text_map(&[("members", Field::List(vec![]))]))
            .unwrap_err();
        assert_eq!(err, "missing field 'project'");
        let err = StandupRecord::from_fields(text_map(&[("project", Field::List(vec![]))]))
            .unwrap_err();
        assert_eq!(err, "'project' must be a scalar");
    }

    #[test]
    fn record_drops_attachment_slots_from_input() {
        let fields = text_map(&[("project", "A".into()), ("name_tail", "Bob".into())]);
        let r = StandupRecord::from_fields(fields).unwrap();
        assert!(r.name_tail.is_none());
        assert!(r.fields.is_empty());
    }

    #[test]
    fn field_serializes_as_plain_values() {
        let f = Field::List(vec!["1.10".into(), Field::Map(text_map(&[("k", "~".into())]))]);
        assert_eq!(serde_yaml::to_string(&f).unwrap(), "- '1.10'\n- k: '~'\n");
    }
}
