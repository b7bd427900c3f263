use super::INVITE_FIELD;

/// Value of a single form entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File {
        file_name: String,
        content_type: Option<String>,
        size: usize,
    },
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            FieldValue::File { .. } => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Named entries of a submitted form, in document order.
///
/// Duplicate names are allowed, as in a browser `FormData`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    entries: Vec<(String, FieldValue)>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invite code as received; an empty value means none was given.
    pub fn invite(&self) -> Option<&str> {
        self.get(INVITE_FIELD)
            .and_then(FieldValue::as_text)
            .filter(|code| !code.is_empty())
    }
}

/// String the page sends as the invite field.
///
/// An absent code still produces the field, with an empty value.
pub fn invite_wire_value(invite: Option<&str>) -> &str {
    invite.unwrap_or("")
}
