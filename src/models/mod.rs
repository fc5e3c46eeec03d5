use serde::{Deserialize, Serialize};

/// A single user-authored note.
///
/// Persisted as `{ "id", "title", "body", "updatedAt" }`; the camel-cased
/// timestamp field is the on-disk contract and must not be renamed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,

    /// Milliseconds since the Unix epoch of the last title/body change.
    #[serde(rename = "updatedAt")]
    pub updated_at: i64,
}

impl Note {
    /// A fresh note with empty title and body.
    pub fn blank(id: String, now_ms: i64) -> Self {
        Self {
            id,
            title: String::new(),
            body: String::new(),
            updated_at: now_ms,
        }
    }
}
