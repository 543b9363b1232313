use serde::{Deserialize, Serialize};

/// A user record as seen by callers.
///
/// `id` is unset until storage assigns one on first save. Missing JSON
/// fields decode to empty values so that validation, not decoding, rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Record {
    /// A record that has not been persisted yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), email: email.into() }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<models::record::Model> for Record {
    fn from(m: models::record::Model) -> Self {
        Self { id: Some(m.id), name: m.name, email: m.email }
    }
}
