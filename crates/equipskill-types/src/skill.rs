use crate::SkillId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A skill as stored in the host database
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillRecord {
    pub id: SkillId,
    #[serde(default)]
    pub name: String,
    /// Free text authored by content designers; carries the `<Key:value>` tags
    #[serde(default)]
    pub note: String,
    /// Tags extracted from `note`
    #[serde(default)]
    pub meta: HashMap<String, String>,
}

impl SkillRecord {
    pub fn new(id: u32) -> Self {
        Self {
            id: SkillId(id),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }
}
