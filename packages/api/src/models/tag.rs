//! Tags: user-defined, color-coded labels for grouping tasks.

use serde::{Deserialize, Serialize};

/// Color used when a tag has none, or a task refers to an unknown tag.
pub const DEFAULT_TAG_COLOR: &str = "#ddd";

/// Colors offered by the tag form, as `(label, value)`.
pub const TAG_COLORS: [(&str, &str); 5] = [
    ("Light Gray", "#ddd"),
    ("Dark Gray", "#333"),
    ("Blue", "#007bff"),
    ("Green", "#28a745"),
    ("Red", "#dc3545"),
];

/// A tag owned by a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub title: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Body of `POST /v1/tags`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTag {
    pub title: String,
    pub color: String,
    pub user_id: String,
}

impl NewTag {
    /// Trims the title and substitutes [`DEFAULT_TAG_COLOR`] for a blank color.
    pub fn new(user_id: &str, title: &str, color: &str) -> Self {
        let color = color.trim();
        Self {
            title: title.trim().to_string(),
            color: if color.is_empty() {
                DEFAULT_TAG_COLOR.to_string()
            } else {
                color.to_string()
            },
            user_id: user_id.to_string(),
        }
    }
}

/// A tag as the service sends it. Every field is optional so partial create
/// responses still decode.
#[derive(Debug, Default, Deserialize)]
pub struct TagRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl TagRecord {
    fn id(&self) -> Option<String> {
        self.id
            .clone()
            .or_else(|| self.mongo_id.clone())
            .filter(|id| !id.is_empty())
    }

    /// Convert a listed tag. `None` when the record has no identifier.
    pub fn into_tag(self) -> Option<Tag> {
        let id = self.id()?;
        Some(Tag {
            id,
            title: self.title.unwrap_or_default(),
            color: self
                .color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string()),
            user_id: self.user_id,
        })
    }

    /// Convert a create response, taking missing fields from the submitted body.
    pub fn into_created(self, submitted: &NewTag) -> Option<Tag> {
        let id = self.id()?;
        Some(Tag {
            id,
            title: self.title.unwrap_or_else(|| submitted.title.clone()),
            color: self
                .color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| submitted.color.clone()),
            user_id: self.user_id.or_else(|| Some(submitted.user_id.clone())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_color_uses_default() {
        let tag = NewTag::new("u1", "  work ", " ");
        assert_eq!(tag.title, "work");
        assert_eq!(tag.color, DEFAULT_TAG_COLOR);
    }

    #[test]
    fn test_partial_create_response() {
        let submitted = NewTag::new("u1", "home", "#28a745");
        let record: TagRecord = serde_json::from_str(r#"{"id":"t9"}"#).unwrap();
        let tag = record.into_created(&submitted).unwrap();
        assert_eq!(tag.id, "t9");
        assert_eq!(tag.title, "home");
        assert_eq!(tag.color, "#28a745");
        assert_eq!(tag.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_record_without_id_is_dropped() {
        let record: TagRecord = serde_json::from_str(r##"{"title":"x","color":"#333"}"##).unwrap();
        assert!(record.into_tag().is_none());
    }
}
