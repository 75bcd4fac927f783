//! # Tag store
//!
//! [`TagStore`] issues tag requests for one signed-in user; [`TagCache`] is the
//! list the views render. A successful request yields a [`TagChange`], which the
//! caller applies to its cache before closing the form that issued it.

use api::{NewTag, Tag, TodoService, DEFAULT_TAG_COLOR};

use crate::error::StoreError;
use crate::session::SessionState;

/// A server-confirmed change to the tag list.
#[derive(Clone, Debug, PartialEq)]
pub enum TagChange {
    /// The full list for the user, replacing the cache.
    Loaded(Vec<Tag>),
    /// A newly created tag.
    Created(Tag),
}

/// Locally cached tags, in service order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagCache {
    tags: Vec<Tag>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, tag_id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == tag_id)
    }

    /// Display color for a task's tag; the default color for no or unknown tag.
    pub fn color_of(&self, tag_id: Option<&str>) -> &str {
        tag_id
            .and_then(|id| self.get(id))
            .map_or(DEFAULT_TAG_COLOR, |t| t.color.as_str())
    }

    pub fn apply(&mut self, change: TagChange) {
        match change {
            TagChange::Loaded(tags) => self.tags = tags,
            TagChange::Created(tag) => match self.tags.iter_mut().find(|t| t.id == tag.id) {
                Some(existing) => *existing = tag,
                None => self.tags.push(tag),
            },
        }
    }
}

/// Tag requests scoped to one user.
#[derive(Clone, Debug)]
pub struct TagStore<S: TodoService> {
    service: S,
    user_id: String,
}

impl<S: TodoService> TagStore<S> {
    pub fn new(service: S, user_id: impl Into<String>) -> Self {
        Self {
            service,
            user_id: user_id.into(),
        }
    }

    /// `None` when nobody is signed in: there is nothing to fetch.
    pub fn for_session(service: S, session: &SessionState) -> Option<Self> {
        session.user_id().map(|id| Self::new(service, id))
    }

    pub async fn load(&self) -> Result<TagChange, StoreError> {
        let tags = self.service.list_tags(&self.user_id).await.map_err(|e| {
            tracing::error!("Failed to fetch tags: {}", e);
            e
        })?;
        tracing::debug!("Fetched {} tag(s)", tags.len());
        Ok(TagChange::Loaded(tags))
    }

    /// Create a tag. A blank color falls back to the default.
    pub async fn create(&self, title: &str, color: &str) -> Result<TagChange, StoreError> {
        let tag = NewTag::new(&self.user_id, title, color);
        if tag.title.is_empty() {
            return Err(StoreError::Validation("Tag name is required".to_string()));
        }
        let created = self.service.create_tag(&tag).await.map_err(|e| {
            tracing::error!("Failed to create tag {}: {}", tag.title, e);
            e
        })?;
        tracing::info!("Created tag {}", created.id);
        Ok(TagChange::Created(created))
    }
}
