use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::db::models::{ContactTag, InteractionCount, NewTag, NewTagTemplate, TagTemplate};

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(err: sea_orm::DbErr) -> Self {
        ModelError::Database(err.to_string())
    }
}

/// The data-access seam the gateway operations delegate to. Ownership
/// checks beyond "who is asking" live behind this trait, not in front
/// of it.
#[async_trait]
pub trait ContactModel: Send + Sync {
    async fn create_template(&self, template: NewTagTemplate) -> Result<TagTemplate, ModelError>;

    async fn template_by_id(&self, id: &str) -> Result<Option<TagTemplate>, ModelError>;

    async fn templates_by_owner_id(&self, owner_id: &str) -> Result<Vec<TagTemplate>, ModelError>;

    /// Returns whether a template row was actually removed.
    async fn delete_template(&self, id: &str) -> Result<bool, ModelError>;

    async fn create_tag(&self, tag: NewTag) -> Result<ContactTag, ModelError>;

    async fn tags_by_contact_id(&self, contact_id: &str) -> Result<Vec<ContactTag>, ModelError>;

    /// Returns whether a tag row was actually removed.
    async fn delete_tag(&self, id: &str) -> Result<bool, ModelError>;

    /// Updates the rate of an existing tag; `None` when the id is
    /// unknown.
    async fn find_and_update_tag_rate(
        &self,
        id: &str,
        rate: f64,
    ) -> Result<Option<ContactTag>, ModelError>;

    /// Daily interaction counts within `[start, end]`, scoped to the
    /// owner and optionally narrowed to one contact. Days without
    /// interactions are omitted.
    async fn interaction_counts(
        &self,
        owner_id: &str,
        contact_id: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<InteractionCount>, ModelError>;
}
