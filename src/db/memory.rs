use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::db::model::{ContactModel, ModelError};
use crate::db::models::{ContactTag, InteractionCount, NewTag, NewTagTemplate, TagTemplate};

struct StoredInteraction {
    owner_id: String,
    contact_id: String,
    occurred_at: DateTime<Utc>,
}

/// In-memory model. Backs the test suites and lets a development
/// environment run without Postgres.
#[derive(Default)]
pub struct MemoryModel {
    templates: DashMap<String, TagTemplate>,
    tags: DashMap<String, ContactTag>,
    interactions: DashMap<String, StoredInteraction>,
}

impl MemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an interaction. Interactions are written by the activity
    /// pipeline in production; this is the seam tests use instead.
    pub fn record_interaction(&self, owner_id: &str, contact_id: &str, occurred_at: DateTime<Utc>) {
        self.interactions.insert(
            Uuid::new_v4().to_string(),
            StoredInteraction {
                owner_id: owner_id.to_owned(),
                contact_id: contact_id.to_owned(),
                occurred_at,
            },
        );
    }
}

#[async_trait]
impl ContactModel for MemoryModel {
    async fn create_template(&self, template: NewTagTemplate) -> Result<TagTemplate, ModelError> {
        let now = Utc::now();
        let created = TagTemplate {
            id: Uuid::new_v4().to_string(),
            name: template.name,
            owner_id: template.owner_id,
            has_rate: template.has_rate,
            created_at: now,
            updated_at: now,
        };
        self.templates.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn template_by_id(&self, id: &str) -> Result<Option<TagTemplate>, ModelError> {
        Ok(self.templates.get(id).map(|entry| entry.value().clone()))
    }

    async fn templates_by_owner_id(&self, owner_id: &str) -> Result<Vec<TagTemplate>, ModelError> {
        let mut templates: Vec<TagTemplate> = self
            .templates
            .iter()
            .filter(|entry| entry.value().owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(templates)
    }

    async fn delete_template(&self, id: &str) -> Result<bool, ModelError> {
        Ok(self.templates.remove(id).is_some())
    }

    async fn create_tag(&self, tag: NewTag) -> Result<ContactTag, ModelError> {
        let now = Utc::now();
        let created = ContactTag {
            id: Uuid::new_v4().to_string(),
            name: tag.name,
            template_id: tag.template_id,
            owner_id: tag.owner_id,
            rate: tag.rate,
            contact_id: tag.contact_id,
            has_rate: tag.has_rate,
            created_at: now,
            updated_at: now,
        };
        self.tags.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn tags_by_contact_id(&self, contact_id: &str) -> Result<Vec<ContactTag>, ModelError> {
        let mut tags: Vec<ContactTag> = self
            .tags
            .iter()
            .filter(|entry| entry.value().contact_id == contact_id)
            .map(|entry| entry.value().clone())
            .collect();
        tags.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(tags)
    }

    async fn delete_tag(&self, id: &str) -> Result<bool, ModelError> {
        Ok(self.tags.remove(id).is_some())
    }

    async fn find_and_update_tag_rate(
        &self,
        id: &str,
        rate: f64,
    ) -> Result<Option<ContactTag>, ModelError> {
        let Some(mut entry) = self.tags.get_mut(id) else {
            return Ok(None);
        };
        entry.rate = rate;
        entry.updated_at = Utc::now();
        Ok(Some(entry.value().clone()))
    }

    async fn interaction_counts(
        &self,
        owner_id: &str,
        contact_id: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<InteractionCount>, ModelError> {
        let mut per_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for entry in self.interactions.iter() {
            let interaction = entry.value();
            if interaction.owner_id != owner_id {
                continue;
            }
            if let Some(contact) = contact_id {
                if interaction.contact_id != contact {
                    continue;
                }
            }
            let day = interaction.occurred_at.date_naive();
            if day < start || day > end {
                continue;
            }
            *per_day.entry(day).or_insert(0) += 1;
        }
        Ok(per_day
            .into_iter()
            .map(|(date, count)| InteractionCount { count, date })
            .collect())
    }
}
