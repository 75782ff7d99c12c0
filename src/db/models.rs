use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::db::entities::{contact_tag, tag_template};

/// A reusable tag definition owned by a user. `has_rate` decides whether
/// tags stamped from it carry a meaningful rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagTemplate {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub has_rate: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A template applied to a specific contact. `name`, `owner_id` and
/// `has_rate` are copied from the template at creation time and never
/// re-synchronised afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactTag {
    pub id: String,
    pub name: String,
    pub template_id: String,
    pub owner_id: String,
    pub rate: f64,
    pub contact_id: String,
    pub has_rate: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Interactions on a single calendar day, as consumed by the heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionCount {
    pub count: i64,
    pub date: NaiveDate,
}

/// Parameters for creating a tag template.
#[derive(Debug, Clone)]
pub struct NewTagTemplate {
    pub name: String,
    pub owner_id: String,
    pub has_rate: bool,
}

/// Parameters for creating a contact tag. The denormalised fields
/// (`name`, `owner_id`, `has_rate`) must already be resolved from the
/// template by the caller.
#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: String,
    pub template_id: String,
    pub owner_id: String,
    pub rate: f64,
    pub contact_id: String,
    pub has_rate: bool,
}

impl From<tag_template::Model> for TagTemplate {
    fn from(model: tag_template::Model) -> Self {
        TagTemplate {
            id: model.id,
            name: model.name,
            owner_id: model.owner_id,
            has_rate: model.has_rate,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<contact_tag::Model> for ContactTag {
    fn from(model: contact_tag::Model) -> Self {
        ContactTag {
            id: model.id,
            name: model.name,
            template_id: model.template_id,
            owner_id: model.owner_id,
            rate: model.rate,
            contact_id: model.contact_id,
            has_rate: model.has_rate,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
