use async_trait::async_trait;
use chrono::{Days, NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect, Set,
    sea_query::Expr,
};
use uuid::Uuid;

use crate::db::entities::{contact_tag, interaction, tag_template};
use crate::db::model::{ContactModel, ModelError};
use crate::db::models::{ContactTag, InteractionCount, NewTag, NewTagTemplate, TagTemplate};

/// Postgres-backed model.
pub struct PgModel {
    conn: DatabaseConnection,
}

impl PgModel {
    pub fn new(conn: DatabaseConnection) -> Self {
        PgModel { conn }
    }
}

/// Row shape of the aggregated daily-count query.
#[derive(FromQueryResult)]
struct DailyCountRow {
    date: NaiveDate,
    count: i64,
}

#[async_trait]
impl ContactModel for PgModel {
    async fn create_template(&self, template: NewTagTemplate) -> Result<TagTemplate, ModelError> {
        let now = Utc::now();
        let model = tag_template::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(template.name),
            owner_id: Set(template.owner_id),
            has_rate: Set(template.has_rate),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(model.insert(&self.conn).await?.into())
    }

    async fn template_by_id(&self, id: &str) -> Result<Option<TagTemplate>, ModelError> {
        let found = tag_template::Entity::find_by_id(id.to_owned())
            .one(&self.conn)
            .await?;
        Ok(found.map(Into::into))
    }

    async fn templates_by_owner_id(&self, owner_id: &str) -> Result<Vec<TagTemplate>, ModelError> {
        let templates = tag_template::Entity::find()
            .filter(tag_template::Column::OwnerId.eq(owner_id))
            .order_by_asc(tag_template::Column::Name)
            .order_by_asc(tag_template::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(templates.into_iter().map(Into::into).collect())
    }

    async fn delete_template(&self, id: &str) -> Result<bool, ModelError> {
        let result = tag_template::Entity::delete_by_id(id.to_owned())
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn create_tag(&self, tag: NewTag) -> Result<ContactTag, ModelError> {
        let now = Utc::now();
        let model = contact_tag::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(tag.name),
            template_id: Set(tag.template_id),
            owner_id: Set(tag.owner_id),
            rate: Set(tag.rate),
            contact_id: Set(tag.contact_id),
            has_rate: Set(tag.has_rate),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(model.insert(&self.conn).await?.into())
    }

    async fn tags_by_contact_id(&self, contact_id: &str) -> Result<Vec<ContactTag>, ModelError> {
        let tags = contact_tag::Entity::find()
            .filter(contact_tag::Column::ContactId.eq(contact_id))
            .order_by_asc(contact_tag::Column::CreatedAt)
            .order_by_asc(contact_tag::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }

    async fn delete_tag(&self, id: &str) -> Result<bool, ModelError> {
        let result = contact_tag::Entity::delete_by_id(id.to_owned())
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn find_and_update_tag_rate(
        &self,
        id: &str,
        rate: f64,
    ) -> Result<Option<ContactTag>, ModelError> {
        let Some(tag) = contact_tag::Entity::find_by_id(id.to_owned())
            .one(&self.conn)
            .await?
        else {
            return Ok(None);
        };

        let mut active: contact_tag::ActiveModel = tag.into();
        active.rate = Set(rate);
        active.updated_at = Set(Utc::now());
        Ok(Some(active.update(&self.conn).await?.into()))
    }

    async fn interaction_counts(
        &self,
        owner_id: &str,
        contact_id: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<InteractionCount>, ModelError> {
        // Bucket by calendar day; the range filter stays on the raw
        // timestamp column so the index is usable.
        let day_expr = Expr::cust(r#"CAST("occurred_at" AS DATE)"#);

        let start_at = start.and_time(NaiveTime::MIN).and_utc();
        let end_at = end
            .checked_add_days(Days::new(1))
            .unwrap_or(end)
            .and_time(NaiveTime::MIN)
            .and_utc();

        let mut query = interaction::Entity::find()
            .select_only()
            .column_as(day_expr.clone(), "date")
            .column_as(interaction::Column::Id.count(), "count")
            .filter(interaction::Column::OwnerId.eq(owner_id))
            .filter(interaction::Column::OccurredAt.gte(start_at))
            .filter(interaction::Column::OccurredAt.lt(end_at));

        if let Some(contact) = contact_id {
            query = query.filter(interaction::Column::ContactId.eq(contact));
        }

        let rows = query
            .group_by(day_expr.clone())
            .order_by_asc(day_expr)
            .into_model::<DailyCountRow>()
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| InteractionCount {
                count: row.count,
                date: row.date,
            })
            .collect())
    }
}
