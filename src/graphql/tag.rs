use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, InputObject, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};

use crate::api::{self, Identity};
use crate::db::model::ContactModel;
use crate::db::models;

#[derive(InputObject)]
pub struct CreateTagTemplateInput {
    pub name: String,
    pub has_rate: bool,
}

#[derive(InputObject)]
pub struct CreateTagInput {
    pub template_id: String,
    pub contact_id: String,
    pub rate: f64,
}

#[derive(InputObject)]
pub struct DeleteTagInput {
    pub id: String,
}

#[derive(InputObject)]
pub struct DeleteTagTemplateInput {
    pub id: String,
}

#[derive(InputObject)]
pub struct RateTagInput {
    pub id: String,
    pub rate: f64,
}

/// A reusable tag definition owned by a user.
#[derive(SimpleObject)]
pub struct TagTemplate {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub has_rate: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A template applied to a specific contact.
#[derive(SimpleObject)]
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

impl From<models::TagTemplate> for TagTemplate {
    fn from(template: models::TagTemplate) -> Self {
        TagTemplate {
            id: template.id,
            name: template.name,
            owner_id: template.owner_id,
            has_rate: template.has_rate,
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}

impl From<models::ContactTag> for ContactTag {
    fn from(tag: models::ContactTag) -> Self {
        ContactTag {
            id: tag.id,
            name: tag.name,
            template_id: tag.template_id,
            owner_id: tag.owner_id,
            rate: tag.rate,
            contact_id: tag.contact_id,
            has_rate: tag.has_rate,
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        }
    }
}

pub(crate) fn gateway<'c>(
    ctx: &'c Context<'_>,
) -> Result<(&'c Arc<dyn ContactModel>, &'c Identity)> {
    let model = ctx.data::<Arc<dyn ContactModel>>()?;
    let identity = ctx.data::<Identity>()?;
    Ok((model, identity))
}

#[derive(Default)]
pub struct TagQuery;

#[Object]
impl TagQuery {
    async fn get_user_tag_templates(&self, ctx: &Context<'_>) -> Result<Vec<TagTemplate>> {
        let (model, identity) = gateway(ctx)?;
        let templates = api::tags::get_user_tag_templates(model.as_ref(), identity)
            .await
            .map_err(|e| e.extend())?;
        Ok(templates.into_iter().map(Into::into).collect())
    }

    async fn get_contact_tags(
        &self,
        ctx: &Context<'_>,
        contact_id: String,
    ) -> Result<Vec<ContactTag>> {
        let (model, identity) = gateway(ctx)?;
        let tags = api::tags::get_contact_tags(model.as_ref(), identity, &contact_id)
            .await
            .map_err(|e| e.extend())?;
        Ok(tags.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct TagMutation;

#[Object]
impl TagMutation {
    async fn create_tag_template(
        &self,
        ctx: &Context<'_>,
        create_tag_template_input: CreateTagTemplateInput,
    ) -> Result<TagTemplate> {
        let (model, identity) = gateway(ctx)?;
        let template = api::tags::create_tag_template(
            model.as_ref(),
            identity,
            create_tag_template_input.name,
            create_tag_template_input.has_rate,
        )
        .await
        .map_err(|e| e.extend())?;
        Ok(template.into())
    }

    async fn create_tag(
        &self,
        ctx: &Context<'_>,
        create_tag_input: CreateTagInput,
    ) -> Result<ContactTag> {
        let (model, identity) = gateway(ctx)?;
        let tag = api::tags::create_tag(
            model.as_ref(),
            identity,
            &create_tag_input.template_id,
            create_tag_input.contact_id,
            create_tag_input.rate,
        )
        .await
        .map_err(|e| e.extend())?;
        Ok(tag.into())
    }

    async fn delete_tag(&self, ctx: &Context<'_>, delete_tag_input: DeleteTagInput) -> Result<bool> {
        let (model, identity) = gateway(ctx)?;
        api::tags::delete_tag(model.as_ref(), identity, &delete_tag_input.id)
            .await
            .map_err(|e| e.extend())
    }

    async fn delete_tag_template(
        &self,
        ctx: &Context<'_>,
        delete_tag_template_input: DeleteTagTemplateInput,
    ) -> Result<bool> {
        let (model, identity) = gateway(ctx)?;
        api::tags::delete_tag_template(model.as_ref(), identity, &delete_tag_template_input.id)
            .await
            .map_err(|e| e.extend())
    }

    async fn rate_tag(
        &self,
        ctx: &Context<'_>,
        rate_tag_input: RateTagInput,
    ) -> Result<Option<ContactTag>> {
        let (model, identity) = gateway(ctx)?;
        let updated = api::tags::rate_tag(
            model.as_ref(),
            identity,
            &rate_tag_input.id,
            rate_tag_input.rate,
        )
        .await
        .map_err(|e| e.extend())?;
        Ok(updated.map(Into::into))
    }
}
