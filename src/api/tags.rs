use crate::api::{ApiError, Identity, require_login};
use crate::db::model::ContactModel;
use crate::db::models::{ContactTag, NewTag, NewTagTemplate, TagTemplate};

/// Creates a tag template owned by the caller.
pub async fn create_tag_template(
    model: &dyn ContactModel,
    identity: &Identity,
    name: String,
    has_rate: bool,
) -> Result<TagTemplate, ApiError> {
    let user_id = require_login(identity, "createTagTemplate")?;
    let template = model
        .create_template(NewTagTemplate {
            name,
            owner_id: user_id.to_owned(),
            has_rate,
        })
        .await?;
    Ok(template)
}

/// Applies a template to a contact. `name`, `owner_id` and `has_rate`
/// are taken from the template as it stands right now; later template
/// edits do not reach existing tags.
pub async fn create_tag(
    model: &dyn ContactModel,
    identity: &Identity,
    template_id: &str,
    contact_id: String,
    rate: f64,
) -> Result<ContactTag, ApiError> {
    require_login(identity, "createTag")?;
    let template = model
        .template_by_id(template_id)
        .await?
        .ok_or_else(|| ApiError::Validation("no template found".to_owned()))?;
    let tag = model
        .create_tag(NewTag {
            name: template.name,
            template_id: template.id,
            owner_id: template.owner_id,
            rate,
            contact_id,
            has_rate: template.has_rate,
        })
        .await?;
    Ok(tag)
}

/// Deletes a tag; `true` when a record was actually removed.
pub async fn delete_tag(
    model: &dyn ContactModel,
    identity: &Identity,
    id: &str,
) -> Result<bool, ApiError> {
    require_login(identity, "deleteTag")?;
    Ok(model.delete_tag(id).await?)
}

/// Deletes a tag template; `true` when a record was actually removed.
/// Tags stamped from it keep their snapshot.
pub async fn delete_tag_template(
    model: &dyn ContactModel,
    identity: &Identity,
    id: &str,
) -> Result<bool, ApiError> {
    require_login(identity, "deleteTagTemplate")?;
    Ok(model.delete_template(id).await?)
}

/// Updates the rate of a tag. An unknown id yields `None`, not an
/// error.
pub async fn rate_tag(
    model: &dyn ContactModel,
    identity: &Identity,
    id: &str,
    rate: f64,
) -> Result<Option<ContactTag>, ApiError> {
    require_login(identity, "rateTag")?;
    Ok(model.find_and_update_tag_rate(id, rate).await?)
}

/// Lists the templates owned by the caller.
pub async fn get_user_tag_templates(
    model: &dyn ContactModel,
    identity: &Identity,
) -> Result<Vec<TagTemplate>, ApiError> {
    let user_id = require_login(identity, "getUserTagTemplates")?;
    Ok(model.templates_by_owner_id(user_id).await?)
}

/// Lists the tags attached to a contact.
pub async fn get_contact_tags(
    model: &dyn ContactModel,
    identity: &Identity,
    contact_id: &str,
) -> Result<Vec<ContactTag>, ApiError> {
    require_login(identity, "getContactTags")?;
    Ok(model.tags_by_contact_id(contact_id).await?)
}
