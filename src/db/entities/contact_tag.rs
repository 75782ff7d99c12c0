use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub template_id: String,
    pub owner_id: String,
    pub rate: f64,
    pub contact_id: String,
    pub has_rate: bool,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // No cascade: a tag keeps its snapshot of the template even after
    // the template is gone.
    #[sea_orm(
        belongs_to = "super::tag_template::Entity",
        from = "Column::TemplateId",
        to = "super::tag_template::Column::Id"
    )]
    TagTemplate,
}

impl Related<super::tag_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagTemplate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
