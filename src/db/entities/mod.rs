//! SeaORM entities mapping to database tables, one module per table.

pub mod contact_tag;
pub mod interaction;
pub mod tag_template;

pub mod prelude {
    pub use super::contact_tag::Entity as ContactTag;
    pub use super::contact_tag::Model as ContactTagModel;

    pub use super::interaction::Entity as Interaction;
    pub use super::interaction::Model as InteractionModel;

    pub use super::tag_template::Entity as TagTemplate;
    pub use super::tag_template::Model as TagTemplateModel;
}
