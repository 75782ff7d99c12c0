//! The GraphQL schema: one resolver group per domain, merged into the
//! query and mutation roots.

use std::sync::Arc;

use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::api::Identity;
use crate::db::model::ContactModel;

pub mod interaction;
pub mod tag;

#[derive(MergedObject, Default)]
pub struct QueryRoot(tag::TagQuery, interaction::InteractionQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(tag::TagMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema over a model handle. The caller identity is
/// attached per request by the transport layer.
pub fn build_schema(model: Arc<dyn ContactModel>) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(model)
    .finish()
}

/// Convenience for executing one operation with an explicit identity,
/// exactly as the HTTP handler does.
pub fn request_with_identity(
    query: impl Into<String>,
    identity: Identity,
) -> async_graphql::Request {
    async_graphql::Request::new(query).data(identity)
}
