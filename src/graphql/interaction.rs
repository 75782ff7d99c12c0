use async_graphql::{Context, ErrorExtensions, Object, Result, SimpleObject};
use chrono::NaiveDate;

use crate::api;
use crate::db::models;
use crate::graphql::tag::gateway;

/// Interactions on a single calendar day.
#[derive(SimpleObject)]
pub struct InteractionCount {
    pub count: i64,
    pub date: NaiveDate,
}

impl From<models::InteractionCount> for InteractionCount {
    fn from(count: models::InteractionCount) -> Self {
        InteractionCount {
            count: count.count,
            date: count.date,
        }
    }
}

#[derive(Default)]
pub struct InteractionQuery;

#[Object]
impl InteractionQuery {
    /// Daily interaction counts over the trailing year, feeding the
    /// heatmap calendar.
    async fn interaction_counts(
        &self,
        ctx: &Context<'_>,
        is_self: Option<bool>,
        contact_id: Option<String>,
    ) -> Result<Vec<InteractionCount>> {
        let (model, identity) = gateway(ctx)?;
        let counts = api::interactions::interaction_counts(
            model.as_ref(),
            identity,
            is_self.unwrap_or(false),
            contact_id.as_deref(),
        )
        .await
        .map_err(|e| e.extend())?;
        Ok(counts.into_iter().map(Into::into).collect())
    }
}
