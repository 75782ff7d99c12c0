use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::models::InteractionCount;

const INTERACTION_COUNTS_QUERY: &str = "\
query interactionCounts($isSelf: Boolean, $contactId: String) {
    interactionCounts(isSelf: $isSelf, contactId: $contactId) {
        count
        date
    }
}";

/// A GraphQL request envelope.
#[derive(Serialize)]
struct GraphQL<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Variables<'a> {
    is_self: bool,
    contact_id: &'a str,
}

#[derive(Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InteractionCountsData {
    interaction_counts: Vec<InteractionCount>,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
}

/// GraphQL client for the contact gateway.
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Fetches the daily interaction counts for the heatmap. Always
    /// goes to the network; the view keeps no cache between mounts.
    pub async fn interaction_counts(
        &self,
        is_self: bool,
        contact_id: &str,
    ) -> Result<Vec<InteractionCount>, ClientError> {
        let body = GraphQL {
            query: INTERACTION_COUNTS_QUERY,
            variables: Variables {
                is_self,
                contact_id,
            },
        };

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response: GraphQLResponse<InteractionCountsData> =
            request.send().await?.json().await?;

        if let Some(error) = response.errors.into_iter().next() {
            return Err(ClientError::Api(error.message));
        }
        response
            .data
            .map(|data| data.interaction_counts)
            .ok_or_else(|| ClientError::Api("empty response".to_string()))
    }
}
