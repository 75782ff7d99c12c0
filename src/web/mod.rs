use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, HeaderValue, Method},
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::graphql::AppSchema;

pub mod auth;

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub config: Arc<ServerConfig>,
}

async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let identity = auth::identity_from_headers(&headers, &state.config.jwt_secret);
    state
        .schema
        .execute(req.into_inner().data(identity))
        .await
        .into()
}

async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/api/graphql").finish())
}

async fn health_check_handler() -> &'static str {
    "OK"
}

pub fn create_router(schema: AppSchema, config: Arc<ServerConfig>) -> Router {
    let cors = match config
        .frontend_url
        .as_deref()
        .and_then(|url| url.parse::<HeaderValue>().ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any),
    };

    Router::new()
        .route("/api/health", get(health_check_handler))
        .route("/api/graphql", get(graphiql_handler).post(graphql_handler))
        .with_state(AppState { schema, config })
        .layer(cors)
}
