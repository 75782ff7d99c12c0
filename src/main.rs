use std::sync::Arc;

use sea_orm::Database;
use tracing::info;
use tracing_subscriber::EnvFilter;

use contacts_backend::config::ServerConfig;
use contacts_backend::db::model::ContactModel;
use contacts_backend::db::postgres::PgModel;
use contacts_backend::graphql;
use contacts_backend::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(ServerConfig::from_env()?);

    let conn = Database::connect(&config.database_url).await?;
    let model: Arc<dyn ContactModel> = Arc::new(PgModel::new(conn));

    let schema = graphql::build_schema(model);
    let app = web::create_router(schema, config.clone());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("contact gateway listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await?;

    Ok(())
}

async fn shutdown() {
    if tokio::signal::ctrl_c().await.is_err() {
        return;
    }
    info!("shutting down...");
}
