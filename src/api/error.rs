use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::db::model::ModelError;

/// Errors surfaced by the gateway operations. Anything the data layer
/// reports as an absence without erroring (`rateTag` on an unknown id,
/// deletes that removed nothing) is NOT an error here; those results
/// flow back as `None`/`false` by contract.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Caller identity missing. Raised before any data access; the
    /// message names the attempted operation.
    #[error("please login to {0}")]
    Unauthenticated(&'static str),

    /// A caller-supplied reference did not resolve.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        let code = match self {
            ApiError::Unauthenticated(_) => "UNAUTHENTICATED",
            ApiError::Validation(_) => "GRAPHQL_VALIDATION_FAILED",
            ApiError::Model(_) => "INTERNAL_SERVER_ERROR",
        };
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}
