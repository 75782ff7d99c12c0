use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::Identity;

/// JWT claims issued by the session service.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub user_id: String,
    pub exp: usize,
}

/// Resolves the caller identity from the Authorization header, falling
/// back to the `token` cookie. A missing or undecodable token yields an
/// anonymous identity rather than a rejected request; the operations
/// raise the authentication error themselves.
pub fn identity_from_headers(headers: &HeaderMap, jwt_secret: &str) -> Identity {
    let jar = CookieJar::from_headers(headers);
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(|s| s.to_string())
        .or_else(|| jar.get("token").map(|c| c.value().to_string()));

    let Some(token) = token else {
        return Identity::anonymous();
    };

    match decode::<Claims>(
        &token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    ) {
        Ok(token_data) => Identity::user(token_data.claims.user_id),
        Err(e) => {
            warn!(error = ?e, "JWT decoding failed; treating the request as anonymous");
            Identity::anonymous()
        }
    }
}
