use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use configs::AuthPolicy;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use service::{BranchService, SourceTypeService};

use crate::errors::JsonApiError;

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
    pub policy: AuthPolicy,
}

#[derive(Clone)]
pub struct ServerState {
    pub auth: ServerAuthConfig,
    pub branches: BranchService,
    pub source_types: SourceTypeService,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, auth: ServerAuthConfig) -> Self {
        Self {
            branches: BranchService::new(db.clone()),
            source_types: SourceTypeService::new(db),
            auth,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
}

/// Subject of the verified token, inserted into request extensions by
/// [`require_bearer_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub subject: String,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| JsonApiError::unauthorized("authentication required"))
    }
}

/// `Authorization: Bearer <token>` first, then the `auth_token` cookie.
fn extract_token(req: &Request, jar: &CookieJar) -> Result<Option<String>, JsonApiError> {
    if let Some(h) = req.headers().get(header::AUTHORIZATION) {
        let h = h
            .to_str()
            .map_err(|_| JsonApiError::unauthorized("malformed Authorization header"))?;
        return match h.strip_prefix("Bearer ") {
            Some(t) if !t.trim().is_empty() => Ok(Some(t.trim().to_string())),
            _ => Err(JsonApiError::unauthorized("Authorization header must be `Bearer <token>`")),
        };
    }
    Ok(jar
        .get(AUTH_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty()))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(token, &key, &validation).map(|data| data.claims)
}

/// Rejects requests without a valid HS256 token with 401.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let path = req.uri().path().to_string();

    let Some(token) = extract_token(&req, &jar)? else {
        tracing::warn!(path = %path, "missing Authorization header and auth_token cookie");
        return Err(JsonApiError::unauthorized("missing bearer token"));
    };

    match verify_token(&token, &state.auth.jwt_secret) {
        Ok(claims) => {
            tracing::debug!(path = %path, sub = %claims.sub, "token accepted");
            req.extensions_mut().insert(CurrentUser { subject: claims.sub });
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(path = %path, err = %e, "token validation failed");
            Err(JsonApiError::unauthorized("invalid or expired token"))
        }
    }
}
