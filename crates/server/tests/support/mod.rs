#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::{AuthPolicy, DatabaseConfig};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use server::routes::{self, auth};

pub const SECRET: &str = "test-secret";

pub async fn build_app(policy: AuthPolicy) -> anyhow::Result<Router> {
    Ok(build_app_with_db(policy).await?.0)
}

/// Router plus a handle on its database, for tests that tamper with the schema.
pub async fn build_app_with_db(policy: AuthPolicy) -> anyhow::Result<(Router, DatabaseConnection)> {
    let db = models::db::connect_and_migrate(&DatabaseConfig::in_memory()).await?;
    let state = auth::ServerState::new(
        db.clone(),
        auth::ServerAuthConfig { jwt_secret: SECRET.into(), policy },
    );
    Ok((routes::build_router(state, tower_http::cors::CorsLayer::very_permissive()), db))
}

pub fn token_with(secret: &str, ttl_secs: i64) -> String {
    let now = jsonwebtoken::get_current_timestamp() as i64;
    let claims = auth::Claims { sub: "tester".into(), exp: (now + ttl_secs) as usize, iat: Some(now as usize) };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

pub fn token() -> String {
    token_with(SECRET, 3600)
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header("authorization", format!("Bearer {t}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send `req` and return the status with the parsed JSON body (`Null` when empty).
pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

/// Create the given source types and return their ids in order.
pub async fn seed_source_types(app: &Router, labels: &[&str]) -> anyhow::Result<Vec<i64>> {
    let tok = token();
    let mut ids = Vec::with_capacity(labels.len());
    for label in labels {
        let (status, body) = send(
            app,
            request("POST", "/api/source-types", Some(&tok), Some(serde_json::json!({"sourceType": label}))),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED, "seeding {label}: {body}");
        ids.push(body["id"].as_i64().unwrap());
    }
    Ok(ids)
}
