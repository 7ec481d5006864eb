//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod admin;
pub mod ajax;
pub mod health;

use crate::auth::Actor;
use crate::server::state::AppState;
use crate::utils::error::{Result, TrashError};
use actix_web::{HttpRequest, HttpResponse, web};

/// Register every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    admin::configure_routes(cfg);
    ajax::configure_routes(cfg);
}

/// Fallback for unrouted requests
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse> {
    Err(TrashError::not_found(format!("{} {}", req.method(), req.path())))
}

/// Work out who is calling: the API key header first, then the `api_key`
/// query parameter used by the admin page
pub(crate) fn request_actor(req: &HttpRequest, state: &AppState) -> Actor {
    let header = req
        .headers()
        .get(state.auth.api_key_header())
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let key = header.or_else(|| {
        web::Query::<ApiKeyQuery>::from_query(req.query_string())
            .ok()
            .and_then(|q| q.into_inner().api_key)
    });

    state.auth.authenticate(key.as_deref())
}

#[derive(Debug, serde::Deserialize)]
struct ApiKeyQuery {
    api_key: Option<String>,
}
