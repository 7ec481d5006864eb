//! Health check endpoint

use crate::build_info;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health status response
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
    pub build_time: Cow<'static, str>,
    pub git_hash: Cow<'static, str>,
}

/// Basic health check endpoint
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");

    let build = build_info();
    HttpResponse::Ok().json(HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(build.version),
        build_time: Cow::Borrowed(build.build_time),
        git_hash: Cow::Borrowed(build.git_hash),
    })
}
