//! AJAX endpoint
//!
//! `POST /admin/ajax` takes a form with `action`, `urls` and `_ajax_nonce`
//! and always answers with an [`AjaxEnvelope`].
//!
//! A body that cannot be read as a form is still answered in authorization
//! order: callers without the delete capability get the 403 refusal, and only
//! authorized callers learn that their input was invalid.

use crate::auth::Capability;
use crate::core::batch::{AjaxEnvelope, BatchOutcome, BatchRejection, BatchRequest};
use crate::server::routes::request_actor;
use crate::server::state::AppState;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::{error, warn};

/// Path of the AJAX endpoint
pub const AJAX_PATH: &str = "/admin/ajax";

/// Configure AJAX routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(AJAX_PATH, web::post().to(admin_ajax));
}

/// Form extractor settings. Errors are handed to [`admin_ajax`], which
/// answers them once the caller is known.
pub fn form_config(limit: usize) -> web::FormConfig {
    web::FormConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            warn!("Rejected AJAX form: {}", err);
            err.into()
        })
}

/// Form fields posted by the admin page and the driver
#[derive(Debug, Deserialize)]
pub struct AjaxForm {
    pub action: Option<String>,
    pub urls: Option<String>,
    #[serde(rename = "_ajax_nonce")]
    pub nonce: Option<String>,
}

/// Dispatch an AJAX action
pub async fn admin_ajax(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: Result<web::Form<AjaxForm>, actix_web::Error>,
) -> HttpResponse {
    let form = match form {
        Ok(form) => form.into_inner(),
        Err(_) => return unreadable_form(&req, &state),
    };
    let batch_action = state.config.batch().action.as_str();

    match form.action.as_deref() {
        Some(action) if action == batch_action => trash_batch(&req, &state, &form).await,
        other => {
            warn!("Unknown AJAX action: {:?}", other);
            HttpResponse::BadRequest().json(AjaxEnvelope::error("Unknown action."))
        }
    }
}

async fn trash_batch(req: &HttpRequest, state: &AppState, form: &AjaxForm) -> HttpResponse {
    let actor = request_actor(req, state);
    let action = state.config.batch().action.as_str();

    let nonce_verified = match form.nonce.as_deref() {
        Some(token) => state
            .auth
            .verify_nonce(token, action, &actor)
            .unwrap_or_else(|e| {
                error!("Token verification failed: {}", e);
                false
            }),
        None => false,
    };

    let outcome = state
        .processor
        .process(BatchRequest {
            actor: &actor,
            nonce_verified,
            urls: form.urls.as_deref(),
        })
        .await;

    respond(outcome)
}

fn unreadable_form(req: &HttpRequest, state: &AppState) -> HttpResponse {
    let actor = request_actor(req, state);
    let rejection = if actor.can(Capability::DeletePosts) {
        BatchRejection::InvalidInput
    } else {
        BatchRejection::NotAllowed
    };
    respond(BatchOutcome::Rejected(rejection))
}

fn respond(outcome: BatchOutcome) -> HttpResponse {
    let mut response = match &outcome {
        BatchOutcome::Completed(_) => HttpResponse::Ok(),
        BatchOutcome::Rejected(BatchRejection::NotAllowed) => HttpResponse::Forbidden(),
        BatchOutcome::Rejected(BatchRejection::InvalidInput) => HttpResponse::BadRequest(),
    };
    response.json(outcome.into_envelope())
}
