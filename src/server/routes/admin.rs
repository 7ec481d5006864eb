//! Admin page and token endpoints
//!
//! `GET /admin/trash-by-url` renders the operator page with a fresh token and
//! an inline script that sends the URL list in batches to `/admin/ajax`.
//! `GET /admin/nonce` hands the same token to non-browser drivers.

use crate::auth::{Actor, Capability};
use crate::server::routes::request_actor;
use crate::server::state::AppState;
use crate::utils::error::{Result, TrashError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Path of the admin page
pub const ADMIN_PAGE_PATH: &str = "/admin/trash-by-url";
/// Path of the token endpoint
pub const NONCE_PATH: &str = "/admin/nonce";

/// Reason given to callers of the token endpoint without a known key
pub const MISSING_KEY_MESSAGE: &str = "Missing or unknown API key.";

const PAGE_TITLE: &str = "Delete Multiple Posts by URL";
const CONFIRM_PROMPT: &str = "Are you sure you want to move these posts to trash in batches?";

/// Configure admin routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(ADMIN_PAGE_PATH, web::get().to(admin_page))
        .route(NONCE_PATH, web::get().to(issue_nonce));
}

/// Token handed to drivers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NonceResponse {
    pub nonce: String,
    pub action: String,
    pub batch_size: usize,
}

/// Render the operator page
pub async fn admin_page(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let actor = request_actor(&req, &state);
    if !actor.can(Capability::ManageOptions) {
        warn!("Admin page denied for actor '{}'", actor.name());
        return Err(TrashError::forbidden(
            "Sorry, you are not allowed to access this page.",
        ));
    }

    let nonce = page_nonce(&state, &actor)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(
            &nonce,
            &state.config.batch().action,
            state.config.batch().size,
        )))
}

/// Issue a token for the calling actor
pub async fn issue_nonce(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let actor = request_actor(&req, &state);
    if actor.is_anonymous() {
        return Err(TrashError::auth(MISSING_KEY_MESSAGE));
    }

    let nonce = page_nonce(&state, &actor)?;
    debug!("Issued token for actor '{}'", actor.name());
    Ok(HttpResponse::Ok().json(NonceResponse {
        nonce,
        action: state.config.batch().action.clone(),
        batch_size: state.config.batch().size,
    }))
}

fn page_nonce(state: &AppState, actor: &Actor) -> Result<String> {
    state.auth.create_nonce(&state.config.batch().action, actor)
}

/// Build the page. Values are embedded as JSON so they are safe inside the
/// script block.
fn render_page(nonce: &str, action: &str, batch_size: usize) -> String {
    let settings = serde_json::json!({
        "nonce": nonce,
        "action": action,
        "batchSize": batch_size,
        "confirm": CONFIRM_PROMPT,
    })
    .to_string()
    .replace("</", "<\\/");

    PAGE_TEMPLATE
        .replace("{{title}}", PAGE_TITLE)
        .replace("{{settings}}", &settings)
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
</head>
<body>
<div class="wrap">
  <h1>{{title}}</h1>
  <form id="trash-by-url-form">
    <p><label for="trash-urls">Enter one post URL per line:</label></p>
    <textarea id="trash-urls" rows="12" cols="90"></textarea>
    <p>
      <button type="submit" id="trash-submit">Start Deletion</button>
      <span id="trash-progress" hidden>Deleting&hellip;</span>
    </p>
  </form>
  <ul id="trash-results"></ul>
</div>
<script>
(function () {
  var settings = {{settings}};
  var form = document.getElementById('trash-by-url-form');
  var input = document.getElementById('trash-urls');
  var button = document.getElementById('trash-submit');
  var progress = document.getElementById('trash-progress');
  var results = document.getElementById('trash-results');
  var running = false;

  function append(text) {
    var li = document.createElement('li');
    li.textContent = text;
    results.appendChild(li);
  }

  function setBusy(busy) {
    running = busy;
    button.disabled = busy;
    progress.hidden = !busy;
  }

  function sendBatch(batch) {
    var body = new URLSearchParams();
    body.set('action', settings.action);
    body.set('urls', JSON.stringify(batch));
    body.set('_ajax_nonce', settings.nonce);
    return fetch('/admin/ajax' + window.location.search, {
      method: 'POST',
      credentials: 'same-origin',
      body: body
    }).then(function (response) { return response.json(); });
  }

  async function run(urls) {
    var size = Math.max(1, settings.batchSize);
    for (var i = 0; i < urls.length; i += size) {
      var reply;
      try {
        reply = await sendBatch(urls.slice(i, i + size));
      } catch (err) {
        append('❌ Error: ' + err.message);
        return;
      }
      if (!reply.success) {
        var reason = Array.isArray(reply.data) ? reply.data[0] : 'Request failed.';
        append('❌ Error: ' + reason);
        return;
      }
      (reply.data.messages || []).forEach(append);
    }
  }

  form.addEventListener('submit', function (event) {
    event.preventDefault();
    if (running) {
      return;
    }
    var urls = input.value.split(/\r?\n/)
      .map(function (line) { return line.trim(); })
      .filter(function (line) { return line.length > 0; });
    if (!window.confirm(settings.confirm)) {
      return;
    }
    results.innerHTML = '';
    setBusy(true);
    run(urls).finally(function () { setBusy(false); });
  });
})();
</script>
</body>
</html>
"#;
