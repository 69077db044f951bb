//! Tracking beacon receiver.
//!
//! The page posts `page` (and sometimes `code`) as a url-encoded form to
//! `api.php?action=track` and never reads the answer. Pings are logged and
//! dropped; nothing is stored.

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

use axum::extract::{Form, Query};
use axum::http::StatusCode;
use landing::net::beacon::{TRACK_ACTION, TrackPing};
use landing::util::codes;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TrackQuery {
    pub action: Option<String>,
}

/// Raw beacon form. Every field is optional so that a missing `page` reaches
/// the handler and is answered like a blank one.
#[derive(Debug, Default, Deserialize)]
pub struct TrackForm {
    pub page: Option<String>,
    pub code: Option<String>,
}

/// `POST /api.php?action=track`: log one page ping.
pub async fn track(Query(query): Query<TrackQuery>, Form(form): Form<TrackForm>) -> StatusCode {
    if query.action.as_deref() != Some(TRACK_ACTION) {
        return StatusCode::BAD_REQUEST;
    }

    let page = form.page.as_deref().map(str::trim).unwrap_or_default();
    if page.is_empty() {
        return StatusCode::BAD_REQUEST;
    }
    let ping = TrackPing::new(page, form.code.as_deref());
    let code = ping.code.as_deref().unwrap_or_default();

    tracing::info!(page = %ping.page, code, known_code = codes::is_valid(code), "track ping");
    StatusCode::NO_CONTENT
}
