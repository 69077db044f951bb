//! Page-view tracking beacon.
//!
//! Client-side (hydrate): fire-and-forget `POST` via `gloo-net`.
//! The payload type is shared with the `stardrop` host, which normalizes
//! incoming pings through [`TrackPing::new`].
//!
//! ERROR HANDLING
//! ==============
//! The page never waits on or reacts to the beacon. Send failures and non-2xx
//! responses are logged at debug level and otherwise dropped.

#[cfg(test)]
#[path = "beacon_test.rs"]
mod beacon_test;

use serde::{Deserialize, Serialize};

/// Relative URL the beacon is posted to.
pub const TRACK_ENDPOINT: &str = "api.php?action=track";

/// Query value of `action` that identifies a tracking ping.
pub const TRACK_ACTION: &str = "track";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// One tracking ping. `code` is omitted from the form when absent or blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPing {
    pub page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl TrackPing {
    #[must_use]
    pub fn new(page: &str, code: Option<&str>) -> Self {
        Self {
            page: page.to_owned(),
            code: code.map(str::trim).filter(|c| !c.is_empty()).map(str::to_owned),
        }
    }

    /// Form fields in send order.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("page", self.page.as_str())];
        if let Some(code) = &self.code {
            fields.push(("code", code.as_str()));
        }
        fields
    }
}

/// Post `ping` in the background.
#[cfg(feature = "hydrate")]
pub fn send(ping: TrackPing) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = post(&ping).await {
            log::debug!("track beacon for {} failed: {e:?}", ping.page);
        }
    });
}

#[cfg(feature = "hydrate")]
async fn post(ping: &TrackPing) -> Result<(), wasm_bindgen::JsValue> {
    let params = web_sys::UrlSearchParams::new()?;
    for (key, value) in ping.form_fields() {
        params.append(key, value);
    }

    let request = gloo_net::http::Request::post(TRACK_ENDPOINT)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(params)
        .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;
    if !resp.ok() {
        log::debug!("track beacon answered {}", resp.status());
    }
    Ok(())
}
