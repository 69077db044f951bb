//! Index-page copy with optional per-deployment overrides.
//!
//! The host page may define `window.__INDEX_TEXT__` with any subset of the
//! keys below. Missing keys, a missing object, or a malformed one all fall back
//! to the built-in strings.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use serde::Deserialize;

const DEFAULT_ALERT_EMPTY_CODE: &str = "请输入暗号！";
const DEFAULT_BTN_VERIFYING: &str = "正在验证...";
const DEFAULT_ALERT_VERIFY_FAILED: &str = "暗号错误";
const DEFAULT_ALERT_NETWORK_ERROR: &str = "网络或服务器错误，请稍后再试";
const DEFAULT_SUBMIT_TEXT: &str = "提交";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndexText {
    alert_empty_code: Option<String>,
    btn_verifying: Option<String>,
    alert_verify_failed: Option<String>,
    alert_network_error: Option<String>,
    submit_text: Option<String>,
}

impl IndexText {
    /// Parse an override object serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `json` is not an object of strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn alert_empty_code(&self) -> &str {
        pick(self.alert_empty_code.as_deref(), DEFAULT_ALERT_EMPTY_CODE)
    }

    #[must_use]
    pub fn btn_verifying(&self) -> &str {
        pick(self.btn_verifying.as_deref(), DEFAULT_BTN_VERIFYING)
    }

    #[must_use]
    pub fn alert_verify_failed(&self) -> &str {
        pick(self.alert_verify_failed.as_deref(), DEFAULT_ALERT_VERIFY_FAILED)
    }

    #[must_use]
    pub fn alert_network_error(&self) -> &str {
        pick(self.alert_network_error.as_deref(), DEFAULT_ALERT_NETWORK_ERROR)
    }

    #[must_use]
    pub fn submit_text(&self) -> &str {
        pick(self.submit_text.as_deref(), DEFAULT_SUBMIT_TEXT)
    }
}

/// Empty overrides count as missing.
fn pick<'a>(custom: Option<&'a str>, fallback: &'a str) -> &'a str {
    custom.filter(|s| !s.is_empty()).unwrap_or(fallback)
}

/// Read `window.__INDEX_TEXT__`, falling back to defaults.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn from_window() -> IndexText {
    let Some(window) = web_sys::window() else {
        return IndexText::default();
    };
    let Ok(value) = js_sys::Reflect::get(&window, &"__INDEX_TEXT__".into()) else {
        return IndexText::default();
    };
    if value.is_undefined() || value.is_null() {
        return IndexText::default();
    }
    let Some(json) = js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()) else {
        return IndexText::default();
    };
    IndexText::from_json(&json).unwrap_or_else(|e| {
        log::warn!("ignoring malformed __INDEX_TEXT__: {e}");
        IndexText::default()
    })
}
