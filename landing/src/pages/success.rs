//! Success page: shows the QR image for the redeemed code.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlImageElement, UrlSearchParams, Window};

use crate::util::codes::{SUCCESS_FOOTER, SUCCESS_INSTRUCTION, qr_image_for};

/// Fill `#qr-img` from the `code` query parameter. No-op without the image or
/// without a code.
///
/// # Errors
///
/// Returns `Err` if the query string cannot be read or parsed.
pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(img) = document.get_element_by_id("qr-img") else {
        return Ok(());
    };
    let img = img.dyn_into::<HtmlImageElement>()?;

    let params = UrlSearchParams::new_with_str(&window.location().search()?)?;
    let code = params.get("code").unwrap_or_default();
    let code = code.trim();
    if code.is_empty() {
        return Ok(());
    }

    img.set_src(&qr_image_for(code));

    if let Some(el) = document.get_element_by_id("success-instruction-text") {
        el.set_text_content(Some(SUCCESS_INSTRUCTION));
    }
    if let Some(el) = document.get_element_by_id("success-footer-text") {
        el.set_text_content(Some(SUCCESS_FOOTER));
    }
    Ok(())
}
