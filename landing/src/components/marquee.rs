//! Two-row game icon marquee.
//!
//! The top row scrolls right and the bottom row scrolls left, each showing
//! every game image. Row contents are replaced on init.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::util::dom::track_element;
use crate::util::layout::{ScrollDirection, image_sources, marquee_track};

const TRACK_CLASS: &str = "marquee-track";
const IMG_CLASS: &str = "game-icon-img";
const IMG_ALT: &str = "游戏图标";

/// Fill `.top-icons` and `.bottom-icons`. No-op unless both rows exist.
///
/// # Errors
///
/// Returns `Err` if a selector is invalid or a track cannot be built.
pub fn init(document: &Document) -> Result<(), JsValue> {
    let (Some(top), Some(bottom)) =
        (document.query_selector(".top-icons")?, document.query_selector(".bottom-icons")?)
    else {
        return Ok(());
    };

    let images = image_sources();
    for (row, direction) in [(top, ScrollDirection::Right), (bottom, ScrollDirection::Left)] {
        let track = marquee_track(&images, direction);
        row.set_inner_html("");
        row.append_child(&track_element(document, &track, Some(TRACK_CLASS), IMG_CLASS, IMG_ALT)?)?;
    }
    Ok(())
}
