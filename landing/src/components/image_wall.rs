//! Background wall of vertically scrolling image columns.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::util::dom::track_element;
use crate::util::layout::{DeviceClass, WallShape, image_sources, wall_tracks};

const CONTAINER_ID: &str = "bg-image-wall";
const COLUMN_CLASS: &str = "bg-column";
const IMG_CLASS: &str = "bg-img";

/// Populate `#bg-image-wall`. No-op if the page has no wall.
///
/// # Errors
///
/// Returns `Err` if the viewport cannot be read or an element cannot be built.
pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        return Ok(());
    };

    let device = DeviceClass::from_viewport(window.inner_width()?.as_f64().unwrap_or_default());
    let shape = WallShape::for_device(device);
    let mut rng = ChaCha8Rng::seed_from_u64(js_sys::Math::random().to_bits());

    for track in wall_tracks(&image_sources(), device, &mut rng) {
        let column = document.create_element("div")?;
        column.set_class_name(COLUMN_CLASS);
        container.append_child(&column)?;

        let inner = track_element(document, &track, None, IMG_CLASS, "")?;
        let style = inner.style();
        style.set_property("display", "flex")?;
        style.set_property("flex-direction", "column")?;
        style.set_property("gap", &format!("{}px", shape.gap_px))?;
        column.append_child(&inner)?;
    }
    log::debug!("image wall: {} columns ({device:?})", shape.columns);
    Ok(())
}
