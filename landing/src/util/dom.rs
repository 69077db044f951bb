//! Small DOM builders shared by the marquee and the image wall.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::util::layout::Track;

/// Build a scrolling track element: one `<img>` per entry, animated per `track`.
///
/// # Errors
///
/// Returns `Err` if any element cannot be created or styled.
pub fn track_element(
    document: &Document,
    track: &Track,
    track_class: Option<&str>,
    img_class: &str,
    alt: &str,
) -> Result<HtmlElement, JsValue> {
    let el = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    if let Some(class) = track_class {
        el.set_class_name(class);
    }
    el.style().set_property("animation", &track.animation())?;

    for src in &track.images {
        el.append_child(&image(document, src, img_class, alt)?)?;
    }
    Ok(el)
}

/// An `<img>` that hides itself if the file fails to load.
fn image(document: &Document, src: &str, class: &str, alt: &str) -> Result<HtmlImageElement, JsValue> {
    let img = document.create_element("img")?.dyn_into::<HtmlImageElement>()?;
    img.set_src(src);
    img.set_class_name(class);
    img.set_alt(alt);

    let img_for_cb = img.clone();
    let on_error = Closure::once_into_js(move || {
        if let Err(e) = img_for_cb.style().set_property("display", "none") {
            log::debug!("could not hide broken image: {e:?}");
        }
    });
    img.set_onerror(Some(on_error.unchecked_ref()));
    Ok(img)
}
