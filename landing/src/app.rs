//! Browser entry point.
//!
//! Every page of the site loads the same bundle; each initializer checks for
//! its own elements and quietly does nothing on pages that lack them.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::components::background::AnimationLoop;
use crate::components::{image_wall, marquee};
use crate::pages::{index, success};
use crate::util::text;

thread_local! {
    /// Keeps the starfield loop alive for the lifetime of the page.
    static BACKGROUND: RefCell<Option<AnimationLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    report("form", index::init(&window, &document, text::from_window()));
    report("success", success::init(&window, &document));
    report("marquee", marquee::init(&document));
    report("image wall", image_wall::init(&window, &document));
    report(
        "background",
        AnimationLoop::start(&window).map(|running| {
            BACKGROUND.with(|slot| *slot.borrow_mut() = running);
        }),
    );

    Ok(())
}

/// Stop the starfield, if one is running.
#[wasm_bindgen]
pub fn stop_background() {
    BACKGROUND.with(|slot| {
        if let Some(running) = slot.borrow_mut().take() {
            running.stop();
        }
    });
}

fn report(part: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("{part} init failed: {e:?}");
    }
}
