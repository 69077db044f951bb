//! Bridge between the page and the imperative `starfield::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The starfield crate owns the scene and the canvas. This module only finds
//! the container, feeds the engine a clock and a seed, and drives it with a
//! self-rescheduling `requestAnimationFrame` chain. The next frame is requested
//! after the current one has been painted, so frames never overlap.
//!
//! The returned [`AnimationLoop`] holds the pending frame id, the frame closure
//! and the resize listener. Dropping it leaves the loop running for the life of
//! the page; [`AnimationLoop::stop`] tears it down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Date;
use starfield::engine::Engine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

const CONTAINER_ID: &str = "background-container";

type FrameCallback = Closure<dyn FnMut(f64)>;

pub struct AnimationLoop {
    window: Window,
    frame_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<FrameCallback>>>,
    on_resize: Closure<dyn FnMut()>,
}

impl AnimationLoop {
    /// Mount the starfield in `#background-container` and start animating.
    ///
    /// Returns `Ok(None)` when the page has no container.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot be mounted or the first frame cannot
    /// be scheduled.
    pub fn start(window: &Window) -> Result<Option<Self>, JsValue> {
        let document = window.document().ok_or("no document")?;
        let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
            return Ok(None);
        };

        let viewport_width = window.inner_width()?.as_f64().unwrap_or_default();
        let now = Date::now();
        let engine = Engine::mount(&document, container, viewport_width, seed_from_clock(now), now)?;
        log::debug!(
            "starfield mounted: {} particles on {}x{}",
            engine.core.particles.len(),
            engine.core.width,
            engine.core.height
        );
        let engine = Rc::new(RefCell::new(engine));

        let engine_for_resize = Rc::clone(&engine);
        let on_resize = Closure::wrap(Box::new(move || {
            engine_for_resize.borrow_mut().fit();
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        let frame_id = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let window_for_cb = window.clone();
        let frame_id_for_cb = Rc::clone(&frame_id);
        let tick_for_cb = Rc::clone(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            frame_id_for_cb.set(None);
            if let Err(e) = engine.borrow_mut().frame(Date::now()) {
                log::warn!("starfield frame failed: {e:?}");
            }
            // A stopped loop has taken the closure out; nothing to reschedule.
            if let Some(cb) = tick_for_cb.borrow().as_ref() {
                match window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => frame_id_for_cb.set(Some(id)),
                    Err(e) => log::warn!("starfield could not schedule a frame: {e:?}"),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = tick
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()))
            .transpose()?;
        frame_id.set(first);

        Ok(Some(Self { window: window.clone(), frame_id, tick, on_resize }))
    }

    /// Cancel the pending frame, detach the resize listener and release the
    /// frame closure.
    pub fn stop(&self) {
        if let Some(id) = self.frame_id.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("starfield could not cancel frame {id}: {e:?}");
            }
        }
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::warn!("starfield could not detach resize listener: {e:?}");
        }
        self.tick.borrow_mut().take();
    }
}

/// Scene seed for a page load. Only needs to differ between loads.
fn seed_from_clock(now_ms: f64) -> u64 {
    let jitter = js_sys::Math::random().to_bits();
    now_ms.to_bits() ^ jitter.rotate_left(17)
}
