//! Secret-code redemption form on the index page.
//!
//! Submitting (button click or Enter) checks the code against the table in
//! [`crate::util::codes`]. While a check is in flight the button is disabled
//! and relabelled; further submits are ignored until it finishes.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlButtonElement, HtmlInputElement, KeyboardEvent, Window};

use crate::net::beacon::{self, TrackPing};
use crate::util::codes::{self, Verdict};
use crate::util::text::IndexText;

/// Pause before reporting the verdict, so the "verifying" state is visible.
const VERIFY_DELAY_MS: u32 = 500;

struct Form {
    window: Window,
    button: HtmlButtonElement,
    input: HtmlInputElement,
    text: IndexText,
}

/// Wire up `#submit-btn` and `#secret-code`. No-op unless both exist.
///
/// # Errors
///
/// Returns `Err` if an event listener cannot be attached.
pub fn init(window: &Window, document: &Document, text: IndexText) -> Result<(), JsValue> {
    let (Some(button), Some(input)) =
        (document.get_element_by_id("submit-btn"), document.get_element_by_id("secret-code"))
    else {
        return Ok(());
    };
    let button = button.dyn_into::<HtmlButtonElement>()?;
    let input = input.dyn_into::<HtmlInputElement>()?;

    beacon::send(TrackPing::new("index", None));

    let form = Rc::new(Form { window: window.clone(), button, input, text });

    let form_for_click = Rc::clone(&form);
    let on_click = Closure::<dyn FnMut()>::new(move || submit(Rc::clone(&form_for_click)));
    form.button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let form_for_key = Rc::clone(&form);
    let on_keypress = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            submit(Rc::clone(&form_for_key));
        }
    });
    form.input
        .add_event_listener_with_callback("keypress", on_keypress.as_ref().unchecked_ref())?;
    on_keypress.forget();

    Ok(())
}

fn submit(form: Rc<Form>) {
    if form.button.disabled() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        check(&form).await;
    });
}

async fn check(form: &Form) {
    let code = form.input.value();
    let verdict = codes::verify(&code);
    if verdict == Verdict::Empty {
        alert(&form.window, form.text.alert_empty_code());
        return;
    }

    form.button.set_inner_text(form.text.btn_verifying());
    form.button.set_disabled(true);

    TimeoutFuture::new(VERIFY_DELAY_MS).await;

    match verdict {
        Verdict::Accepted { code, redirect } => {
            log::info!("code {code} accepted");
            if let Err(e) = form.window.location().set_href(&redirect) {
                log::warn!("redirect to {redirect} failed: {e:?}");
                alert(&form.window, form.text.alert_network_error());
            }
        }
        Verdict::Rejected => {
            alert(&form.window, form.text.alert_verify_failed());
            form.input.set_value("");
        }
        Verdict::Empty => {}
    }

    form.button.set_inner_text(form.text.submit_text());
    form.button.set_disabled(false);
}

fn alert(window: &Window, message: &str) {
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {e:?}");
    }
}
