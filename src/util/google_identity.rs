//! Bindings to the Google Identity Services sign-in widget.
//!
//! The GIS script is loaded from `index.html`; these bindings initialize it
//! with our client id and render the button into a host element. The
//! credential from a completed sign-in is handed to the provided callback
//! as an opaque string — the exchange for a bearer token happens against
//! our own backend, never here.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::{Closure, wasm_bindgen};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = initialize)]
    fn gis_initialize(config: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    fn gis_render_button(parent: &web_sys::Element, options: &JsValue) -> Result<(), JsValue>;
}

/// Initialize GIS and render the sign-in button into `host`.
///
/// `on_credential` receives the opaque Google credential once the user
/// completes the popup flow. Returns `false` when the GIS script is not
/// available (blocked, offline), letting the caller show a fallback.
pub fn mount_button(
    host: &web_sys::Element,
    client_id: &str,
    on_credential: impl Fn(String) + 'static,
) -> bool {
    let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
        let credential = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|value| value.as_string());
        if let Some(credential) = credential {
            on_credential(credential);
        } else {
            leptos::logging::warn!("GIS response carried no credential");
        }
    });

    let config = js_sys::Object::new();
    let config_ok = js_sys::Reflect::set(
        &config,
        &JsValue::from_str("client_id"),
        &JsValue::from_str(client_id),
    )
    .is_ok()
        && js_sys::Reflect::set(&config, &JsValue::from_str("callback"), callback.as_ref()).is_ok();
    if !config_ok {
        return false;
    }

    if let Err(err) = gis_initialize(&config) {
        leptos::logging::warn!("GIS initialize failed: {err:?}");
        return false;
    }
    // The closure must outlive the widget; GIS keeps calling it.
    callback.forget();

    let options = js_sys::Object::new();
    for (key, value) in [
        ("theme", "filled_blue"),
        ("size", "large"),
        ("text", "signin_with"),
        ("shape", "rectangular"),
    ] {
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }

    match gis_render_button(host, &options) {
        Ok(()) => true,
        Err(err) => {
            leptos::logging::warn!("GIS renderButton failed: {err:?}");
            false
        }
    }
}
