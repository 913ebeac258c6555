//! Startup reporting to the host page's optional `window.__FOLIO_BOOT`
//! overlay. Pages without the overlay ignore every call.

use std::cell::Cell;

use folio_core::HostError;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const OVERLAY_GLOBAL: &str = "__FOLIO_BOOT";

thread_local! {
    static READY_SENT: Cell<bool> = Cell::new(false);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BootPhase {
    Render,
    Effects,
}

impl BootPhase {
    pub(crate) fn label(self) -> &'static str {
        match self {
            BootPhase::Render => "render",
            BootPhase::Effects => "effects",
        }
    }

    pub(crate) fn detail(self) -> &'static str {
        match self {
            BootPhase::Render => "mounting portfolio",
            BootPhase::Effects => "wiring scroll effects",
        }
    }
}

pub(crate) fn enter(phase: BootPhase) {
    send("setPhase", &[phase.label(), phase.detail()]);
}

/// Shows a host page mismatch on the overlay with its code and hint.
pub(crate) fn fail_host(err: &HostError) {
    let message = err.to_string();
    send("fail", &[err.code(), &message, err.hint()]);
}

/// Hides the overlay. Only the first call reaches the page.
pub(crate) fn ready() {
    if READY_SENT.with(|flag| flag.replace(true)) {
        return;
    }
    send("ready", &[]);
}

#[cfg(target_arch = "wasm32")]
fn send(method: &str, args: &[&str]) {
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let Some(overlay) = overlay() else {
        return;
    };
    let Ok(func) = Reflect::get(&overlay, &JsValue::from_str(method))
        .and_then(|value| value.dyn_into::<Function>())
    else {
        return;
    };
    let args: Array = args.iter().map(|arg| JsValue::from_str(arg)).collect();
    if let Err(err) = func.apply(&overlay, &args) {
        gloo::console::warn!("boot: overlay call failed", method.to_string(), err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn send(_method: &str, _args: &[&str]) {}

#[cfg(target_arch = "wasm32")]
fn overlay() -> Option<js_sys::Object> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(OVERLAY_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value.dyn_into::<js_sys::Object>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::{Array, Function, Object, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn recording_overlay() -> Object {
        let overlay = Object::new();
        let record = |method: &str| {
            let body = format!("this.{method} = (this.{method} || []).concat([Array.from(arguments)]);");
            Function::new_with_args("", &body)
        };
        for method in ["setPhase", "fail", "ready"] {
            Reflect::set(&overlay, &JsValue::from_str(method), &record(&format!("{method}Calls")))
                .expect("install recorder");
        }
        let window = web_sys::window().expect("window");
        Reflect::set(&window, &JsValue::from_str(OVERLAY_GLOBAL), &overlay).expect("set overlay");
        overlay
    }

    fn calls(overlay: &Object, key: &str) -> Vec<Vec<String>> {
        let value = Reflect::get(overlay, &JsValue::from_str(key)).expect("get calls");
        if value.is_undefined() {
            return Vec::new();
        }
        Array::from(&value)
            .iter()
            .map(|call| {
                Array::from(&call)
                    .iter()
                    .map(|arg| arg.as_string().unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    #[wasm_bindgen_test]
    fn overlay_receives_phases_host_errors_and_one_ready() {
        let overlay = recording_overlay();

        enter(BootPhase::Effects);
        fail_host(&HostError::missing_id("cursorGlow"));
        ready();
        ready();

        assert_eq!(
            calls(&overlay, "setPhaseCalls"),
            vec![vec!["effects".to_string(), "wiring scroll effects".to_string()]]
        );
        let failures = calls(&overlay, "failCalls");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0][0], "missing-element");
        assert_eq!(failures[0][1], "host page is missing required element #cursorGlow");
        assert_eq!(failures[0][2], HostError::missing_id("cursorGlow").hint());
        assert_eq!(calls(&overlay, "readyCalls").len(), 1);

        let window = web_sys::window().expect("window");
        Reflect::delete_property(&window, &JsValue::from_str(OVERLAY_GLOBAL)).expect("remove overlay");
    }

    #[wasm_bindgen_test]
    fn missing_overlay_is_ignored() {
        let window = web_sys::window().expect("window");
        let _ = Reflect::delete_property(&window, &JsValue::from_str(OVERLAY_GLOBAL));
        enter(BootPhase::Render);
        fail_host(&HostError::ObserverUnavailable);
    }
}
