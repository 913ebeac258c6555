use std::cell::RefCell;

use folio_core::InitConfig;

thread_local! {
    static INIT_CONFIG: RefCell<Option<InitConfig>> = RefCell::new(None);
}

pub(crate) fn init_config() -> InitConfig {
    if let Some(config) = INIT_CONFIG.with(|slot| *slot.borrow()) {
        return config;
    }
    let config = load_init_config();
    INIT_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
    config
}

pub(crate) fn load_init_config() -> InitConfig {
    let Some(window) = web_sys::window() else {
        return InitConfig::default();
    };
    let location = window.location();
    let hash = location.hash().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    InitConfig::from_location(&decode_uri_value(&hash), &decode_uri_value(&search))
}

fn decode_uri_value(value: &str) -> String {
    let raw = value.trim();
    if raw.is_empty() {
        return String::new();
    }
    js_sys::decode_uri_component(raw)
        .ok()
        .and_then(|decoded| decoded.as_string())
        .unwrap_or_else(|| raw.to_string())
}
