//! Console logging shim
//!
//! In the browser everything goes through `console.*` so messages land next to
//! the JS side's own logs. Native builds (tests, tools) fall back to stderr
//! because wasm-bindgen imports cannot be called off wasm32.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub fn log_info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[tilestep] {}", msg);
    }
}

pub fn log_warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&JsValue::from_str(msg));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[tilestep] WARN {}", msg);
    }
}
