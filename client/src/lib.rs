//! # client
//!
//! WebAssembly entry point for the CineHub page enhancements.
//!
//! The behavior lives in the `enhance` crate; this crate binds its page,
//! storage and timer traits to `web-sys`, `localStorage` and `gloo-timers`
//! and boots it when the module loads. Browser code is gated behind the
//! `hydrate` feature so the crate still builds and tests natively.

pub mod boot;
pub mod util;

/// Module start hook: installs the panic hook and boots the enhancements.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    boot::start();
}
