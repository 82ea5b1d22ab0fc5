//! Browser bindings for the `enhance` host traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps every `web-sys` call in one place so the core crate never touches
//! the browser directly.

#[cfg(feature = "hydrate")]
pub mod page;
pub mod storage;
#[cfg(feature = "hydrate")]
pub mod timers;
