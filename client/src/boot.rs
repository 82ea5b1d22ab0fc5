//! Page boot: config, logging, and the `enhance` session.
//!
//! Overrides are read from an inline
//! `<script id="cinehub-config" type="application/json">` tag when present.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use enhance::config::{Config, ConfigError};

/// `id` of the optional inline JSON config.
pub const CONFIG_ELEMENT_ID: &str = "cinehub-config";

/// Parse the inline config text; no tag means defaults.
///
/// # Errors
///
/// Returns [`ConfigError`] when the tag holds malformed JSON.
pub fn load_config(raw: Option<&str>) -> Result<Config, ConfigError> {
    raw.map_or_else(|| Ok(Config::default()), Config::from_json)
}

/// Boot enhancements on the current page. Returns `false` when not running
/// in a browser or when nothing could be booted.
pub fn start() -> bool {
    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use enhance::Enhancer;

        use crate::util::page::WebDocument;
        use crate::util::storage::open_store;
        use crate::util::timers::GlooScheduler;

        let Some(doc) = WebDocument::current() else {
            return false;
        };
        let (config, config_err) = match load_config(doc.text_of(CONFIG_ELEMENT_ID).as_deref()) {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        };
        if console_log::init_with_level(config.log_level()).is_err() {
            log::debug!("cinehub: logger already installed");
        }
        if let Some(err) = config_err {
            log::warn!("cinehub: {err}; using defaults");
        }

        let enhancer = Enhancer::new(config, Rc::new(doc), Rc::new(GlooScheduler), open_store());
        enhancer.boot()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
