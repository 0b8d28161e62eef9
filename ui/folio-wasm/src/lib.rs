//! Portfolio site enhancements, WASM frontend.
//!
//! Binds the `folio-core` controllers to the live document: navigation menu,
//! reveal-on-scroll, back-to-top control and the contact form. Each concern
//! lives in its own module; a controller whose markup is absent stays unbound.

pub mod back_to_top;
pub mod contact;
pub mod dom;
pub mod host;
pub mod logging;
pub mod nav;
pub mod reveal;
pub mod storage;

use folio_core::SiteConfig;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

/// Runs once per page load, when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Route Rust panics to console.error
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let (config, config_err) = match host::load_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    logging::init(&config.log_level);
    if let Some(err) = config_err {
        warn!("using default config: {}", err);
    }

    host::mark_enhanced(&document);
    let caps = host::capabilities(&window);
    let page = host::current_page(&window, &config);

    let nav = nav::bind(&window, &document, &config, &page);
    let reveal_targets = reveal::bind(&document, caps, &config);
    let back_to_top = back_to_top::bind(&window, &document, caps, &config);
    let contact = contact::bind(&document, &config, &page);

    info!(
        page = page.file_name(),
        nav = nav.is_some(),
        reveal = reveal_targets.unwrap_or(0),
        back_to_top = back_to_top.is_some(),
        contact = contact.is_some(),
        reduced_motion = caps.prefers_reduced_motion,
        "site enhancements ready"
    );

    Ok(())
}
