//! Facts about the host page read once at start-up: configuration island,
//! motion capabilities and the current page.

use crate::dom;
use folio_core::page::PageInfo;
use folio_core::reveal::MotionCapabilities;
use folio_core::{FolioError, SiteConfig};
use web_sys::{Document, Window};

const CONFIG_ISLAND_ID: &str = "folioConfig";

/// Read `<script type="application/json" id="folioConfig">`.
///
/// An absent or blank island yields the defaults.
pub fn load_config(doc: &Document) -> Result<SiteConfig, FolioError> {
    let raw = doc
        .get_element_by_id(CONFIG_ISLAND_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(SiteConfig::default());
    }
    SiteConfig::from_json(&raw)
}

pub fn capabilities(window: &Window) -> MotionCapabilities {
    let prefers_reduced_motion = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|mql| mql.matches());
    let has_intersection_observer =
        js_sys::Reflect::has(window, &"IntersectionObserver".into()).unwrap_or(false);

    MotionCapabilities {
        prefers_reduced_motion,
        has_intersection_observer,
    }
}

pub fn current_page(window: &Window, config: &SiteConfig) -> PageInfo {
    let pathname = window.location().pathname().unwrap_or_default();
    PageInfo::from_pathname(&pathname, &config.index_page)
}

/// Mark the document as script-enhanced so CSS can hide reveal targets.
pub fn mark_enhanced(doc: &Document) {
    if let Some(root) = doc.document_element() {
        dom::add_class(&root, "js");
    }
}
