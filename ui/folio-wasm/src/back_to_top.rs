//! Floating "back to top" control.

use crate::dom;
use folio_core::reveal::MotionCapabilities;
use folio_core::scroll::{BackToTop, ScrollMotion};
use folio_core::SiteConfig;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

const VISIBLE: &str = "is-visible";

/// Reuse the page's `.back-to-top` control or append one to the body.
fn find_or_create(doc: &Document) -> Option<HtmlElement> {
    if let Some(existing) = dom::query_typed::<HtmlElement>(doc, ".back-to-top") {
        return Some(existing);
    }

    let button = doc
        .create_element("button")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    button.set_class_name("back-to-top");
    let _ = button.set_attribute("type", "button");
    let _ = button.set_attribute("aria-label", "Retour en haut");
    button.set_inner_html("↑");
    doc.body()?.append_child(&button).ok()?;
    Some(button)
}

fn scroll_to_top(window: &Window, motion: ScrollMotion) {
    match motion {
        ScrollMotion::Instant => window.scroll_to_with_x_and_y(0.0, 0.0),
        ScrollMotion::Smooth => {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}

pub fn bind(
    window: &Window,
    doc: &Document,
    caps: MotionCapabilities,
    config: &SiteConfig,
) -> Option<HtmlElement> {
    let Some(button) = find_or_create(doc) else {
        debug!("back-to-top disabled: no body to attach to");
        return None;
    };

    let state = Rc::new(RefCell::new(BackToTop::new(config.back_to_top_threshold)));
    let visible = state.borrow_mut().update(window.scroll_y().unwrap_or(0.0));
    dom::toggle_class(&button, VISIBLE, visible);

    {
        let (state, button, win) = (state.clone(), button.clone(), window.clone());
        dom::listen_passive(window, "scroll", move |_| {
            if !state.borrow_mut().on_scroll() {
                return;
            }
            let (state, button, win) = (state.clone(), button.clone(), win.clone());
            dom::next_frame(move || {
                let visible = state.borrow_mut().on_frame(win.scroll_y().unwrap_or(0.0));
                dom::toggle_class(&button, VISIBLE, visible);
            });
        });
    }

    {
        let win = window.clone();
        let motion = ScrollMotion::for_preference(caps.prefers_reduced_motion);
        dom::listen(&button, "click", move |_| scroll_to_top(&win, motion));
    }

    Some(button)
}
