//! Reveal-on-scroll bindings over `IntersectionObserver`.

use crate::dom;
use folio_core::reveal::{MotionCapabilities, RevealTracker, ViewportObserver};
use folio_core::SiteConfig;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

const VISIBLE: &str = "is-visible";

struct DomObserver(IntersectionObserver);

impl ViewportObserver for DomObserver {
    type Element = Element;

    fn observe(&self, element: &Element) {
        self.0.observe(element);
    }

    fn unobserve(&self, element: &Element) {
        self.0.unobserve(element);
    }
}

type SharedTracker = Rc<RefCell<RevealTracker<Element>>>;

fn reveal_all(tracker: &SharedTracker, caps: MotionCapabilities) {
    for el in tracker.borrow_mut().start::<DomObserver>(caps, None) {
        dom::add_class(&el, VISIBLE);
    }
}

fn create_observer(tracker: &SharedTracker, config: &SiteConfig) -> Result<DomObserver, JsValue> {
    let tracker = tracker.clone();
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let observer = DomObserver(observer);
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let revealed = tracker
                .borrow_mut()
                .on_intersection(&target, entry.is_intersecting(), &observer);
            if revealed {
                dom::add_class(&target, VISIBLE);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    init.set_root_margin(&config.reveal_root_margin);

    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();
    Ok(DomObserver(observer))
}

/// Bind every `.reveal` element. Returns the number of targets, or `None`
/// when the page has none.
pub fn bind(doc: &Document, caps: MotionCapabilities, config: &SiteConfig) -> Option<usize> {
    let targets = dom::query_all(doc, ".reveal");
    if targets.is_empty() {
        debug!("reveal disabled: no .reveal elements");
        return None;
    }
    let count = targets.len();
    let tracker: SharedTracker = Rc::new(RefCell::new(RevealTracker::new(targets)));

    if caps.reveal_immediately() {
        reveal_all(&tracker, caps);
        return Some(count);
    }

    match create_observer(&tracker, config) {
        Ok(observer) => {
            tracker.borrow_mut().start(caps, Some(&observer));
        }
        Err(err) => {
            warn!("IntersectionObserver rejected options: {:?}", err);
            reveal_all(&tracker, caps);
        }
    }
    Some(count)
}
