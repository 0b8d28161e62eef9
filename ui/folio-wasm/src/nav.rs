//! Navigation menu bindings.
//!
//! `DomMenu` implements the menu surface over `.nav-toggle` and `#navMenu`;
//! the listeners below translate DOM events into `NavController` calls.

use crate::dom;
use folio_core::nav::{FocusableElementFinder, KeyOutcome, MenuSurface, NavController, NavKey};
use folio_core::page::PageInfo;
use folio_core::{FolioError, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node, Window};

const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), \
     textarea:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

const LABEL_OPEN: &str = "Fermer le menu";
const LABEL_CLOSED: &str = "Ouvrir le menu";

pub type SharedNav = Rc<RefCell<NavController<DomMenu>>>;

pub struct DomMenu {
    document: Document,
    body: Option<HtmlElement>,
    toggle: HtmlElement,
    menu: HtmlElement,
    links: Vec<Element>,
}

impl FocusableElementFinder for DomMenu {
    type Element = Element;

    fn focusable_in_menu(&self) -> Vec<Element> {
        dom::query_all_within(&self.menu, FOCUSABLE)
            .into_iter()
            .filter(|el| {
                el.dyn_ref::<HtmlElement>()
                    .is_some_and(|html| html.offset_parent().is_some())
            })
            .collect()
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }
}

impl MenuSurface for DomMenu {
    fn render(&self, open: bool) {
        let _ = self
            .toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
        let _ = self
            .toggle
            .set_attribute("aria-label", if open { LABEL_OPEN } else { LABEL_CLOSED });
        dom::toggle_class(&self.menu, "is-open", open);
    }

    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = &self.body else {
            return;
        };
        if locked {
            dom::set_style(body, "overflow", "hidden");
        } else {
            dom::clear_style(body, "overflow");
        }
    }

    fn focus(&self, element: &Element) -> bool {
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            return false;
        };
        if !html.is_connected() || html.focus().is_err() {
            return false;
        }
        self.document.active_element().as_ref() == Some(element)
    }

    fn focus_toggle(&self) {
        let _ = self.toggle.focus();
    }

    fn focus_first_link_next_frame(&self) {
        let Some(first) = self.links.first().and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
        else {
            return;
        };
        dom::next_frame(move || {
            let _ = first.focus();
        });
    }
}

/// Set `aria-current="page"` on the link to the current page only.
fn mark_current_page(links: &[Element], page: &PageInfo) {
    for link in links {
        let href = link.get_attribute("href").unwrap_or_default();
        if page.is_current(&href) {
            let _ = link.set_attribute("aria-current", "page");
        } else {
            let _ = link.remove_attribute("aria-current");
        }
    }
}

fn event_node(event: &web_sys::Event) -> Option<Node> {
    event.target().and_then(|t| t.dyn_into::<Node>().ok())
}

/// Bind the menu. `None` when the toggle or the menu is missing.
pub fn bind(window: &Window, doc: &Document, config: &SiteConfig, page: &PageInfo) -> Option<SharedNav> {
    let Some(toggle) = dom::query_typed::<HtmlElement>(doc, ".nav-toggle") else {
        debug!("navigation disabled: {}", FolioError::MissingElement(".nav-toggle"));
        return None;
    };
    let Some(menu) = dom::by_id_typed::<HtmlElement>(doc, "navMenu") else {
        debug!("navigation disabled: {}", FolioError::MissingElement("#navMenu"));
        return None;
    };
    let links = dom::query_all_within(&menu, ".nav-links a");

    mark_current_page(&links, page);

    let surface = DomMenu {
        document: doc.clone(),
        body: doc.body(),
        toggle: toggle.clone(),
        menu: menu.clone(),
        links,
    };
    let nav: SharedNav = Rc::new(RefCell::new(NavController::new(surface, config.desktop_breakpoint)));

    {
        let nav = nav.clone();
        dom::listen(&toggle, "click", move |_| nav.borrow_mut().toggle());
    }

    {
        let nav = nav.clone();
        let (menu, toggle) = (menu.clone(), toggle.clone());
        dom::listen(doc, "click", move |event| {
            let target = event_node(&event);
            let inside = menu.contains(target.as_ref()) || toggle.contains(target.as_ref());
            nav.borrow_mut().on_document_click(inside);
        });
    }

    {
        let nav = nav.clone();
        dom::listen(doc, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = NavKey::from_key(&key_event.key(), key_event.shift_key());
            if nav.borrow_mut().on_key(key) == KeyOutcome::PreventDefault {
                event.prevent_default();
            }
        });
    }

    {
        let nav = nav.clone();
        dom::listen(&menu, "click", move |event| {
            let on_link = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("a").ok().flatten())
                .is_some();
            nav.borrow_mut().on_menu_click(on_link);
        });
    }

    {
        let nav = nav.clone();
        let win = window.clone();
        dom::listen_passive(window, "resize", move |_| {
            let width = win
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0);
            nav.borrow_mut().on_resize(width);
        });
    }

    {
        let nav = nav.clone();
        dom::listen(window, "hashchange", move |_| nav.borrow_mut().on_hash_change());
    }

    Some(nav)
}
