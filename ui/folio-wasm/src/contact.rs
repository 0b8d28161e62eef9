//! Contact form bindings: `#contactForm` and its `#formStatus` line.

use crate::dom;
use crate::storage::LocalDraftStore;
use folio_core::contact::{self, ContactForm, SubmitDecision};
use folio_core::draft::{Draft, DraftField};
use folio_core::page::PageInfo;
use folio_core::validation::FormStatus;
use folio_core::{FolioError, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

pub type SharedContact = Rc<RefCell<ContactForm<LocalDraftStore>>>;

/// The four inputs. Missing ones read as empty and are never written.
#[derive(Clone)]
struct FormFields {
    nom: Option<Element>,
    email: Option<Element>,
    sujet: Option<Element>,
    message: Option<Element>,
}

impl FormFields {
    fn bind(form: &Element) -> Self {
        Self {
            nom: dom::query_within(form, "#nom"),
            email: dom::query_within(form, "#email"),
            sujet: dom::query_within(form, "#sujet"),
            message: dom::query_within(form, "#message"),
        }
    }

    fn read(&self) -> Draft {
        let value = |el: &Option<Element>| el.as_ref().map(dom::field_value).unwrap_or_default();
        Draft::snapshot(
            &value(&self.nom),
            &value(&self.email),
            &value(&self.sujet),
            &value(&self.message),
        )
    }

    fn element(&self, field: DraftField) -> Option<&Element> {
        match field {
            DraftField::Nom => self.nom.as_ref(),
            DraftField::Email => self.email.as_ref(),
            DraftField::Sujet => self.sujet.as_ref(),
            DraftField::Message => self.message.as_ref(),
        }
    }

    fn prefill(&self, draft: &Draft) {
        for (field, value) in draft.prefill_values() {
            if let (Some(el), Some(value)) = (self.element(field), value) {
                dom::set_field_value(el, value);
            }
        }
    }
}

fn show_status(status_el: &Element, status: FormStatus) {
    status_el.set_text_content(Some(status.message()));
    let _ = status_el.set_attribute("data-type", status.kind());
}

/// Disable and dim the submit button so the form is not sent twice.
fn lock_submit(form: &Element) {
    let Some(button) = dom::query_within(form, "button[type=\"submit\"]") else {
        return;
    };
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(true);
    }
    if let Some(html) = button.dyn_ref::<HtmlElement>() {
        dom::set_style(html, "opacity", "0.85");
    }
}

/// Bind the form. `None` when the form or the status line is missing; the
/// confirmation-page cleanup still runs in that case.
pub fn bind(doc: &Document, config: &SiteConfig, page: &PageInfo) -> Option<SharedContact> {
    let form_el = dom::by_id_typed::<Element>(doc, "contactForm");
    let status_el = dom::by_id_typed::<Element>(doc, "formStatus");
    let (Some(form_el), Some(status_el)) = (form_el, status_el) else {
        contact::discard_after_send(&LocalDraftStore, &config.draft_key, page, &config.confirmation_page);
        debug!(
            "contact form disabled: {}",
            FolioError::MissingElement("#contactForm / #formStatus")
        );
        return None;
    };

    let fields = FormFields::bind(&form_el);
    let controller = ContactForm::new(LocalDraftStore, config.draft_key.clone());
    if let Some(draft) = controller.restore(page, &config.confirmation_page) {
        fields.prefill(&draft);
    }
    let controller: SharedContact = Rc::new(RefCell::new(controller));

    for event in ["input", "change"] {
        let (controller, fields, status_el) = (controller.clone(), fields.clone(), status_el.clone());
        dom::listen(&form_el, event, move |_| {
            let status = controller.borrow_mut().on_change(&fields.read());
            show_status(&status_el, status);
        });
    }

    {
        let (controller, fields, status_el) = (controller.clone(), fields.clone(), status_el.clone());
        let form = form_el.clone();
        dom::listen(&form_el, "submit", move |event| {
            match controller.borrow_mut().on_submit(&fields.read()) {
                SubmitDecision::Block(status) => {
                    event.prevent_default();
                    show_status(&status_el, status);
                }
                SubmitDecision::Proceed => {
                    info!("contact form handed to relay");
                    lock_submit(&form);
                    show_status(&status_el, FormStatus::Sending);
                }
            }
        });
    }

    let status = controller.borrow_mut().refresh(&fields.read());
    show_status(&status_el, status);

    Some(controller)
}
