//! Contact form controller.
//!
//! Field changes persist a full snapshot and re-validate. Submission is only
//! gated here; the browser's default submit carries the form to the relay.
//! The draft survives a send so an abandoned or failed send can be resumed,
//! and is dropped when the relay's confirmation page is reached.

use crate::draft::{Draft, DraftStore};
use crate::page::PageInfo;
use crate::validation::{self, FormStatus};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Cancel the default submit and show the status.
    Block(FormStatus),
    /// Disable the submit control and let the default submit proceed.
    Proceed,
}

/// Delete the stored draft if the relay has redirected to its confirmation
/// page. Returns whether the page was the confirmation page.
pub fn discard_after_send<S: DraftStore>(
    store: &S,
    draft_key: &str,
    page: &PageInfo,
    confirmation_page: &str,
) -> bool {
    if !page.is_confirmation(confirmation_page) {
        return false;
    }
    if let Err(err) = store.remove(draft_key) {
        debug!("draft removal failed: {}", err);
    }
    true
}

pub struct ContactForm<S: DraftStore> {
    store: S,
    draft_key: String,
    status: FormStatus,
}

impl<S: DraftStore> ContactForm<S> {
    pub fn new(store: S, draft_key: impl Into<String>) -> Self {
        Self {
            store,
            draft_key: draft_key.into(),
            status: FormStatus::Incomplete,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Draft to pre-fill on page load, if any.
    ///
    /// On the confirmation page the stored draft is deleted instead. Empty
    /// values in the returned draft mean "leave the field untouched".
    pub fn restore(&self, page: &PageInfo, confirmation_page: &str) -> Option<Draft> {
        if discard_after_send(&self.store, &self.draft_key, page, confirmation_page) {
            return None;
        }

        let raw = match self.store.load(&self.draft_key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(err) => {
                debug!("draft load failed: {}", err);
                return None;
            }
        };

        match Draft::from_stored(&raw) {
            Ok(draft) => Some(draft),
            Err(err) => {
                debug!("ignoring stored draft: {}", err);
                None
            }
        }
    }

    /// Field change: persist the snapshot, then re-validate.
    pub fn on_change(&mut self, draft: &Draft) -> FormStatus {
        self.persist(draft);
        self.refresh(draft)
    }

    /// Re-validate without touching storage.
    pub fn refresh(&mut self, draft: &Draft) -> FormStatus {
        self.status = validation::validate(draft);
        self.status
    }

    pub fn on_submit(&mut self, draft: &Draft) -> SubmitDecision {
        let status = self.refresh(draft);
        if !status.permits_submit() {
            return SubmitDecision::Block(status);
        }
        self.status = FormStatus::Sending;
        SubmitDecision::Proceed
    }

    fn persist(&self, draft: &Draft) {
        let result = draft
            .to_json()
            .and_then(|json| self.store.save(&self.draft_key, &json));
        if let Err(err) = result {
            debug!("draft save failed: {}", err);
        }
    }
}
