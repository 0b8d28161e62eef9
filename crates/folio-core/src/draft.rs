//! Contact form draft model and its storage seam.
//!
//! A draft is always written as a complete snapshot of the four fields. Reads
//! are lenient: non-string values are skipped per key, anything that is not a
//! JSON object counts as "no draft".

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

/// One of the four contact form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Nom,
    Email,
    Sujet,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub nom: String,
    pub email: String,
    pub sujet: String,
    pub message: String,
}

impl Draft {
    /// Build a snapshot from raw field values, trimming each one.
    pub fn snapshot(nom: &str, email: &str, sujet: &str, message: &str) -> Self {
        Self {
            nom: nom.trim().to_owned(),
            email: email.trim().to_owned(),
            sujet: sujet.trim().to_owned(),
            message: message.trim().to_owned(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored record.
    pub fn from_stored(raw: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let object = value.as_object().ok_or(FolioError::NotADraft)?;
        let field = |key: &str| {
            object
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_owned()
        };
        Ok(Self {
            nom: field("nom"),
            email: field("email"),
            sujet: field("sujet"),
            message: field("message"),
        })
    }

    /// Values to write back into the form on page load. `None` means the
    /// field keeps whatever the page rendered.
    pub fn prefill_values(&self) -> [(DraftField, Option<&str>); 4] {
        fn keep_empty(v: &str) -> Option<&str> { if v.is_empty() { None } else { Some(v) } }
        [
            (DraftField::Nom, keep_empty(&self.nom)),
            (DraftField::Email, keep_empty(&self.email)),
            (DraftField::Sujet, keep_empty(&self.sujet)),
            (DraftField::Message, keep_empty(&self.message)),
        ]
    }

    pub fn is_complete(&self) -> bool {
        [&self.nom, &self.email, &self.sujet, &self.message]
            .iter()
            .all(|v| !v.is_empty())
    }
}

/// Persistent storage for the draft record.
pub trait DraftStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Default)]
pub struct InMemoryDraftStore {
    records: RefCell<HashMap<String, String>>,
}

impl InMemoryDraftStore {
    pub fn with_record(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .records
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }
}

impl DraftStore for InMemoryDraftStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.records
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.records.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: DraftStore + ?Sized> DraftStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_trims_every_field() {
        let draft = Draft::snapshot("  Jo ", "j@e.com\n", "\tHi", "Hey  ");
        assert_eq!(draft, Draft::snapshot("Jo", "j@e.com", "Hi", "Hey"));
        assert_eq!(draft.nom, "Jo");
    }

    #[test]
    fn serialized_draft_always_has_all_keys() {
        let json = Draft::snapshot("Jo", "", "", "").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        for key in ["nom", "email", "sujet", "message"] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object["email"], "");
    }

    #[test]
    fn stored_record_tolerates_missing_and_non_string_keys() {
        let draft = Draft::from_stored(r#"{"nom": "Jo", "email": 42}"#).unwrap();
        assert_eq!(draft.nom, "Jo");
        assert_eq!(draft.email, "");
        assert_eq!(draft.message, "");
    }

    #[test]
    fn non_object_record_is_not_a_draft() {
        assert!(matches!(Draft::from_stored("[1, 2]"), Err(FolioError::NotADraft)));
        assert!(matches!(Draft::from_stored("null"), Err(FolioError::NotADraft)));
        assert!(matches!(
            Draft::from_stored("{nom:"),
            Err(FolioError::MalformedDraft(_))
        ));
    }

    #[test]
    fn empty_stored_values_leave_fields_untouched() {
        let draft = Draft::from_stored(r#"{"nom":"Jo","sujet":""}"#).unwrap();
        assert_eq!(
            draft.prefill_values(),
            [
                (DraftField::Nom, Some("Jo")),
                (DraftField::Email, None),
                (DraftField::Sujet, None),
                (DraftField::Message, None),
            ]
        );
    }

    #[test]
    fn completeness_requires_all_four_fields() {
        assert!(Draft::snapshot("a", "b", "c", "d").is_complete());
        assert!(!Draft::snapshot("a", "b", "c", "  ").is_complete());
    }
}
