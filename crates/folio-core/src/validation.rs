//! Contact form validation and the status shown under the form.

use crate::draft::Draft;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Incomplete,
    InvalidEmail,
    Ready,
    Sending,
}

impl FormStatus {
    pub fn message(self) -> &'static str {
        match self {
            Self::Incomplete => "Remplissez tous les champs pour envoyer.",
            Self::InvalidEmail => "Email invalide : vérifiez le format.",
            Self::Ready => "Formulaire prêt ✅",
            Self::Sending => "Envoi en cours... (vérifiez ensuite votre boîte mail) ⏳",
        }
    }

    /// Value of the status element's `data-type` attribute.
    pub fn kind(self) -> &'static str {
        match self {
            Self::Incomplete | Self::Sending => "info",
            Self::InvalidEmail => "error",
            Self::Ready => "success",
        }
    }

    pub fn permits_submit(self) -> bool {
        self == Self::Ready
    }
}

/// Completeness is checked before the email format.
pub fn validate(draft: &Draft) -> FormStatus {
    if !draft.is_complete() {
        return FormStatus::Incomplete;
    }
    if !is_valid_email(&draft.email) {
        return FormStatus::InvalidEmail;
    }
    FormStatus::Ready
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("jo.doe@mail.example.org"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn empty_email_fails_completeness_first() {
        let draft = Draft::snapshot("Jo", "", "Hi", "Hey");
        assert_eq!(validate(&draft), FormStatus::Incomplete);
    }

    #[test]
    fn malformed_email_blocks() {
        let draft = Draft::snapshot("Jo", "a@b", "Hi", "Hey");
        let status = validate(&draft);
        assert_eq!(status, FormStatus::InvalidEmail);
        assert!(!status.permits_submit());
        assert_eq!(status.kind(), "error");
    }

    #[test]
    fn complete_draft_is_ready() {
        let draft = Draft::snapshot("Jo", "j@e.com", "Hi", "Hey");
        let status = validate(&draft);
        assert_eq!(status, FormStatus::Ready);
        assert!(status.permits_submit());
        assert_eq!(status.kind(), "success");
    }
}
