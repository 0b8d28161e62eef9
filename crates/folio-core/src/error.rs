//! Error types shared by the controllers and their host bindings.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Error, Debug)]
pub enum FolioError {
    /// Storage is unavailable or rejected the operation (quota, privacy mode).
    #[error("storage error: {0}")]
    Storage(String),

    /// The stored draft is not valid JSON.
    #[error("malformed draft: {0}")]
    MalformedDraft(#[from] serde_json::Error),

    /// The stored draft parsed, but is not a JSON object.
    #[error("stored draft is not an object")]
    NotADraft,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A required element is absent from the document.
    #[error("missing element {0}")]
    MissingElement(&'static str),
}
