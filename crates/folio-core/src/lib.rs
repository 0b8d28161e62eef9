//! Host-independent behaviour of the portfolio site enhancements.
//!
//! Every controller here is a small state machine driven by the host (the
//! `folio-wasm` crate in the browser). DOM and storage access go through the
//! capability traits each module declares, so the rules are testable natively.

pub mod config;
pub mod contact;
pub mod draft;
pub mod error;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod validation;

pub use config::SiteConfig;
pub use error::{FolioError, Result};
