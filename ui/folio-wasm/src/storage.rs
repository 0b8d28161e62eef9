//! `localStorage` draft store.
//!
//! Every call re-acquires the storage handle; privacy modes can revoke it at
//! any point and each failure surfaces as `FolioError::Storage`.

use folio_core::draft::DraftStore;
use folio_core::{FolioError, Result};
use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Default)]
pub struct LocalDraftStore;

fn js_err(err: JsValue) -> FolioError {
    FolioError::Storage(format!("{:?}", err))
}

fn storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| FolioError::Storage("no window".into()))?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| FolioError::Storage("localStorage unavailable".into()))
}

impl DraftStore for LocalDraftStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        storage()?.get_item(key).map_err(js_err)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        storage()?.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> Result<()> {
        storage()?.remove_item(key).map_err(js_err)
    }
}
