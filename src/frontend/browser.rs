//! Thin wrappers over browser APIs. Outside the hydrated client they are
//! inert, so server rendering never touches `window`.

use crate::services::scroll::{SectionId, SectionSpan};
use crate::services::session::{TOKEN_STORAGE_KEY, TokenStore};

/// Bearer token persisted in `localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        imp::storage_get(TOKEN_STORAGE_KEY)
    }

    fn save(&self, token: &str) {
        imp::storage_set(TOKEN_STORAGE_KEY, token);
    }

    fn clear(&self) {
        imp::storage_remove(TOKEN_STORAGE_KEY);
    }
}

/// Blocking error message.
pub fn alert(message: &str) {
    log::error!("{}", message);
    imp::alert(message);
}

/// Blocking yes/no question. Always "no" outside the browser.
pub fn confirm(message: &str) -> bool {
    imp::confirm(message)
}

pub fn scroll_y() -> f64 {
    imp::scroll_y()
}

pub fn scroll_to(id: SectionId) {
    imp::scroll_to(id.as_str());
}

/// Current layout of every section element that exists on the page.
pub fn section_spans() -> Vec<SectionSpan> {
    SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            imp::element_box(id.as_str()).map(|(top, height)| SectionSpan { id, top, height })
        })
        .collect()
}

/// File chosen in the `<input type="file">` with `input_id`:
/// `(name, content type, bytes)`.
pub async fn selected_file(input_id: &str) -> Option<(String, String, Vec<u8>)> {
    imp::selected_file(input_id).await
}

#[cfg(feature = "hydrate")]
mod imp {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlElement, HtmlInputElement, Storage};

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn storage_get(key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    pub fn storage_set(key: &str, value: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn storage_remove(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }

    pub fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    pub fn confirm(message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    pub fn scroll_y() -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn element(id: &str) -> Option<HtmlElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    pub fn scroll_to(id: &str) {
        if let Some(element) = element(id) {
            element.scroll_into_view();
        }
    }

    pub fn element_box(id: &str) -> Option<(f64, f64)> {
        element(id).map(|el| (f64::from(el.offset_top()), f64::from(el.offset_height())))
    }

    pub async fn selected_file(input_id: &str) -> Option<(String, String, Vec<u8>)> {
        let input = web_sys::window()?
            .document()?
            .get_element_by_id(input_id)?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        let file = input.files()?.get(0)?;

        let buffer = JsFuture::from(file.array_buffer()).await.ok()?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

        let content_type = match file.type_() {
            t if t.is_empty() => "application/octet-stream".to_string(),
            t => t,
        };

        Some((file.name(), content_type, bytes))
    }
}

#[cfg(not(feature = "hydrate"))]
mod imp {
    pub fn storage_get(_key: &str) -> Option<String> {
        None
    }

    pub fn storage_set(_key: &str, _value: &str) {}

    pub fn storage_remove(_key: &str) {}

    pub fn alert(_message: &str) {}

    pub fn confirm(_message: &str) -> bool {
        false
    }

    pub fn scroll_y() -> f64 {
        0.0
    }

    pub fn scroll_to(_id: &str) {}

    pub fn element_box(_id: &str) -> Option<(f64, f64)> {
        None
    }

    pub async fn selected_file(_input_id: &str) -> Option<(String, String, Vec<u8>)> {
        None
    }
}
