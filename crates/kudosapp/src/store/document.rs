//! The browser's own cookie jar, through `document.cookie`.

use super::CookieJar;
use crate::error::{KudosError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

pub struct DocumentJar {
    document: HtmlDocument,
}

impl DocumentJar {
    pub fn new(document: HtmlDocument) -> Self {
        Self { document }
    }

    /// Jar of the page this module runs in.
    pub fn from_window() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| KudosError::Store("No document available".to_string()))?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| KudosError::Store("Document is not an HTML document".to_string()))?;
        Ok(Self::new(document))
    }
}

fn js_error(err: JsValue) -> KudosError {
    KudosError::Store(format!("document.cookie: {:?}", err))
}

impl CookieJar for DocumentJar {
    fn cookie_header(&self) -> Result<String> {
        self.document.cookie().map_err(js_error)
    }

    fn set_cookie(&self, line: &str) -> Result<()> {
        self.document.set_cookie(line).map_err(js_error)
    }
}
