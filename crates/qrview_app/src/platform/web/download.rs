use qrview_engine::{png_data_url, FileSaver, SaveError};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement};

use super::describe_js;

/// Saves through a temporary `<a download>` pointing at a PNG data URL.
pub(super) struct AnchorDownload {
    document: Document,
}

impl AnchorDownload {
    pub(super) fn new(document: Document) -> Self {
        Self { document }
    }
}

impl FileSaver for AnchorDownload {
    fn save_png(&self, filename: &str, png: &[u8]) -> Result<(), SaveError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| SaveError::Unavailable("document has no body".to_string()))?;
        let anchor = self
            .document
            .create_element("a")
            .map_err(|err| SaveError::Unavailable(describe_js(&err)))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| SaveError::Unavailable("anchor element not supported".to_string()))?;

        anchor.set_href(&png_data_url(png));
        anchor.set_download(filename);
        body.append_child(&anchor)
            .map_err(|err| SaveError::Failed(describe_js(&err)))?;
        anchor.click();
        body.remove_child(&anchor)
            .map_err(|err| SaveError::Failed(describe_js(&err)))?;
        Ok(())
    }
}
