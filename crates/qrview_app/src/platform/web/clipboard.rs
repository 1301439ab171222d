use async_trait::async_trait;
use js_sys::{Array, Function, Object, Reflect, Uint8Array};
use qrview_engine::{Clipboard, ClipboardCapabilities, ClipboardError, PNG_MIME};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlDocument, HtmlTextAreaElement, Window};

use super::describe_js;

/// `navigator.clipboard` plus the `execCommand("copy")` fallback.
pub(super) struct WebClipboard {
    window: Window,
}

impl WebClipboard {
    pub(super) fn new(window: Window) -> Self {
        Self { window }
    }

    /// The async clipboard object, if this browser exposes one.
    fn native(&self) -> Option<JsValue> {
        let navigator = self.window.navigator();
        Reflect::get(&navigator, &"clipboard".into())
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    fn has_method(target: &JsValue, name: &str) -> bool {
        Reflect::get(target, &name.into())
            .map(|value| value.is_function())
            .unwrap_or(false)
    }

    fn clipboard_item(&self, blob: &Blob) -> Result<JsValue, ClipboardError> {
        let constructor = Reflect::get(&self.window, &"ClipboardItem".into())
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or(ClipboardError::Unavailable)?;
        let entries = Object::new();
        Reflect::set(&entries, &PNG_MIME.into(), blob).map_err(rejected)?;
        Reflect::construct(&constructor, &Array::of1(&entries)).map_err(rejected)
    }
}

fn rejected(err: JsValue) -> ClipboardError {
    ClipboardError::Rejected(describe_js(&err))
}

#[async_trait(?Send)]
impl Clipboard for WebClipboard {
    fn capabilities(&self) -> ClipboardCapabilities {
        let Some(native) = self.native() else {
            return ClipboardCapabilities::default();
        };
        ClipboardCapabilities {
            async_text: Self::has_method(&native, "writeText"),
            image: Self::has_method(&native, "write")
                && Self::has_method(&self.window, "ClipboardItem"),
        }
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self
            .native()
            .ok_or(ClipboardError::Unavailable)?
            .unchecked_into::<web_sys::Clipboard>();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(rejected)
    }

    fn write_text_legacy(&self, text: &str) -> Result<(), ClipboardError> {
        let document = self.window.document().ok_or(ClipboardError::Unavailable)?;
        let body = document.body().ok_or(ClipboardError::Unavailable)?;
        let scratch = document
            .create_element("textarea")
            .map_err(rejected)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| ClipboardError::Unavailable)?;
        scratch.set_value(text);
        scratch.set_attribute("readonly", "").map_err(rejected)?;
        scratch
            .set_attribute("style", "position:fixed;top:-1000px;left:-1000px;opacity:0")
            .map_err(rejected)?;
        body.append_child(&scratch).map_err(rejected)?;
        scratch.select();

        let copied = document
            .dyn_into::<HtmlDocument>()
            .map_err(|_| ClipboardError::Unavailable)
            .and_then(|html| html.exec_command("copy").map_err(rejected));
        let _ = body.remove_child(&scratch);

        match copied? {
            true => Ok(()),
            false => Err(ClipboardError::LegacyCommandFailed),
        }
    }

    async fn write_png(&self, png: &[u8]) -> Result<(), ClipboardError> {
        let native = self.native().ok_or(ClipboardError::Unavailable)?;
        let write = Reflect::get(&native, &"write".into())
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or(ClipboardError::Unavailable)?;

        let bytes = Uint8Array::from(png);
        let options = BlobPropertyBag::new();
        options.set_type(PNG_MIME);
        let blob = Blob::new_with_u8_array_sequence_and_options(&Array::of1(&bytes), &options)
            .map_err(rejected)?;
        let item = self.clipboard_item(&blob)?;

        let promise = write
            .call1(&native, &Array::of1(&item))
            .map_err(rejected)?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| ClipboardError::Rejected("write did not return a promise".to_string()))?;
        JsFuture::from(promise).await.map(|_| ()).map_err(rejected)
    }
}
