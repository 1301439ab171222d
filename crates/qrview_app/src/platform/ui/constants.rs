pub(crate) const INPUT_TEXT: &str = "qr-input";
pub(crate) const TYPE_RADIO_NAME: &str = "qr-type";
pub(crate) const SIZE_SLIDER: &str = "qr-size";
pub(crate) const SIZE_VALUE: &str = "qr-size-value";
pub(crate) const PREVIEW_TEXT: &str = "preview-text";
pub(crate) const SYMBOL_CONTAINER: &str = "qrcode";
pub(crate) const BUTTON_DOWNLOAD: &str = "download-qr-btn";
pub(crate) const BUTTON_COPY_TEXT: &str = "copy-text-btn";
pub(crate) const BUTTON_COPY_IMAGE: &str = "copy-image-btn";
pub(crate) const BUTTON_THEME: &str = "theme-toggle";
pub(crate) const STATUS_LINE: &str = "status-message";

pub(crate) const ATTR_THEME: &str = "data-theme";
pub(crate) const CLASS_VISIBLE: &str = "visible";
pub(crate) const CLASS_ERROR: &str = "error";
pub(crate) const CLASS_SUCCESS: &str = "success";
pub(crate) const CLASS_ENTRANCE: &str = "qr-enter";
