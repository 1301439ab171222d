//! QR preview core: pure state machine and view-model helpers.
mod effect;
mod encoding;
mod msg;
mod state;
mod text;
mod theme;
mod update;
mod view_model;

pub use effect::{CopyMethod, Effect, SymbolRequest};
pub use encoding::{encoded_text, has_web_scheme, parse_pixel_size, EncodingKind, EncodingRequest};
pub use msg::{ActionError, ClipboardSupport, Msg};
pub use state::{
    AppState, FailureKind, StatusLine, StatusTone, SymbolState, DEFAULT_PIXEL_SIZE,
    MAX_PIXEL_SIZE, STATUS_CLEAR_AFTER,
};
pub use text::{EMPTY_PREVIEW, TEXT_HINT, URL_HINT};
pub use theme::{Theme, UnknownTheme};
pub use update::update;
pub use view_model::{AppViewModel, StatusView};
