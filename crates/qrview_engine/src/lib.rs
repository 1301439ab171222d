//! QR preview engine: symbol rendering, PNG export and the platform seams
//! (storage, clipboard, file save) the controller talks to.
mod clipboard;
mod export;
mod render;
mod save;
mod store;

pub use clipboard::{Clipboard, ClipboardCapabilities, ClipboardError};
pub use export::{download_filename, png_data_url, ExportError, PNG_MIME};
pub use render::{
    ErrorCorrection, QrSymbolRenderer, RenderError, RenderSettings, RenderedSymbol,
    SymbolRenderer,
};
pub use save::{FileSaver, SaveError};
pub use store::{KeyValueStore, MemoryStore, StoreError};
