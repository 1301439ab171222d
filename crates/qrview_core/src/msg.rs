use crate::{EncodingKind, Theme};

/// Clipboard capabilities detected by the platform at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipboardSupport {
    /// Async text write is available; otherwise the legacy copy command is used.
    pub native_text: bool,
    /// Image items can be written.
    pub image: bool,
}

/// Why a platform action did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// No rendered surface was present when the action ran.
    MissingArtifact,
    /// The platform cannot perform this kind of action at all.
    CapabilityAbsent,
    /// The platform attempted the action and rejected it.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page is wired up; carries the persisted theme (if any) and clipboard support.
    Started {
        stored_theme: Option<Theme>,
        clipboard: ClipboardSupport,
    },
    /// User edited the text input (full current value).
    TextInput(String),
    /// User picked a different type radio.
    TypeChanged(EncodingKind),
    /// User moved the size slider (raw slider value).
    SizeInput(String),
    DownloadClicked,
    CopyTextClicked,
    CopyImageClicked,
    ThemeToggleClicked,
    /// The renderer rejected the symbol for `revision`.
    SymbolRenderFailed { revision: u64, reason: String },
    /// File save finished; `Ok` carries the filename used.
    DownloadFinished(Result<String, ActionError>),
    TextCopied(Result<(), ActionError>),
    ImageCopied(Result<(), ActionError>),
    /// The auto-clear timer for status `generation` fired.
    StatusExpired { generation: u64 },
    /// Fallback for placeholder wiring.
    NoOp,
}
