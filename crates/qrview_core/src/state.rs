use std::time::Duration;

use crate::text::EMPTY_PREVIEW;
use crate::view_model::{AppViewModel, StatusView};
use crate::{ClipboardSupport, Effect, EncodingKind, EncodingRequest, Theme};

pub const DEFAULT_PIXEL_SIZE: u32 = 256;
pub const MAX_PIXEL_SIZE: u32 = 2048;
pub const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(3);

/// Core-side mirror of the rendered symbol slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SymbolState {
    #[default]
    Absent,
    Present {
        revision: u64,
        content: String,
        pixel_size: u32,
    },
}

impl SymbolState {
    pub fn is_present(&self) -> bool {
        matches!(self, SymbolState::Present { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

/// Failure classes reported on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Empty input blocks the action.
    Validation,
    /// The platform lacks the capability (e.g. image clipboard).
    CapabilityAbsent,
    /// The platform rejected the operation.
    OperationFailed,
    /// No rendered symbol surface exists.
    MissingArtifact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
    pub failure: Option<FailureKind>,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    kind: EncodingKind,
    pixel_size: u32,
    preview_text: String,
    symbol: SymbolState,
    symbol_revision: u64,
    theme: Theme,
    clipboard: ClipboardSupport,
    status: Option<StatusLine>,
    status_generation: u64,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            kind: EncodingKind::default(),
            pixel_size: DEFAULT_PIXEL_SIZE,
            preview_text: EMPTY_PREVIEW.to_string(),
            symbol: SymbolState::Absent,
            symbol_revision: 0,
            theme: Theme::default(),
            clipboard: ClipboardSupport::default(),
            status: None,
            status_generation: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input_hint: self.kind.input_hint(),
            kind: self.kind,
            preview_text: self.preview_text.clone(),
            size_label: format!("{}px", self.pixel_size),
            pixel_size: self.pixel_size,
            theme: self.theme,
            theme_toggle_pressed: self.theme == Theme::Light,
            has_symbol: self.symbol.is_present(),
            status: self.status.as_ref().map(|status| StatusView {
                text: status.text.clone(),
                tone: status.tone,
                failure: status.failure,
            }),
            dirty: self.dirty,
        }
    }

    /// Current inputs with the raw text already trimmed.
    pub fn request(&self) -> EncodingRequest {
        EncodingRequest {
            raw_text: self.input.trim().to_string(),
            kind: self.kind,
            pixel_size: self.pixel_size,
        }
    }

    pub fn symbol(&self) -> &SymbolState {
        &self.symbol
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn clipboard(&self) -> ClipboardSupport {
        self.clipboard
    }

    /// Returns whether the state changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
        self.dirty = true;
    }

    pub(crate) fn set_kind(&mut self, kind: EncodingKind) {
        self.kind = kind;
        self.dirty = true;
    }

    pub(crate) fn set_pixel_size(&mut self, pixel_size: u32) {
        self.pixel_size = pixel_size;
        self.dirty = true;
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.dirty = true;
    }

    pub(crate) fn set_clipboard(&mut self, clipboard: ClipboardSupport) {
        self.clipboard = clipboard;
    }

    pub(crate) fn set_preview_text(&mut self, text: String) {
        self.preview_text = text;
        self.dirty = true;
    }

    /// Marks a new symbol as present and returns its revision.
    pub(crate) fn show_symbol(&mut self, content: String, pixel_size: u32) -> u64 {
        self.symbol_revision += 1;
        self.symbol = SymbolState::Present {
            revision: self.symbol_revision,
            content,
            pixel_size,
        };
        self.dirty = true;
        self.symbol_revision
    }

    pub(crate) fn clear_symbol(&mut self) {
        self.symbol = SymbolState::Absent;
        self.dirty = true;
    }

    /// Drops the symbol only if it is still the one with `revision`.
    pub(crate) fn drop_symbol_revision(&mut self, revision: u64) -> bool {
        match self.symbol {
            SymbolState::Present { revision: current, .. } if current == revision => {
                self.clear_symbol();
                true
            }
            _ => false,
        }
    }

    /// Replaces the status line and returns the timer effect that clears it.
    pub(crate) fn post_status(
        &mut self,
        text: impl Into<String>,
        tone: StatusTone,
        failure: Option<FailureKind>,
    ) -> Effect {
        self.status_generation += 1;
        self.status = Some(StatusLine {
            text: text.into(),
            tone,
            failure,
            generation: self.status_generation,
        });
        self.dirty = true;
        Effect::ScheduleStatusClear {
            generation: self.status_generation,
            after: STATUS_CLEAR_AFTER,
        }
    }

    pub(crate) fn post_failure(&mut self, text: impl Into<String>, failure: FailureKind) -> Effect {
        self.post_status(text, StatusTone::Error, Some(failure))
    }

    /// Clears the status if `generation` is still the current one.
    pub(crate) fn expire_status(&mut self, generation: u64) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| status.generation == generation)
        {
            self.status = None;
            self.dirty = true;
        }
    }
}
