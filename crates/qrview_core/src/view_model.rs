use crate::{EncodingKind, FailureKind, StatusTone, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub input_hint: &'static str,
    pub kind: EncodingKind,
    pub preview_text: String,
    pub size_label: String,
    pub pixel_size: u32,
    pub theme: Theme,
    pub theme_toggle_pressed: bool,
    pub has_symbol: bool,
    pub status: Option<StatusView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub text: String,
    pub tone: StatusTone,
    pub failure: Option<FailureKind>,
}
