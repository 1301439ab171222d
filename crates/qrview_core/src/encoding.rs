use crate::state::{DEFAULT_PIXEL_SIZE, MAX_PIXEL_SIZE};
use crate::text::{TEXT_HINT, URL_HINT};

const HTTPS_PREFIX: &str = "https://";

/// What the user says the input is; selects URL normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingKind {
    #[default]
    Url,
    Text,
}

impl EncodingKind {
    /// Parses the value attribute of the type selector radios.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "url" => Some(Self::Url),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
        }
    }

    /// Placeholder shown in the empty input for this kind.
    pub fn input_hint(self) -> &'static str {
        match self {
            Self::Url => URL_HINT,
            Self::Text => TEXT_HINT,
        }
    }
}

/// Snapshot of the inputs a symbol is generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingRequest {
    pub raw_text: String,
    pub kind: EncodingKind,
    pub pixel_size: u32,
}

impl EncodingRequest {
    pub fn is_empty(&self) -> bool {
        self.raw_text.is_empty()
    }

    /// The value embedded in the symbol. Always derived, never stored.
    pub fn encoded_text(&self) -> String {
        encoded_text(&self.raw_text, self.kind)
    }
}

/// Applies the URL-scheme rule: URLs without `http://` or `https://` get
/// `https://` prepended, everything else is passed through verbatim.
pub fn encoded_text(raw: &str, kind: EncodingKind) -> String {
    match kind {
        EncodingKind::Url if !has_web_scheme(raw) => format!("{HTTPS_PREFIX}{raw}"),
        EncodingKind::Url | EncodingKind::Text => raw.to_string(),
    }
}

/// Case-insensitive `^https?://` check.
pub fn has_web_scheme(raw: &str) -> bool {
    let starts_with = |prefix: &str| {
        raw.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    starts_with("http://") || starts_with(HTTPS_PREFIX)
}

/// Reads the slider value. Unparsable or zero falls back to the default,
/// oversized values are clamped.
pub fn parse_pixel_size(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => DEFAULT_PIXEL_SIZE,
        Ok(size) => size.min(MAX_PIXEL_SIZE),
    }
}
