use crate::text;
use crate::{
    encoded_text, parse_pixel_size, ActionError, AppState, CopyMethod, Effect, FailureKind, Msg,
    StatusTone, SymbolRequest, Theme,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started {
            stored_theme,
            clipboard,
        } => {
            state.set_theme(stored_theme.unwrap_or_default());
            state.set_clipboard(clipboard);
            regenerate(&mut state)
        }
        Msg::TextInput(value) => {
            state.set_input(value);
            regenerate(&mut state)
        }
        Msg::TypeChanged(kind) => {
            state.set_kind(kind);
            regenerate(&mut state)
        }
        Msg::SizeInput(raw) => {
            state.set_pixel_size(parse_pixel_size(&raw));
            regenerate(&mut state)
        }
        Msg::DownloadClicked => {
            if state.request().is_empty() {
                vec![state.post_failure(text::DOWNLOAD_NEEDS_INPUT, FailureKind::Validation)]
            } else if !state.symbol().is_present() {
                vec![state.post_failure(text::DOWNLOAD_NO_SYMBOL, FailureKind::MissingArtifact)]
            } else {
                vec![Effect::DownloadPng]
            }
        }
        Msg::CopyTextClicked => {
            let request = state.request();
            if request.is_empty() {
                vec![state.post_failure(text::COPY_NEEDS_INPUT, FailureKind::Validation)]
            } else {
                let method = if state.clipboard().native_text {
                    CopyMethod::Native
                } else {
                    CopyMethod::Legacy
                };
                vec![Effect::CopyText {
                    text: request.encoded_text(),
                    method,
                }]
            }
        }
        Msg::CopyImageClicked => {
            if !state.symbol().is_present() {
                vec![state.post_failure(text::COPY_IMAGE_NO_SYMBOL, FailureKind::MissingArtifact)]
            } else if !state.clipboard().image {
                vec![state.post_failure(
                    text::IMAGE_CLIPBOARD_UNSUPPORTED,
                    FailureKind::CapabilityAbsent,
                )]
            } else {
                vec![Effect::CopyImage]
            }
        }
        Msg::ThemeToggleClicked => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            let announcement = match theme {
                Theme::Dark => text::THEME_DARK,
                Theme::Light => text::THEME_LIGHT,
            };
            vec![
                Effect::PersistTheme(theme),
                state.post_status(announcement, StatusTone::Info, None),
            ]
        }
        Msg::SymbolRenderFailed { revision, .. } => {
            if state.drop_symbol_revision(revision) {
                vec![state.post_failure(text::RENDER_FAILED, FailureKind::OperationFailed)]
            } else {
                Vec::new()
            }
        }
        Msg::DownloadFinished(result) => match result {
            Ok(filename) => vec![state.post_status(
                text::downloaded(&filename),
                StatusTone::Success,
                None,
            )],
            Err(ActionError::MissingArtifact) => {
                vec![state.post_failure(text::DOWNLOAD_NO_SYMBOL, FailureKind::MissingArtifact)]
            }
            Err(err) => vec![state.post_failure(text::DOWNLOAD_FAILED, failure_kind(&err))],
        },
        // Completions are applied even if the input changed since the copy was issued.
        Msg::TextCopied(result) => match result {
            Ok(()) => vec![state.post_status(text::TEXT_COPIED, StatusTone::Success, None)],
            Err(err) => vec![state.post_failure(text::COPY_TEXT_FAILED, failure_kind(&err))],
        },
        Msg::ImageCopied(result) => match result {
            Ok(()) => vec![state.post_status(text::IMAGE_COPIED, StatusTone::Success, None)],
            Err(ActionError::MissingArtifact) => {
                vec![state.post_failure(text::COPY_IMAGE_NO_SYMBOL, FailureKind::MissingArtifact)]
            }
            Err(ActionError::CapabilityAbsent) => vec![state.post_failure(
                text::IMAGE_CLIPBOARD_UNSUPPORTED,
                FailureKind::CapabilityAbsent,
            )],
            Err(ActionError::Failed(_)) => {
                vec![state.post_failure(text::COPY_IMAGE_FAILED, FailureKind::OperationFailed)]
            }
        },
        Msg::StatusExpired { generation } => {
            state.expire_status(generation);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Brings preview text and symbol in line with the current inputs.
fn regenerate(state: &mut AppState) -> Vec<Effect> {
    let request = state.request();
    if request.is_empty() {
        state.clear_symbol();
        state.set_preview_text(text::EMPTY_PREVIEW.to_string());
        return vec![Effect::ClearSymbol];
    }

    let content = encoded_text(&request.raw_text, request.kind);
    let revision = state.show_symbol(content.clone(), request.pixel_size);
    state.set_preview_text(content.clone());
    vec![Effect::RenderSymbol(SymbolRequest {
        revision,
        content,
        pixel_size: request.pixel_size,
    })]
}

fn failure_kind(err: &ActionError) -> FailureKind {
    match err {
        ActionError::MissingArtifact => FailureKind::MissingArtifact,
        ActionError::CapabilityAbsent => FailureKind::CapabilityAbsent,
        ActionError::Failed(_) => FailureKind::OperationFailed,
    }
}
