use qrview_core::{AppViewModel, StatusTone};

use super::constants::*;
use super::{PageCommand, Target};

#[allow(clippy::vec_init_then_push)]
pub(crate) fn render(view: &AppViewModel) -> Vec<PageCommand> {
    let mut cmds = Vec::new();

    cmds.push(PageCommand::SetAttribute {
        target: Target::Root,
        name: ATTR_THEME,
        value: view.theme.as_str().to_string(),
    });
    cmds.push(PageCommand::SetAttribute {
        target: Target::Element(BUTTON_THEME),
        name: "aria-pressed",
        value: view.theme_toggle_pressed.to_string(),
    });

    cmds.push(PageCommand::SetAttribute {
        target: Target::Element(INPUT_TEXT),
        name: "placeholder",
        value: view.input_hint.to_string(),
    });
    cmds.push(PageCommand::SetText {
        element: PREVIEW_TEXT,
        text: view.preview_text.clone(),
    });
    cmds.push(PageCommand::SetText {
        element: SIZE_VALUE,
        text: view.size_label.clone(),
    });

    let tone = view.status.as_ref().map(|status| status.tone);
    cmds.push(PageCommand::SetText {
        element: STATUS_LINE,
        text: view
            .status
            .as_ref()
            .map(|status| status.text.clone())
            .unwrap_or_default(),
    });
    cmds.push(PageCommand::SetClass {
        element: STATUS_LINE,
        class: CLASS_VISIBLE,
        enabled: view.status.is_some(),
    });
    cmds.push(PageCommand::SetClass {
        element: STATUS_LINE,
        class: CLASS_ERROR,
        enabled: tone == Some(StatusTone::Error),
    });
    cmds.push(PageCommand::SetClass {
        element: STATUS_LINE,
        class: CLASS_SUCCESS,
        enabled: tone == Some(StatusTone::Success),
    });

    cmds
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qrview_core::{update, AppState, ClipboardSupport, Msg, Theme, EMPTY_PREVIEW, URL_HINT};

    use super::*;

    fn text_of(cmds: &[PageCommand], element: &str) -> Option<String> {
        cmds.iter().find_map(|cmd| match cmd {
            PageCommand::SetText { element: id, text } if *id == element => Some(text.clone()),
            _ => None,
        })
    }

    fn attribute_of(cmds: &[PageCommand], target: Target, name: &str) -> Option<String> {
        cmds.iter().find_map(|cmd| match cmd {
            PageCommand::SetAttribute {
                target: t,
                name: n,
                value,
            } if *t == target && *n == name => Some(value.clone()),
            _ => None,
        })
    }

    fn class_of(cmds: &[PageCommand], class: &str) -> Option<bool> {
        cmds.iter().find_map(|cmd| match cmd {
            PageCommand::SetClass {
                element: STATUS_LINE,
                class: c,
                enabled,
            } if *c == class => Some(*enabled),
            _ => None,
        })
    }

    #[test]
    fn initial_view_renders_placeholder_and_dark_theme() {
        let cmds = render(&AppState::new().view());

        assert_eq!(text_of(&cmds, PREVIEW_TEXT).as_deref(), Some(EMPTY_PREVIEW));
        assert_eq!(text_of(&cmds, SIZE_VALUE).as_deref(), Some("256px"));
        assert_eq!(
            attribute_of(&cmds, Target::Root, ATTR_THEME).as_deref(),
            Some("dark")
        );
        assert_eq!(
            attribute_of(&cmds, Target::Element(BUTTON_THEME), "aria-pressed").as_deref(),
            Some("false")
        );
        assert_eq!(
            attribute_of(&cmds, Target::Element(INPUT_TEXT), "placeholder").as_deref(),
            Some(URL_HINT)
        );
        assert_eq!(class_of(&cmds, CLASS_VISIBLE), Some(false));
    }

    #[test]
    fn status_and_theme_are_reflected() {
        let (state, _) = update(
            AppState::new(),
            Msg::Started {
                stored_theme: Some(Theme::Dark),
                clipboard: ClipboardSupport::default(),
            },
        );
        let (state, _) = update(state, Msg::ThemeToggleClicked);
        let cmds = render(&state.view());

        assert_eq!(
            attribute_of(&cmds, Target::Root, ATTR_THEME).as_deref(),
            Some("light")
        );
        assert_eq!(
            attribute_of(&cmds, Target::Element(BUTTON_THEME), "aria-pressed").as_deref(),
            Some("true")
        );
        assert_eq!(class_of(&cmds, CLASS_VISIBLE), Some(true));
        assert_eq!(class_of(&cmds, CLASS_ERROR), Some(false));
        assert!(text_of(&cmds, STATUS_LINE).is_some_and(|text| !text.is_empty()));
    }
}
