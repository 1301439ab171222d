pub(crate) mod constants;
pub(crate) mod render;

/// Where an attribute is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// The document root (`<html>`).
    Root,
    Element(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageCommand {
    SetText {
        element: &'static str,
        text: String,
    },
    SetAttribute {
        target: Target,
        name: &'static str,
        value: String,
    },
    SetClass {
        element: &'static str,
        class: &'static str,
        enabled: bool,
    },
}
