use qrview_engine::RenderedSymbol;
use qrview_logging::qr_warn;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, ImageData};

use super::describe_js;
use crate::platform::services::{DomError, Page};
use crate::platform::ui::constants::{CLASS_ENTRANCE, SYMBOL_CONTAINER};
use crate::platform::ui::{PageCommand, Target};

pub(super) struct WebPage {
    document: Document,
    container: HtmlElement,
}

impl WebPage {
    pub(super) fn new(document: &Document) -> Result<Self, DomError> {
        let container = document
            .get_element_by_id(SYMBOL_CONTAINER)
            .ok_or_else(|| DomError(format!("missing element #{SYMBOL_CONTAINER}")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError(format!("#{SYMBOL_CONTAINER} is not an HTML element")))?;
        Ok(Self {
            document: document.clone(),
            container,
        })
    }

    fn target(&self, target: Target) -> Option<Element> {
        match target {
            Target::Root => self.document.document_element(),
            Target::Element(id) => self.element(id),
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            qr_warn!("Element #{} not found", id);
        }
        element
    }

    fn paint(&self, symbol: &RenderedSymbol) -> Result<HtmlCanvasElement, DomError> {
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(|err| DomError(describe_js(&err)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DomError("canvas not supported".to_string()))?;
        canvas.set_width(symbol.width());
        canvas.set_height(symbol.height());

        let context = canvas
            .get_context("2d")
            .map_err(|err| DomError(describe_js(&err)))?
            .ok_or_else(|| DomError("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DomError("unexpected 2d context type".to_string()))?;
        let pixels = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(symbol.rgba()),
            symbol.width(),
            symbol.height(),
        )
        .map_err(|err| DomError(describe_js(&err)))?;
        context
            .put_image_data(&pixels, 0.0, 0.0)
            .map_err(|err| DomError(describe_js(&err)))?;
        Ok(canvas)
    }
}

impl Page for WebPage {
    fn apply(&self, command: &PageCommand) {
        let result = match command {
            PageCommand::SetText { element, text } => {
                if let Some(element) = self.element(element) {
                    element.set_text_content(Some(text));
                }
                Ok(())
            }
            PageCommand::SetAttribute {
                target,
                name,
                value,
            } => match self.target(*target) {
                Some(element) => element.set_attribute(name, value),
                None => Ok(()),
            },
            PageCommand::SetClass {
                element,
                class,
                enabled,
            } => match self.element(element) {
                Some(element) => element
                    .class_list()
                    .toggle_with_force(class, *enabled)
                    .map(|_| ()),
                None => Ok(()),
            },
        };
        if let Err(err) = result {
            qr_warn!("Page command {:?} failed: {}", command, describe_js(&err));
        }
    }

    fn mount_symbol(&self, symbol: &RenderedSymbol) -> Result<(), DomError> {
        let canvas = self.paint(symbol)?;
        self.container
            .append_child(&canvas)
            .map_err(|err| DomError(describe_js(&err)))?;
        Ok(())
    }

    fn clear_symbol(&self) {
        self.container.set_inner_html("");
    }

    fn play_entrance(&self) {
        let classes = self.container.class_list();
        let _ = classes.remove_1(CLASS_ENTRANCE);
        // Reading layout restarts the animation when the class comes back.
        let _ = self.container.offset_width();
        if let Err(err) = classes.add_1(CLASS_ENTRANCE) {
            qr_warn!("Entrance animation failed: {}", describe_js(&err));
        }
    }
}
