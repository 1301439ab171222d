//! Browser shell: wires the DOM, storage, clipboard and timers to the controller.

mod clipboard;
mod download;
mod page;
mod storage;
mod tasks;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use chrono::Utc;
use log::LevelFilter;
use qrview_core::{EncodingKind, Msg};
use qrview_engine::QrSymbolRenderer;
use qrview_logging::{initialize_console, qr_debug, qr_info, qr_warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlInputElement};

use super::app::PreviewController;
use super::services::{DomError, Services};
use super::ui::constants::{
    BUTTON_COPY_IMAGE, BUTTON_COPY_TEXT, BUTTON_DOWNLOAD, BUTTON_THEME, INPUT_TEXT, SIZE_SLIDER,
    TYPE_RADIO_NAME,
};
use clipboard::WebClipboard;
use download::AnchorDownload;
use page::WebPage;
use tasks::{BrowserSpawner, GlooStatusTimer, PumpHook};

pub(crate) fn run_app() -> Result<(), DomError> {
    console_error_panic_hook::set_once();
    initialize_console(LevelFilter::Info);

    let window = web_sys::window().ok_or_else(|| DomError("no global window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| DomError("window has no document".to_string()))?;

    let hook = PumpHook::default();
    let services = Services {
        page: Rc::new(WebPage::new(&document)?),
        store: storage::open(&window),
        clipboard: Rc::new(WebClipboard::new(window.clone())),
        saver: Rc::new(AnchorDownload::new(document.clone())),
        renderer: Box::new(QrSymbolRenderer::default()),
        timer: Box::new(GlooStatusTimer::new(hook.clone())),
        spawner: Rc::new(BrowserSpawner::new(hook.clone())),
        now_utc: Rc::new(Utc::now),
    };

    let controller = PreviewController::start(services);
    let dispatcher = Dispatcher {
        msg_tx: controller.sender(),
        controller: Rc::new(RefCell::new(controller)),
    };
    hook.bind(&dispatcher.controller);

    sync_form(&document, &dispatcher)?;
    bind_controls(&document, &dispatcher)?;
    qr_info!("QR preview ready");
    Ok(())
}

/// Routes DOM events into the controller.
#[derive(Clone)]
struct Dispatcher {
    controller: Rc<RefCell<PreviewController>>,
    msg_tx: mpsc::Sender<Msg>,
}

impl Dispatcher {
    fn post(&self, msg: Msg) {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.dispatch(msg),
            // Re-entered from inside a dispatch; the running loop drains the queue.
            Err(_) => {
                if self.msg_tx.send(msg).is_err() {
                    qr_warn!("Controller is gone, dropping event");
                }
            }
        }
    }
}

/// Picks up values the browser restored into the form before the module loaded.
fn sync_form(document: &Document, dispatcher: &Dispatcher) -> Result<(), DomError> {
    let slider: HtmlInputElement = element(document, SIZE_SLIDER)?;
    if !slider.value().is_empty() {
        dispatcher.post(Msg::SizeInput(slider.value()));
    }
    for radio in type_radios(document)? {
        if radio.checked() {
            if let Some(kind) = EncodingKind::from_value(&radio.value()) {
                if kind != EncodingKind::default() {
                    dispatcher.post(Msg::TypeChanged(kind));
                }
            }
        }
    }
    let input: HtmlInputElement = element(document, INPUT_TEXT)?;
    if !input.value().is_empty() {
        dispatcher.post(Msg::TextInput(input.value()));
    }
    Ok(())
}

fn bind_controls(document: &Document, dispatcher: &Dispatcher) -> Result<(), DomError> {
    let input: HtmlInputElement = element(document, INPUT_TEXT)?;
    {
        let dispatcher = dispatcher.clone();
        let source = input.clone();
        listen(&input, "input", move |_| {
            dispatcher.post(Msg::TextInput(source.value()))
        })?;
    }

    let slider: HtmlInputElement = element(document, SIZE_SLIDER)?;
    {
        let dispatcher = dispatcher.clone();
        let source = slider.clone();
        listen(&slider, "input", move |_| {
            dispatcher.post(Msg::SizeInput(source.value()))
        })?;
    }

    for radio in type_radios(document)? {
        let dispatcher = dispatcher.clone();
        let source = radio.clone();
        listen(&radio, "change", move |_| {
            if !source.checked() {
                return;
            }
            match EncodingKind::from_value(&source.value()) {
                Some(kind) => dispatcher.post(Msg::TypeChanged(kind)),
                None => qr_warn!("Unknown encoding kind {:?}", source.value()),
            }
        })?;
    }

    let buttons: [(&str, fn() -> Msg); 4] = [
        (BUTTON_DOWNLOAD, || Msg::DownloadClicked),
        (BUTTON_COPY_TEXT, || Msg::CopyTextClicked),
        (BUTTON_COPY_IMAGE, || Msg::CopyImageClicked),
        (BUTTON_THEME, || Msg::ThemeToggleClicked),
    ];
    for (id, msg) in buttons {
        let button: web_sys::HtmlElement = element(document, id)?;
        let dispatcher = dispatcher.clone();
        listen(&button, "click", move |_| dispatcher.post(msg()))?;
    }

    qr_debug!("Controls bound");
    Ok(())
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| DomError(format!("listen {event}: {}", describe_js(&err))))?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn type_radios(document: &Document) -> Result<Vec<HtmlInputElement>, DomError> {
    let nodes = document
        .query_selector_all(&format!("input[name=\"{TYPE_RADIO_NAME}\"]"))
        .map_err(|err| DomError(describe_js(&err)))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect())
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError(format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| DomError(format!("element #{id} has an unexpected type")))
}

pub(super) fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
