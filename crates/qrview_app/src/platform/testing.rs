//! In-memory stand-ins for the browser, driven synchronously by tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use qrview_engine::{
    Clipboard, ClipboardCapabilities, ClipboardError, FileSaver, MemoryStore, QrSymbolRenderer,
    RenderError, RenderedSymbol, SaveError, SymbolRenderer,
};

use super::app::PreviewController;
use super::services::{DomError, Page, Services, StatusTimer, TaskSpawner};
use super::ui::{PageCommand, Target};

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(qrview_logging::initialize_for_tests);
}

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 7, 5, 9)
        .single()
        .unwrap()
        + chrono::Duration::milliseconds(42)
}

#[derive(Default)]
pub(crate) struct FakePage {
    commands: RefCell<Vec<PageCommand>>,
    mounted: Cell<Option<u32>>,
    mounted_sizes: RefCell<Vec<u32>>,
    entrances: Cell<usize>,
}

impl FakePage {
    pub(crate) fn commands(&self) -> Vec<PageCommand> {
        self.commands.borrow().clone()
    }

    pub(crate) fn text(&self, element: &str) -> Option<String> {
        self.commands.borrow().iter().rev().find_map(|cmd| match cmd {
            PageCommand::SetText { element: id, text } if *id == element => Some(text.clone()),
            _ => None,
        })
    }

    pub(crate) fn attribute(&self, target: Target, name: &str) -> Option<String> {
        self.commands.borrow().iter().rev().find_map(|cmd| match cmd {
            PageCommand::SetAttribute {
                target: t,
                name: n,
                value,
            } if *t == target && *n == name => Some(value.clone()),
            _ => None,
        })
    }

    pub(crate) fn class_enabled(&self, element: &str, class: &str) -> bool {
        self.commands
            .borrow()
            .iter()
            .rev()
            .find_map(|cmd| match cmd {
                PageCommand::SetClass {
                    element: id,
                    class: c,
                    enabled,
                } if *id == element && *c == class => Some(*enabled),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub(crate) fn has_symbol(&self) -> bool {
        self.mounted.get().is_some()
    }

    pub(crate) fn mounted_sizes(&self) -> Vec<u32> {
        self.mounted_sizes.borrow().clone()
    }

    pub(crate) fn entrances(&self) -> usize {
        self.entrances.get()
    }
}

impl Page for FakePage {
    fn apply(&self, command: &PageCommand) {
        self.commands.borrow_mut().push(command.clone());
    }

    fn mount_symbol(&self, symbol: &RenderedSymbol) -> Result<(), DomError> {
        self.mounted.set(Some(symbol.width()));
        self.mounted_sizes.borrow_mut().push(symbol.width());
        Ok(())
    }

    fn clear_symbol(&self) {
        self.mounted.set(None);
    }

    fn play_entrance(&self) {
        self.entrances.set(self.entrances.get() + 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClipboardCall {
    Text(String),
    Legacy(String),
    Png(Vec<u8>),
}

pub(crate) struct FakeClipboard {
    capabilities: ClipboardCapabilities,
    calls: RefCell<Vec<ClipboardCall>>,
    failure: RefCell<Option<ClipboardError>>,
}

impl FakeClipboard {
    fn new(capabilities: ClipboardCapabilities) -> Self {
        Self {
            capabilities,
            calls: RefCell::new(Vec::new()),
            failure: RefCell::new(None),
        }
    }

    pub(crate) fn calls(&self) -> Vec<ClipboardCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn fail_with(&self, err: ClipboardError) {
        *self.failure.borrow_mut() = Some(err);
    }

    fn record(&self, call: ClipboardCall) -> Result<(), ClipboardError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl Clipboard for FakeClipboard {
    fn capabilities(&self) -> ClipboardCapabilities {
        self.capabilities
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.record(ClipboardCall::Text(text.to_string()))
    }

    fn write_text_legacy(&self, text: &str) -> Result<(), ClipboardError> {
        self.record(ClipboardCall::Legacy(text.to_string()))
    }

    async fn write_png(&self, png: &[u8]) -> Result<(), ClipboardError> {
        self.record(ClipboardCall::Png(png.to_vec()))
    }
}

#[derive(Default)]
pub(crate) struct FakeSaver {
    saved: RefCell<Vec<(String, Vec<u8>)>>,
    failure: RefCell<Option<SaveError>>,
}

impl FakeSaver {
    pub(crate) fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.borrow().clone()
    }

    pub(crate) fn fail_with(&self, err: SaveError) {
        *self.failure.borrow_mut() = Some(err);
    }
}

impl FileSaver for FakeSaver {
    fn save_png(&self, filename: &str, png: &[u8]) -> Result<(), SaveError> {
        if let Some(err) = self.failure.borrow().clone() {
            return Err(err);
        }
        self.saved
            .borrow_mut()
            .push((filename.to_string(), png.to_vec()));
        Ok(())
    }
}

/// Calls made to the renderer, shared between the harness and the controller.
#[derive(Clone, Default)]
pub(crate) struct RenderLog(Rc<RefCell<Vec<(String, u32)>>>);

impl RenderLog {
    pub(crate) fn calls(&self) -> Vec<(String, u32)> {
        self.0.borrow().clone()
    }
}

struct RecordingRenderer {
    inner: QrSymbolRenderer,
    log: RenderLog,
}

impl SymbolRenderer for RecordingRenderer {
    fn render(&self, content: &str, pixel_size: u32) -> Result<RenderedSymbol, RenderError> {
        self.log
            .0
            .borrow_mut()
            .push((content.to_string(), pixel_size));
        self.inner.render(content, pixel_size)
    }
}

#[derive(Default)]
struct Slot {
    pending: Option<Box<dyn FnOnce()>>,
    schedules: usize,
}

/// Single-slot timer that only fires when the test says so.
#[derive(Clone, Default)]
pub(crate) struct ManualTimer(Rc<RefCell<Slot>>);

impl ManualTimer {
    pub(crate) fn is_armed(&self) -> bool {
        self.0.borrow().pending.is_some()
    }

    pub(crate) fn schedules(&self) -> usize {
        self.0.borrow().schedules
    }

    fn take(&self) -> Option<Box<dyn FnOnce()>> {
        self.0.borrow_mut().pending.take()
    }
}

impl StatusTimer for ManualTimer {
    fn schedule(&mut self, _after: Duration, on_elapsed: Box<dyn FnOnce()>) {
        let mut slot = self.0.borrow_mut();
        slot.pending = Some(on_elapsed);
        slot.schedules += 1;
    }
}

struct PoolSpawner(LocalSpawner);

impl TaskSpawner for PoolSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        if let Err(err) = self.0.spawn_local(task) {
            panic!("test pool rejected task: {err}");
        }
    }
}

pub(crate) struct Harness {
    pub(crate) page: Rc<FakePage>,
    pub(crate) store: Rc<MemoryStore>,
    pub(crate) clipboard: Rc<FakeClipboard>,
    pub(crate) saver: Rc<FakeSaver>,
    pub(crate) renderer: RenderLog,
    pub(crate) timer: ManualTimer,
    pool: RefCell<LocalPool>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self::with_capabilities(ClipboardCapabilities {
            async_text: true,
            image: true,
        })
    }

    pub(crate) fn with_capabilities(capabilities: ClipboardCapabilities) -> Self {
        init_logging();
        Self {
            page: Rc::new(FakePage::default()),
            store: Rc::new(MemoryStore::new()),
            clipboard: Rc::new(FakeClipboard::new(capabilities)),
            saver: Rc::new(FakeSaver::default()),
            renderer: RenderLog::default(),
            timer: ManualTimer::default(),
            pool: RefCell::new(LocalPool::new()),
        }
    }

    pub(crate) fn start(&self) -> PreviewController {
        let services = Services {
            page: self.page.clone(),
            store: self.store.clone(),
            clipboard: self.clipboard.clone(),
            saver: self.saver.clone(),
            renderer: Box::new(RecordingRenderer {
                inner: QrSymbolRenderer::default(),
                log: self.renderer.clone(),
            }),
            timer: Box::new(self.timer.clone()),
            spawner: Rc::new(PoolSpawner(self.pool.borrow().spawner())),
            now_utc: Rc::new(fixed_now),
        };
        PreviewController::start(services)
    }

    /// Runs spawned clipboard tasks to completion and applies their results.
    pub(crate) fn settle(&self, controller: &mut PreviewController) {
        self.pool.borrow_mut().run_until_stalled();
        controller.pump();
    }

    /// Fires the pending status timer, if any.
    pub(crate) fn fire_status_timer(&self, controller: &mut PreviewController) -> bool {
        match self.timer.take() {
            Some(on_elapsed) => {
                on_elapsed();
                controller.pump();
                true
            }
            None => false,
        }
    }
}
