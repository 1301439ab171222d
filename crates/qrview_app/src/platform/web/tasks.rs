use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;

use crate::platform::app::PreviewController;
use crate::platform::services::{StatusTimer, TaskSpawner};

/// Lets timers and finished tasks drain the controller's queue.
#[derive(Clone, Default)]
pub(super) struct PumpHook(Rc<RefCell<Weak<RefCell<PreviewController>>>>);

impl PumpHook {
    pub(super) fn bind(&self, controller: &Rc<RefCell<PreviewController>>) {
        *self.0.borrow_mut() = Rc::downgrade(controller);
    }

    fn pump(&self) {
        let Some(controller) = self.0.borrow().upgrade() else {
            return;
        };
        // Busy means a dispatch is running; it drains the queue on its own.
        if let Ok(mut controller) = controller.try_borrow_mut() {
            controller.pump();
        }
    }
}

pub(super) struct BrowserSpawner {
    hook: PumpHook,
}

impl BrowserSpawner {
    pub(super) fn new(hook: PumpHook) -> Self {
        Self { hook }
    }
}

impl TaskSpawner for BrowserSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        let hook = self.hook.clone();
        wasm_bindgen_futures::spawn_local(async move {
            task.await;
            hook.pump();
        });
    }
}

pub(super) struct GlooStatusTimer {
    pending: Option<Timeout>,
    hook: PumpHook,
}

impl GlooStatusTimer {
    pub(super) fn new(hook: PumpHook) -> Self {
        Self {
            pending: None,
            hook,
        }
    }
}

impl StatusTimer for GlooStatusTimer {
    fn schedule(&mut self, after: Duration, on_elapsed: Box<dyn FnOnce()>) {
        // Dropping a pending timeout clears it.
        self.pending = None;
        let hook = self.hook.clone();
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        self.pending = Some(Timeout::new(millis, move || {
            on_elapsed();
            hook.pump();
        }));
    }
}
