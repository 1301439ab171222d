use std::rc::Rc;
use std::sync::mpsc;

use qrview_core::{update, AppState, AppViewModel, ClipboardSupport, Msg};
use qrview_logging::{qr_debug, qr_info};

use super::effects::EffectRunner;
use super::persistence::load_theme;
use super::services::{Page, Services};
use super::ui;

/// Owns the page state and drives the update/render/effect cycle.
pub(crate) struct PreviewController {
    state: AppState,
    page: Rc<dyn Page>,
    runner: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
}

impl PreviewController {
    /// Restores the stored theme, probes the clipboard and runs the first
    /// regeneration.
    pub(crate) fn start(services: Services) -> Self {
        let stored_theme = load_theme(services.store.as_ref());
        let capabilities = services.clipboard.capabilities();
        qr_info!(
            "Starting preview: async_text={} image_clipboard={}",
            capabilities.async_text,
            capabilities.image
        );

        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let page = Rc::clone(&services.page);
        let runner = EffectRunner::new(services, msg_tx.clone());
        let mut controller = Self {
            state: AppState::new(),
            page,
            runner,
            msg_tx,
            msg_rx,
        };

        // Paint everything once, dirty or not.
        controller.render(&controller.state.view());
        controller.dispatch(Msg::Started {
            stored_theme,
            clipboard: ClipboardSupport {
                native_text: capabilities.async_text,
                image: capabilities.image,
            },
        });
        controller
    }

    /// Channel for completions arriving from outside a dispatch.
    pub(crate) fn sender(&self) -> mpsc::Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Processes `msg` and every completion it produced synchronously.
    pub(crate) fn dispatch(&mut self, msg: Msg) {
        self.process(msg);
        self.pump();
    }

    /// Drains completions queued by timers and spawned tasks.
    pub(crate) fn pump(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process(msg);
        }
    }

    #[cfg(test)]
    pub(crate) fn view(&self) -> AppViewModel {
        self.state.view()
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &EffectRunner {
        &self.runner
    }

    fn process(&mut self, msg: Msg) {
        qr_debug!("Dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        if was_dirty {
            self.render(&view);
        }
        self.runner.run(effects);
    }

    fn render(&self, view: &AppViewModel) {
        for command in ui::render::render(view) {
            self.page.apply(&command);
        }
    }
}
