use std::rc::Rc;
use std::sync::mpsc;

use qrview_core::{ActionError, CopyMethod, Effect, Msg, SymbolRequest};
use qrview_engine::{download_filename, ClipboardError, RenderedSymbol, SaveError};
use qrview_logging::{qr_debug, qr_error, qr_info, qr_warn};

use super::persistence::save_theme;
use super::services::{Page, Services};

/// Executes effects against the platform and reports outcomes back as messages.
pub(crate) struct EffectRunner {
    services: Services,
    symbol: Option<RenderedSymbol>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub(crate) fn new(services: Services, msg_tx: mpsc::Sender<Msg>) -> Self {
        Self {
            services,
            symbol: None,
            msg_tx,
        }
    }

    pub(crate) fn page(&self) -> Rc<dyn Page> {
        Rc::clone(&self.services.page)
    }

    #[cfg(test)]
    pub(crate) fn symbol(&self) -> Option<&RenderedSymbol> {
        self.symbol.as_ref()
    }

    pub(crate) fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ClearSymbol => self.discard_symbol(),
                Effect::RenderSymbol(request) => self.render_symbol(request),
                Effect::PersistTheme(theme) => save_theme(self.services.store.as_ref(), theme),
                Effect::DownloadPng => {
                    let result = self.download();
                    self.send(Msg::DownloadFinished(result));
                }
                Effect::CopyText { text, method } => self.copy_text(text, method),
                Effect::CopyImage => self.copy_image(),
                Effect::ScheduleStatusClear { generation, after } => {
                    let msg_tx = self.msg_tx.clone();
                    self.services.timer.schedule(
                        after,
                        Box::new(move || {
                            let _ = msg_tx.send(Msg::StatusExpired { generation });
                        }),
                    );
                }
            }
        }
    }

    fn discard_symbol(&mut self) {
        self.symbol = None;
        self.services.page.clear_symbol();
    }

    fn render_symbol(&mut self, request: SymbolRequest) {
        self.discard_symbol();

        let rendered = self
            .services
            .renderer
            .render(&request.content, request.pixel_size)
            .map_err(|err| err.to_string())
            .and_then(|symbol| {
                self.services
                    .page
                    .mount_symbol(&symbol)
                    .map(|()| symbol)
                    .map_err(|err| err.to_string())
            });

        match rendered {
            Ok(symbol) => {
                self.services.page.play_entrance();
                self.symbol = Some(symbol);
            }
            Err(reason) => {
                qr_warn!(
                    "Symbol revision {} failed to render: {}",
                    request.revision,
                    reason
                );
                self.send(Msg::SymbolRenderFailed {
                    revision: request.revision,
                    reason,
                });
            }
        }
    }

    fn download(&self) -> Result<String, ActionError> {
        let symbol = self.symbol.as_ref().ok_or(ActionError::MissingArtifact)?;
        let png = symbol.to_png().map_err(|err| {
            qr_error!("PNG export failed: {}", err);
            ActionError::Failed(err.to_string())
        })?;
        let filename = download_filename((self.services.now_utc)());
        self.services
            .saver
            .save_png(&filename, &png)
            .map_err(|err| {
                qr_error!("Saving {} failed: {}", filename, err);
                match err {
                    SaveError::Unavailable(_) => ActionError::CapabilityAbsent,
                    SaveError::Failed(reason) => ActionError::Failed(reason),
                }
            })?;
        qr_info!("Downloaded {} ({} bytes)", filename, png.len());
        Ok(filename)
    }

    fn copy_text(&self, text: String, method: CopyMethod) {
        match method {
            CopyMethod::Legacy => {
                qr_debug!("Copying {} chars via legacy command", text.len());
                let result = self
                    .services
                    .clipboard
                    .write_text_legacy(&text)
                    .map_err(clipboard_failure);
                self.send(Msg::TextCopied(result));
            }
            CopyMethod::Native => {
                qr_debug!("Copying {} chars via clipboard API", text.len());
                let clipboard = Rc::clone(&self.services.clipboard);
                let msg_tx = self.msg_tx.clone();
                self.services.spawner.spawn(Box::pin(async move {
                    let result = clipboard.write_text(&text).await.map_err(clipboard_failure);
                    let _ = msg_tx.send(Msg::TextCopied(result));
                }));
            }
        }
    }

    fn copy_image(&self) {
        let Some(symbol) = self.symbol.as_ref() else {
            self.send(Msg::ImageCopied(Err(ActionError::MissingArtifact)));
            return;
        };
        let png = match symbol.to_png() {
            Ok(png) => png,
            Err(err) => {
                qr_error!("PNG export failed: {}", err);
                self.send(Msg::ImageCopied(Err(ActionError::Failed(err.to_string()))));
                return;
            }
        };

        let clipboard = Rc::clone(&self.services.clipboard);
        let msg_tx = self.msg_tx.clone();
        self.services.spawner.spawn(Box::pin(async move {
            let result = clipboard.write_png(&png).await.map_err(clipboard_failure);
            let _ = msg_tx.send(Msg::ImageCopied(result));
        }));
    }

    fn send(&self, msg: Msg) {
        if self.msg_tx.send(msg).is_err() {
            qr_warn!("Controller is gone, dropping completion");
        }
    }
}

fn clipboard_failure(err: ClipboardError) -> ActionError {
    qr_warn!("Clipboard write failed: {}", err);
    match err {
        ClipboardError::Unavailable => ActionError::CapabilityAbsent,
        other => ActionError::Failed(other.to_string()),
    }
}
