//! Collaborators the controller is wired to. The browser shell provides the
//! real ones, tests provide fakes.

use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;
use qrview_engine::{Clipboard, FileSaver, KeyValueStore, RenderedSymbol, SymbolRenderer};
use thiserror::Error;

use super::ui::PageCommand;

#[derive(Debug, Error)]
#[error("page update failed: {0}")]
pub struct DomError(pub String);

/// The page the controller draws into.
pub trait Page {
    fn apply(&self, command: &PageCommand);
    /// Attaches the symbol surface to the symbol container.
    fn mount_symbol(&self, symbol: &RenderedSymbol) -> Result<(), DomError>;
    /// Empties the symbol container.
    fn clear_symbol(&self);
    /// Restarts the one-shot entrance animation on the symbol container.
    fn play_entrance(&self);
}

/// Single-slot timer for the status line.
pub trait StatusTimer {
    /// Arms the timer, cancelling whatever was pending.
    fn schedule(&mut self, after: Duration, on_elapsed: Box<dyn FnOnce()>);
}

/// Runs clipboard futures on the UI thread.
pub trait TaskSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

pub type Clock = Rc<dyn Fn() -> DateTime<Utc>>;

pub struct Services {
    pub page: Rc<dyn Page>,
    pub store: Rc<dyn KeyValueStore>,
    pub clipboard: Rc<dyn Clipboard>,
    pub saver: Rc<dyn FileSaver>,
    pub renderer: Box<dyn SymbolRenderer>,
    pub timer: Box<dyn StatusTimer>,
    pub spawner: Rc<dyn TaskSpawner>,
    pub now_utc: Clock,
}
