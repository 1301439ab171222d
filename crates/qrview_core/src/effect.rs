use std::time::Duration;

use crate::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Discard the current symbol and its surface.
    ClearSymbol,
    /// Discard the current symbol, render a new one and play the entrance effect.
    RenderSymbol(SymbolRequest),
    PersistTheme(Theme),
    /// Export the current symbol as PNG and hand it to the file saver.
    DownloadPng,
    CopyText { text: String, method: CopyMethod },
    /// Serialize the current symbol to PNG and put it on the clipboard.
    CopyImage,
    /// Arm the single status timer; replaces any pending one.
    ScheduleStatusClear { generation: u64, after: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRequest {
    pub revision: u64,
    pub content: String,
    pub pixel_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// Async clipboard write.
    Native,
    /// Temporary selectable element plus the legacy copy command.
    Legacy,
}
