//! Adapters that reach the desktop: browser and clipboard.

use anyhow::{Context, Result};

use crate::infra::{
    contracts::{ClipboardWriter, ExternalOpener},
    stubs::MemoryClipboard,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, target: &str) -> Result<()> {
        open::that_detached(target).with_context(|| format!("failed to open {target}"))
    }
}

/// System clipboard, degrading to an in-process buffer on headless hosts.
pub enum SystemClipboard {
    Native(arboard::Clipboard),
    Fallback(MemoryClipboard),
}

impl SystemClipboard {
    pub fn connect() -> Self {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Self::Native(clipboard),
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "system clipboard unavailable, using in-memory buffer"
                );
                Self::Fallback(MemoryClipboard::default())
            }
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        match self {
            Self::Native(clipboard) => clipboard
                .set_text(text.to_owned())
                .context("failed to write system clipboard"),
            Self::Fallback(memory) => memory.write_text(text),
        }
    }
}
