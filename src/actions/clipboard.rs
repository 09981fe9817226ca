//! Clipboard access for copying row identifiers

use crate::actions::ActionError;

pub trait Clipboard: Send {
    fn set(&mut self, contents: &str) -> Result<(), ActionError>;
}

/// System clipboard backed by arboard, opened on first use
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure(&mut self) -> Result<&mut arboard::Clipboard, ActionError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| ActionError::Clipboard(e.to_string()))?,
        };
        Ok(self.inner.insert(clipboard))
    }
}

impl Clipboard for SystemClipboard {
    fn set(&mut self, contents: &str) -> Result<(), ActionError> {
        self.ensure()?
            .set_text(contents.to_string())
            .map_err(|e| ActionError::Clipboard(e.to_string()))
    }
}

/// Keeps the last copied value in memory, for headless use and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: std::sync::Arc<std::sync::Mutex<Option<String>>>,
}

impl Clipboard for MemoryClipboard {
    fn set(&mut self, contents: &str) -> Result<(), ActionError> {
        let mut slot = self
            .contents
            .lock()
            .map_err(|e| ActionError::Clipboard(e.to_string()))?;
        *slot = Some(contents.to_string());
        Ok(())
    }
}
