// src/utils/clipboard.rs
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard support is not available in this build")]
    Unsupported,

    #[error("Clipboard error: {0}")]
    Backend(String),
}

/// Destination for copied passwords.
pub trait ClipboardSink {
    fn set_contents(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    ctx: clipboard::ClipboardContext,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        use clipboard::ClipboardProvider;

        let ctx = clipboard::ClipboardContext::new()
            .map_err(|e| ClipboardError::Backend(e.to_string()))?;
        Ok(Self { ctx })
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardSink for SystemClipboard {
    fn set_contents(&mut self, text: &str) -> Result<(), ClipboardError> {
        use clipboard::ClipboardProvider;

        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Backend(e.to_string()))
    }
}

#[cfg(not(feature = "clipboard"))]
pub struct SystemClipboard;

#[cfg(not(feature = "clipboard"))]
impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

#[cfg(not(feature = "clipboard"))]
impl ClipboardSink for SystemClipboard {
    fn set_contents(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

/// In-memory clipboard, used by tests and headless callers.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_contents(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}
