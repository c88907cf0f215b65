// src/utils/mod.rs
pub mod clipboard;
mod io;

pub use clipboard::{ClipboardError, ClipboardSink, MemoryClipboard, SystemClipboard};
pub use io::*;
