//! System clipboard access for copying image URLs.

use arboard::Clipboard;

pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Fails when no clipboard is reachable (e.g. headless session).
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_owned())
            .map_err(|e| format!("clipboard rejected {} bytes: {}", text.len(), e))
    }
}
