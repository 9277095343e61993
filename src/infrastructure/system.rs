use crate::domain::services::{Clipboard, KeyInjector};
use crate::error::PlatformError;
use enigo::{
    Direction::{Click, Press, Release},
    Enigo, Key, Keyboard, Settings,
};
use std::sync::Mutex;

/// The OS clipboard. One handle is kept for the whole run so that text we
/// write stays available until the target application has pasted it.
pub struct SystemClipboard {
    inner: Mutex<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, PlatformError> {
        Ok(Self {
            inner: Mutex::new(arboard::Clipboard::new()?),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, arboard::Clipboard>, PlatformError> {
        self.inner
            .lock()
            .map_err(|_| PlatformError::Clipboard("clipboard lock poisoned".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn read(&self) -> Result<Option<String>, PlatformError> {
        match self.lock()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, text: &str) -> Result<(), PlatformError> {
        self.lock()?.set_text(text)?;
        Ok(())
    }

    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    fn read_selection(&self) -> Result<Option<String>, PlatformError> {
        use arboard::{GetExtLinux, LinuxClipboardKind};

        match self
            .lock()?
            .get()
            .clipboard(LinuxClipboardKind::Primary)
            .text()
        {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(target_os = "macos")]
const CHORD_MODIFIER: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const CHORD_MODIFIER: Key = Key::Control;

/// Sends copy/paste chords through enigo.
#[derive(Debug, Default)]
pub struct EnigoKeyInjector;

impl EnigoKeyInjector {
    fn chord(&self, letter: char) -> Result<(), PlatformError> {
        let mut enigo = Enigo::new(&Settings::default())
            .map_err(|e| PlatformError::Keyboard(e.to_string()))?;

        enigo
            .key(CHORD_MODIFIER, Press)
            .map_err(|e| PlatformError::Keyboard(e.to_string()))?;
        let clicked = enigo.key(Key::Unicode(letter), Click);
        // Always release the modifier, even if the click failed
        let released = enigo.key(CHORD_MODIFIER, Release);

        clicked.map_err(|e| PlatformError::Keyboard(e.to_string()))?;
        released.map_err(|e| PlatformError::Keyboard(e.to_string()))?;
        Ok(())
    }
}

impl KeyInjector for EnigoKeyInjector {
    fn send_copy_chord(&self) -> Result<(), PlatformError> {
        self.chord('c')
    }

    fn send_paste_chord(&self) -> Result<(), PlatformError> {
        self.chord('v')
    }
}
