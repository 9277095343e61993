use crate::error::{PlatformError, ServiceError};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextService: Send + Sync {
    // Submit a prompt, get the generated text back
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    /// `None` when the clipboard holds nothing textual.
    fn read(&self) -> Result<Option<String>, PlatformError>;
    fn write(&self, text: &str) -> Result<(), PlatformError>;

    /// The highlighted text, read without a copy chord. Only X11/Wayland
    /// have one (the PRIMARY selection).
    fn read_selection(&self) -> Result<Option<String>, PlatformError> {
        Ok(None)
    }
}

/// Synthetic key chords delivered to the foreground application.
#[cfg_attr(test, mockall::automock)]
pub trait KeyInjector: Send + Sync {
    fn send_copy_chord(&self) -> Result<(), PlatformError>;
    fn send_paste_chord(&self) -> Result<(), PlatformError>;
}
