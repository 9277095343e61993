use crate::domain::models::CapturedText;
use crate::domain::services::{Clipboard, KeyInjector};
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::time::{sleep, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Grabs the text the user has highlighted in the foreground application.
///
/// The PRIMARY selection is used when the platform has one, so no key chord
/// reaches whichever window currently has focus. Otherwise the copy chord is
/// sent and the clipboard polled until it changes or `timeout` elapses; the
/// user's clipboard is put back afterwards. When nothing was selected the
/// stale clipboard text is returned as-is.
pub async fn capture_selection(
    clipboard: &dyn Clipboard,
    keys: &dyn KeyInjector,
    timeout: Duration,
) -> Result<CapturedText> {
    if let Some(text) = read_primary_selection(clipboard) {
        log::info!("Captured {} bytes from the primary selection", text.len());
        return Ok(CapturedText(text));
    }

    let original = clipboard.read().context("Failed to read clipboard")?;

    keys.send_copy_chord()
        .context("Failed to send copy chord")?;

    let polled = poll_for_change(clipboard, &original, timeout).await;

    // Restore before looking at the poll result, so a failed read still restores.
    // Non-text contents cannot be put back; leave whatever the copy produced.
    if let Some(original) = &original {
        clipboard
            .write(original)
            .context("Failed to restore clipboard")?;
    }

    let text = polled?.unwrap_or_default();
    log::info!("Captured {} bytes of selected text", text.len());
    Ok(CapturedText(text))
}

fn read_primary_selection(clipboard: &dyn Clipboard) -> Option<String> {
    match clipboard.read_selection() {
        Ok(text) => text.filter(|t| !t.trim().is_empty()),
        Err(e) => {
            log::warn!("Primary selection unavailable, falling back to copy: {e}");
            None
        }
    }
}

async fn poll_for_change(
    clipboard: &dyn Clipboard,
    original: &Option<String>,
    timeout: Duration,
) -> Result<Option<String>> {
    let deadline = Instant::now() + timeout;
    loop {
        let current = clipboard.read().context("Failed to read clipboard")?;
        if current != *original || Instant::now() >= deadline {
            return Ok(current);
        }
        sleep(POLL_INTERVAL).await;
    }
}
