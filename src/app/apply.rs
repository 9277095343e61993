use crate::domain::models::SessionOutcome;
use crate::domain::services::{Clipboard, KeyInjector};
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::time::sleep;

/// Puts a replacement into the foreground application.
///
/// The clipboard is written before the paste chord is sent. `settle` is
/// waited once before pasting, so focus can return to the target window, and
/// once after, so the target can fetch the clipboard before we exit.
pub async fn apply_outcome(
    outcome: &SessionOutcome,
    clipboard: &dyn Clipboard,
    keys: &dyn KeyInjector,
    settle: Duration,
) -> Result<()> {
    let SessionOutcome::Replace(text) = outcome else {
        log::info!("Session closed without a replacement");
        return Ok(());
    };

    clipboard
        .write(text)
        .context("Failed to write replacement to clipboard")?;

    sleep(settle).await;
    keys.send_paste_chord()
        .context("Failed to send paste chord")?;
    sleep(settle).await;

    log::info!("Pasted {} bytes", text.len());
    Ok(())
}
