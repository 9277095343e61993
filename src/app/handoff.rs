//! Pasting from a detached helper process.
//!
//! The terminal window hosting the menu keeps focus for as long as this
//! process lives, so the paste chord is sent by a child that outlives it.

use crate::app::apply::apply_outcome;
use crate::domain::models::SessionOutcome;
use crate::domain::services::{Clipboard, KeyInjector};
use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::time::Duration;

/// Set on the helper process; holds the settle delay in milliseconds.
pub const HANDOFF_ENV: &str = "GPT_WRITER_PASTE_HANDOFF";

#[derive(Debug, Clone, PartialEq)]
pub struct PasteHandoff {
    pub text: String,
    pub settle: Duration,
}

impl PasteHandoff {
    /// Rebuilds the request the parent wrote to the helper's stdin.
    pub fn read(settle_ms: &str, mut input: impl Read) -> Result<Self> {
        let settle = settle_ms
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .with_context(|| format!("Invalid {HANDOFF_ENV} value {settle_ms:?}"))?;

        let mut text = String::new();
        input
            .read_to_string(&mut text)
            .context("Failed to read replacement text")?;
        Ok(Self { text, settle })
    }

    pub async fn apply(self, clipboard: &dyn Clipboard, keys: &dyn KeyInjector) -> Result<()> {
        apply_outcome(
            &SessionOutcome::Replace(self.text),
            clipboard,
            keys,
            self.settle,
        )
        .await
    }

    /// Starts a detached copy of this executable that pastes once we exit.
    pub fn spawn(&self) -> Result<()> {
        let exe = std::env::current_exe().context("Failed to locate own executable")?;
        let mut command = Command::new(exe);
        command
            .env(HANDOFF_ENV, self.settle.as_millis().to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        detach(&mut command);

        let mut child = command.spawn().context("Failed to start paste helper")?;
        let mut stdin = child.stdin.take().context("Paste helper has no stdin")?;
        stdin
            .write_all(self.text.as_bytes())
            .context("Failed to hand the replacement to the paste helper")?;

        log::info!(
            "Handed {} bytes to paste helper (pid {})",
            self.text.len(),
            child.id()
        );
        Ok(())
    }
}

#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    // Outside the terminal's foreground group, so its hangup does not reach us.
    command.process_group(0);
}

#[cfg(windows)]
fn detach(command: &mut Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    command.creation_flags(DETACHED_PROCESS);
}

#[cfg(not(any(unix, windows)))]
fn detach(_command: &mut Command) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::{MockClipboard, MockKeyInjector};
    use mockall::Sequence;
    use std::io::Cursor;

    #[test]
    fn test_read_request() {
        let handoff = PasteHandoff::read("250", Cursor::new("Hello,\nWorld!")).unwrap();
        assert_eq!(
            handoff,
            PasteHandoff {
                text: "Hello,\nWorld!".to_string(),
                settle: Duration::from_millis(250),
            }
        );
    }

    #[test]
    fn test_read_rejects_bad_delay() {
        let err = PasteHandoff::read("soon", Cursor::new("x")).unwrap_err();
        assert!(err.to_string().contains(HANDOFF_ENV));
    }

    #[tokio::test(start_paused = true)]
    async fn test_helper_writes_then_pastes() {
        let mut seq = Sequence::new();
        let mut clipboard = MockClipboard::new();
        let mut keys = MockKeyInjector::new();
        clipboard
            .expect_write()
            .withf(|text| text == "Hello, World!")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        keys.expect_send_paste_chord()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        keys.expect_send_copy_chord().never();

        let handoff = PasteHandoff::read("200", Cursor::new("Hello, World!")).unwrap();
        handoff.apply(&clipboard, &keys).await.unwrap();
    }
}
