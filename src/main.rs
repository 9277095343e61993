use anyhow::Result;
use crossterm::{
    event::{self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use gpt_writer::app::{
    capture::capture_selection,
    config::{self, Config},
    handoff::{PasteHandoff, HANDOFF_ENV},
    r#loop::run_loop,
    state::{AppState, MenuState},
};
use gpt_writer::domain::models::SessionOutcome;
use gpt_writer::domain::services::TextService;
use gpt_writer::infrastructure::{
    gemini::GeminiClient,
    system::{EnigoKeyInjector, SystemClipboard},
};
use gpt_writer::logging;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        );
        original_hook(panic_info);
    }));
}

/// Discards input that arrived before the menu, e.g. a copy chord that
/// landed in this terminal.
fn drain_pending_events() -> Result<()> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Paste helper spawned by a previous run after its terminal closed.
    if let Ok(settle_ms) = std::env::var(HANDOFF_ENV) {
        let handoff = PasteHandoff::read(&settle_ms, io::stdin())?;
        let clipboard = SystemClipboard::new()?;
        return handoff.apply(&clipboard, &EnigoKeyInjector).await;
    }

    // Everything that can fail on a bad environment happens BEFORE terminal
    // setup, so errors are printed to a normal terminal.
    let config = Config::load()?;
    if let Some(home) = home::home_dir() {
        let log_path = logging::init(&config::config_dir(&home), config.level_filter())?;
        log::info!("Logging to {}", log_path.display());
    }

    let clipboard = SystemClipboard::new()?;
    let keys = EnigoKeyInjector;
    let service: Arc<dyn TextService> = Arc::new(GeminiClient::new(
        config.api_key.clone(),
        config.model.clone(),
        config.base_url.clone(),
        config.request_timeout(),
    )?);

    setup_panic_hook();

    // Raw mode first: a copy chord that reaches this terminal is then plain
    // input instead of SIGINT.
    enable_raw_mode()?;
    let captured = capture_selection(&clipboard, &keys, config.capture_timeout()).await;
    let captured = match captured.and_then(|c| drain_pending_events().map(|()| c)) {
        Ok(captured) => captured,
        Err(err) => {
            let _ = disable_raw_mode();
            return Err(err);
        }
    };
    let app_state = AppState::new(captured, MenuState::default());

    // Setup terminal
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, service).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    let end = res?;
    if let SessionOutcome::Replace(text) = end.outcome {
        // Our terminal still has focus; paste from a helper once it closes.
        PasteHandoff {
            text,
            settle: config.paste_delay(),
        }
        .spawn()?;
    } else {
        log::info!("Session closed without a replacement");
    }

    if let Some(failure) = end.failure {
        log::error!("Session ended with an error: {failure}");
        anyhow::bail!(failure);
    }

    Ok(())
}
