//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal for the lifetime of the app:
//! - `run`: sets up services, state and the terminal, then runs the loop
//! - `run_loop`: drains task results, draws, polls keys, ticks on a schedule

use std::sync::Arc;
use std::time::Instant;

use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use specview_app::config::Settings;
use specview_app::message::Message;
use specview_app::process::process_message;
use specview_app::signals;
use specview_app::{
    AppState, ClipboardPort, FallbackClipboard, Page, Services, SourceClient, SourceFetcher,
    SourceSet,
};
use specview_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits
pub async fn run(settings: Settings, sources: SourceSet, initial_page: Page) -> Result<()> {
    let fetcher =
        SourceClient::new(settings.source.timeout()).context("Failed to build source client")?;
    let clipboard: Arc<dyn ClipboardPort> = Arc::new(FallbackClipboard::system());
    info!("Clipboard: {}", clipboard.name());
    let services = Services::new(fetcher, clipboard);

    info!("Document source: {}", sources.document);
    let mut state = AppState::new(settings, sources, initial_page);

    // Unified message channel for task results and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    let mut term = ratatui::init();
    // Wraps ratatui's restoring hook so caught render panics keep the terminal
    terminal::install_panic_hook();

    process_message(
        &mut state,
        Message::SwitchPage(initial_page),
        &msg_tx,
        &services,
    );
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &services);

    signal_task.abort();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<F>(
    term: &mut DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<F>,
) -> Result<()>
where
    F: SourceFetcher + Send + Sync + 'static,
{
    let mut ticks = event::TickSchedule::new(Instant::now());

    while !state.should_quit() {
        // Results from background tasks and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, services);
        }

        draw(term, state, &msg_tx, services)?;

        if let Some(message) = event::poll(ticks.remaining(Instant::now()))? {
            process_message(state, message, &msg_tx, services);
        }
        if ticks.due(Instant::now()) {
            process_message(state, Message::Tick, &msg_tx, services);
        }
    }

    info!("Quitting");
    Ok(())
}

/// Draw one frame inside the render error boundary
///
/// A panic while drawing becomes `Message::RenderPanicked`; the next frame
/// shows the crash panel instead of the pages.
fn draw<F>(
    term: &mut DefaultTerminal,
    state: &mut AppState,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<F>,
) -> Result<()>
where
    F: SourceFetcher + Send + Sync + 'static,
{
    let drawn = terminal::catch_render_panic(|| {
        term.draw(|frame| render::view(frame, state)).map(|_| ())
    });

    match drawn {
        Ok(result) => Ok(result?),
        Err(message) => {
            error!("Frame draw panicked: {}", message);
            // Drop whatever the aborted frame left in the buffers
            term.clear().context("Failed to clear terminal")?;
            process_message(state, Message::RenderPanicked { message }, msg_tx, services);
            Ok(())
        }
    }
}
