mod app;
mod command;
mod config;
mod context;
mod format;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use anyhow::{Context, Result};
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    {
        let mut stdout = io::stdout().lock();
        if cfg.ui.dark_background {
            write!(stdout, "{}", ui::dark_background())?;
        }
        if cfg.ui.clear_on_start {
            ui::clear_screen(&mut stdout)?;
        }
        if cfg.ui.show_header {
            writeln!(stdout, "{}", ui::header_banner())?;
        }
        stdout.flush()?;
    }

    let result = run_app(cfg).await;

    // Restore terminal colors
    print!("{}", Theme::reset());
    let _ = io::stdout().flush();

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(cfg: config::AppConfig) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg);
    info!(nickname = %state.nickname, "session started");

    // Spawn stdin reader task
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if event_tx.send(AppEvent::Input(line)).is_err() {
                        break;
                    }
                }
                Ok(None) | Err(_) => {
                    let _ = event_tx.send(AppEvent::InputClosed);
                    break;
                }
            }
        }
    });

    state.system_message(&format!(
        "Welcome, {}! Type /help for commands, or just start typing.",
        state.nickname
    ));
    let status = state.context.status_line();
    state.print(status);
    present(&mut state, Vec::new())?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);
        present(&mut state, actions)?;
        if state.should_quit {
            break;
        }
    }

    info!("session ended");
    Ok(())
}

/// Print pending output, carry out actions, then redraw the prompt.
fn present(state: &mut AppState, actions: Vec<Action>) -> Result<()> {
    let mut out = io::stdout().lock();

    for line in state.take_output() {
        writeln!(out, "{}", line).context("Failed to write to terminal")?;
    }

    for action in actions {
        match action {
            Action::ClearScreen => ui::clear_screen(&mut out)?,
            Action::PersistConfig => {
                if let Err(e) = config::save_config(&state.config) {
                    warn!(error = %e, "failed to save config");
                    let line = ui::error_line(&format!("Could not save config: {:#}", e));
                    writeln!(out, "{}", line)?;
                }
            }
            Action::Quit => {
                writeln!(out, "{}", ui::info_line("Goodbye!"))?;
                state.should_quit = true;
            }
            other => {
                // No transport is attached to this build
                debug!(action = ?other, "dropping network action");
            }
        }
    }

    if !state.should_quit {
        write!(out, "{}", state.prompt())?;
    }
    out.flush()?;
    Ok(())
}
