//! Main TUI runner - entry point and event loop

use std::path::Path;
use std::time::Instant;

use tokio::sync::mpsc;

use shellkit_app::message::Message;
use shellkit_app::process::process_message;
use shellkit_app::signals;
use shellkit_app::{ShellConfig, ShellState, SharedStore};
use shellkit_core::prelude::*;

use super::{event, render, terminal};

/// Run the shell until the user quits or a signal arrives.
///
/// `storage` is `None` when persistence is disabled.
pub async fn run(config: ShellConfig, config_dir: &Path, storage: Option<SharedStore>) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = ShellState::new(config, config_dir, storage);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    state.unmount();
    ratatui::restore();

    result?;
    match state.take_fatal_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut ShellState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let mut mount_sent = false;
    let mut clock = event::TickClock::new(Instant::now());

    while !state.should_quit() {
        // External messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        let frame = terminal.draw(|frame| render::view(frame, state))?;

        // The shell mounts after its first completed render
        if !mount_sent {
            mount_sent = true;
            let columns = frame.area.width;
            process_message(state, Message::Mounted { columns });
            continue;
        }

        match event::poll()? {
            Some(Message::Tick) => {
                clock.ticked(Instant::now());
                process_message(state, Message::Tick);
            }
            Some(message) => process_message(state, message),
            None => {}
        }
        if clock.due(Instant::now()) {
            process_message(state, Message::Tick);
        }
    }

    info!("Shell loop finished");
    Ok(())
}
