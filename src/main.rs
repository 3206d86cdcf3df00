mod controller;
mod logging;
mod messages;
mod model;
mod store;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use controller::ChannelListController;
use messages::Messages;
use model::{AppModel, Channel, NameFilter};
use store::{StoreCommand, StoreHandle};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== iptv-rs starting ===");

    let lineup_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "channels.json".to_owned());
    let channels = load_lineup(&lineup_path)?;
    tracing::info!(path = %lineup_path, count = channels.len(), "channel lineup loaded");

    let store = store::spawn_store();
    let model = Arc::new(Mutex::new(AppModel::new()));
    let controller = ChannelListController::new(
        model.clone(),
        store.clone(),
        Arc::new(NameFilter),
        Messages::from_env(),
    );

    // The hosting side owns playlist identity and the shared channel set;
    // the controller only reads them back through its subscriptions.
    store.dispatch(StoreCommand::SetActivePlaylist(lineup_path.clone()));
    store.dispatch(StoreCommand::SetChannels(channels.clone()));
    controller.set_channel_list(channels).await;
    controller.start_store_listeners().await;

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model.clone(), controller.clone(), &store).await;

    // Teardown runs on every exit path, success or error.
    controller.close().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("iptv-rs shutting down");
    Ok(())
}

fn load_lineup(path: &str) -> Result<Vec<Channel>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("could not read channel lineup {}", path))?;
    let channels: Vec<Channel> = serde_json::from_str(&content)
        .with_context(|| format!("could not parse channel lineup {}", path))?;
    Ok(channels)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: ChannelListController,
    store: &StoreHandle,
) -> io::Result<()> {
    // The active channel is canonical in the store, not in the local model;
    // the status bar reads it back from there.
    let active_channel_rx = store.subscribe_active_channel();

    loop {
        let (ui_state, favorites, selected, should_quit) = {
            let model_guard = model.lock().await;

            // Drop the favorites notice once its 2 seconds are up
            model_guard.auto_clear_expired_notice().await;

            (
                model_guard.get_ui_state().await,
                model_guard.favorites_view().await,
                model_guard.selected().await,
                model_guard.should_quit().await,
            )
        };
        let grouped = controller.filtered_grouped().await;
        let selected_id = ChannelListController::identity(0, selected.as_ref());
        let now_playing = active_channel_rx.borrow().clone();

        terminal.draw(|f| {
            AppView::render(
                f,
                &ui_state,
                &grouped,
                &favorites,
                selected_id,
                now_playing.as_ref(),
            );
        })?;

        // Handle input with shorter poll time for smoother UI updates
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
