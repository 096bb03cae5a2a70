mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::Mutex;

use controller::AppController;
use model::{AppModel, Catalog};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Encore starting ===");

    // The catalog is built here and injected; the rest of the app never
    // constructs songs or albums itself.
    let catalog = Catalog::sample();
    let app_model = AppModel::new(catalog);

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let model = Arc::new(Mutex::new(app_model));
    let controller = AppController::new(model.clone());

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Encore shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> Result<()> {
    // Revision of the model state painted last; None forces a redraw
    let mut last_drawn: Option<u64> = None;

    loop {
        // Advance the simulated playback clock
        controller.tick().await;

        let (revision, player, ui_state, catalog, should_quit) = {
            let model_guard = model.lock().await;
            (
                model_guard.revision().await,
                model_guard.get_player().await,
                model_guard.get_ui_state().await,
                model_guard.catalog(),
                model_guard.should_quit().await,
            )
        };

        if should_quit {
            break;
        }

        if last_drawn != Some(revision) {
            terminal.draw(|f| {
                AppView::render(f, &player, &ui_state, &catalog);
            })?;
            last_drawn = Some(revision);
        }

        // Short poll time keeps the progress bar smooth while playing
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    controller.handle_key_event(key).await?;
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    controller.handle_mouse_event(mouse, screen).await?;
                }
                Event::Resize(..) => {
                    last_drawn = None;
                }
                _ => {}
            }
        }
    }

    Ok(())
}
