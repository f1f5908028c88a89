use {
    crate::market::rng::ThreadRngSource,
    crate::state::DashboardState,
    crate::ui::layout::{self, LiveMetric},
    ratatui::{backend::CrosstermBackend, Terminal},
    std::{sync::Arc, time::Duration},
    tokio::sync::RwLock,
};

/// Run the TUI event loop
///
/// Handles keyboard input (asset selection, metric toggle, catalog
/// regeneration) and refreshes the dashboard on a fixed cadence.
/// Returns when the user quits; the caller tears down the background
/// timers afterwards.
pub async fn run_ui(
    state: Arc<RwLock<DashboardState>>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    let stdout = std::io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Enable raw mode for keyboard input
    crossterm::terminal::enable_raw_mode()?;

    // Alternate screen isolates the dashboard from stderr logs
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::cursor::Hide
    )?;

    terminal.clear()?;

    let mut active_metric = LiveMetric::Volatility;

    loop {
        // Check for keyboard input (non-blocking)
        if crossterm::event::poll(Duration::from_millis(250))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                match key.code {
                    crossterm::event::KeyCode::Char('q') | crossterm::event::KeyCode::Esc => {
                        break;
                    }
                    crossterm::event::KeyCode::Left => {
                        state.write().await.select_prev();
                    }
                    crossterm::event::KeyCode::Right => {
                        state.write().await.select_next();
                    }
                    crossterm::event::KeyCode::Tab => {
                        active_metric = active_metric.toggle();
                    }
                    crossterm::event::KeyCode::Char('r') => {
                        let mut guard = state.write().await;
                        let mut rng = ThreadRngSource::new();
                        guard.regenerate_catalog(&mut rng);
                        log::info!("🔄 Catalog regenerated");
                    }
                    _ => {}
                }
            }
        }

        // Render UI
        {
            let guard = state.read().await;
            let area = terminal.size()?;
            terminal.draw(|f| {
                layout::render_layout(f, area, &guard, active_metric);
            })?;
        }
    }

    // Cleanup - restore terminal state
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}
