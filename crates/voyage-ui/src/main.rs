//! Voyage - travel expenses, packing list and country snapshots in the terminal.
//!
//! Tabs:
//! 1. Countries - weather and exchange rate for a selected destination
//! 2. Expenses - trip cost ledger with per-country stats
//! 3. Packing - categorized checklist

use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use voyage_core::Config;
use voyage_services::{ExpenseManager, PackingManager, TravelClient};
use voyage_ui::{input, ui, AppState};
use voyage_weather::CountryLookup;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let (config, validation) = Config::load_validated()?;
    voyage_core::init(&config)?;
    for warning in &validation.warnings {
        tracing::warn!("Config warning: {}", warning);
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let timeout = config.services.request_timeout_secs.map(Duration::from_secs);
    let client = TravelClient::new(&config.services.api_url, timeout)?;
    let lookup = Arc::new(CountryLookup::new(&config.lookup)?);

    let mut app = AppState::new(
        ExpenseManager::new(client.clone()),
        PackingManager::new(client.clone()),
        lookup,
        &config.ui,
    );

    match client.health_check().await {
        Ok(true) => tracing::info!("Travel API reachable at {}", client.base_url()),
        Ok(false) => {
            tracing::warn!("Travel API at {} is unhealthy", client.base_url());
            app.set_warning("Travel API reports unhealthy");
        }
        Err(e) => {
            tracing::warn!("Travel API health check failed: {}", e);
            app.set_warning(e.user_message());
        }
    }
    app.load_all().await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("Voyage exiting");
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Apply finished country lookups (non-blocking)
        app.drain_lookups();

        // 3. Drain pending input; backend actions are awaited in order
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if let Some(action) = input::handle_key(app, key) {
                if action.is_mutation() {
                    app.mark_saving();
                    terminal.draw(|f| ui::draw(f, app))?;
                }
                app.perform(action).await;
                terminal.draw(|f| ui::draw(f, app))?;
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }

        // Yield so spawned lookups can make progress
        tokio::time::sleep(app.tick_rate).await;
    }
    Ok(())
}
