//! omdbtui - search the Open Movie Database from your terminal
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! omdbtui
//!
//! # CLI mode (for automation)
//! omdbtui search "blade runner"
//! omdbtui info tt1856101 --plot full --json
//! ```

use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

use omdbtui::api::OmdbClient;
use omdbtui::app::App;
use omdbtui::cli::{self, Cli, Command, ExitCode, Output};
use omdbtui::commands;
use omdbtui::config::Config;
use omdbtui::logging::{self, LogTarget};
use omdbtui::tui::{self, Completion, Dispatcher};
use omdbtui::ui::{self, Alerts};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) if cli.is_cli_mode() => {
            let code = Output::new(&cli).error(format!("{:#}", e), ExitCode::InvalidArgs);
            std::process::exit(code.into());
        }
        Err(e) => return Err(e),
    };

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        logging::init_tracing(&config, LogTarget::Stderr);
        let exit_code = run_cli(cli, &config).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        logging::init_tracing(&config, LogTarget::File);
        run_tui(&config).await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, config: &Config) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, config, &output).await,

        Some(Command::Info(cmd)) => {
            if let Err(e) = cli::validate_imdb_id(&cmd.imdb_id) {
                return output.error(e, ExitCode::InvalidArgs);
            }
            commands::info_cmd(cmd, config, &output).await
        }

        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(config: &Config) -> Result<()> {
    let client = OmdbClient::new(&config.omdb());
    let (dispatcher, completions) = Dispatcher::new(Arc::new(client), config.plot());

    let mut terminal = init_terminal()?;
    let mut app = App::new();
    let mut alerts = Alerts::new();

    tracing::info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app, &mut alerts, &dispatcher, completions).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - applies finished requests, renders, handles input
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    alerts: &mut Alerts,
    dispatcher: &Dispatcher,
    mut completions: UnboundedReceiver<Completion>,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    while app.running {
        while let Ok(completion) = completions.try_recv() {
            tui::apply(completion, app, alerts);
        }

        terminal.draw(|frame| ui::render(frame, app, alerts))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // An open alert swallows the key that dismisses it
                if alerts.dismiss() {
                    continue;
                }
                let action = app.handle_key(key);
                dispatcher.dispatch(action, app);
            }
        }

        // Let spawned requests make progress between ticks
        tokio::task::yield_now().await;
    }

    Ok(())
}
