// ABOUTME: Main entry point for the avatar selection wizard with TUI and CLI support
//
// Binary: avatar-wizard
// Usage: avatar-wizard [COMMAND]
// - No command: launches the wizard TUI
// - status: show selections and wizard progress
// - select: pick a church avatar, community avatar or companion
// - clear: remove selections
// - reset: remove selections and the completion record

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

mod cli;

use avatar_wizard::app::{App, EventHandler};
use avatar_wizard::components::LayoutComponent;
use avatar_wizard::config::AppConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn load_config(args: &cli::Cli) -> Result<AppConfig> {
    match &args.config {
        Some(path) => {
            let mut config = AppConfig::default();
            config.merge(AppConfig::load_from(path)?);
            Ok(config)
        }
        None => AppConfig::load(),
    }
}

fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();
    let config = load_config(&args)?;

    let result = match args.command {
        Some(cli::Commands::Status) => cli::status::execute(&config, args.format),
        Some(cli::Commands::Select(select_args)) => cli::select::execute_select(&config, select_args),
        Some(cli::Commands::Clear(clear_args)) => cli::select::execute_clear(&config, clear_args),
        Some(cli::Commands::Reset) => cli::select::execute_reset(&config),

        // TUI mode (explicit or default)
        Some(cli::Commands::Tui) | None => {
            let mut app = App::new(&config)?;
            let layout = LayoutComponent::new();
            tracing::info!(
                step = %app.state.wizard.current_step(),
                "Starting avatar selection wizard"
            );

            // Drop keypresses typed before the wizard appeared
            while event::poll(Duration::from_millis(10)).unwrap_or(false) {
                let _ = event::read();
            }

            run_tui(&mut app, &layout)
        }
    };

    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn run_tui(app: &mut App, layout: &LayoutComponent) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Use `avatar-wizard status` or `avatar-wizard select` when output is redirected."
        ));
    }

    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        eprintln!("Cannot check terminal raw mode: {}", e);
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(app, layout, &mut terminal);

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    if let Some(destination) = app.state.wizard.navigator().destination() {
        println!("✅ Avatar selection complete. Next: {}", destination);
    }

    result
}

fn run_tui_loop(
    app: &mut App,
    layout: &LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Windows reports releases too
                if key_event.kind == KeyEventKind::Press {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            // Another process (or the CLI) may have changed the selections
            if app.state.picker.is_none() {
                app.state.refresh_selections();
            }
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let log_dir = std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".avatar-wizard").join("logs"))
        .unwrap_or_else(|_| PathBuf::from(".avatar-wizard/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    // One JSONL file per run
    let log_file = log_dir.join(format!(
        "avatar-wizard-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .expect("Failed to create log file");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "avatar_wizard=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
