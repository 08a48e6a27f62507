mod app;
mod config;
mod gradebook;
mod keymap;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::App;
use config::Config;

/// Redraw interval while the course grade fades in
const ANIMATION_TICK: Duration = Duration::from_millis(33);
/// Redraw interval otherwise
const IDLE_TICK: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(name = "gradecalc")]
#[command(about = "Assignment grade calculator for the terminal")]
#[command(version)]
struct Cli {
    /// Config file path (default: ~/.config/gradecalc/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Config::default_path().display().to_string());
    let mut config = Config::load(&config_path)?;
    if cli.dark {
        config.appearance.dark_mode = true;
    }

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    tracing::info!("Grade screen started");

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        "Grade screen closed with {} assignments",
        app.gradebook().len()
    );
    result
}

/// Logs go to a file when asked; stderr shares the screen, so it only
/// gets warnings unless RUST_LOG says otherwise.
fn init_logging(log_file: Option<&std::path::Path>) -> Result<()> {
    let default_directive = if log_file.is_some() {
        "gradecalc=info"
    } else {
        "gradecalc=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into());

    let file_layer = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    let stderr_layer = file_layer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|f| ui::draw(f, app, now))?;

        let tick = if app.is_animating(now) {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if let Some(command) = keymap::resolve(key, app.focus(), app.alert().is_some()) {
                    app.dispatch(command);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
