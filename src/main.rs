//! Coursedeck terminal front end.
//!
//! ```text
//! main() -> load config -> init tracing -> restore snapshot?
//!        -> --print ? write view to stdout
//!                   : TerminalSession -> event loop -> save snapshot?
//! ```

use std::{
    fs::OpenOptions,
    io::{self, Stdout},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coursedeck::{
    config::{Config, ConfigOverrides, ThemeChoice, DEFAULT_CONFIG_FILE},
    session,
    ui::{self, App, Flow},
    Catalog,
};

const DEFAULT_LOG_FILE: &str = "coursedeck.log";

#[derive(Debug, Parser)]
#[command(name = "coursedeck", version, about = "Browse the academic course catalog")]
struct Cli {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Color theme, overrides the config file
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Keep the session in this file between runs
    #[arg(long, value_name = "FILE")]
    state_file: Option<PathBuf>,

    /// Write logs here instead of coursedeck.log
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the current view as plain text and exit
    #[arg(long)]
    print: bool,

    /// With --print: skip the onboarding screen
    #[arg(long, requires = "print")]
    dismiss: bool,

    /// With --print: expand the card with this course code (repeatable)
    #[arg(long, value_name = "CODE", requires = "print")]
    expand: Vec<String>,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let config =
            Config::load(&path).with_context(|| format!("loading {}", path.display()))?;

        Ok(config.with_overrides(ConfigOverrides {
            theme: self.theme,
            state_file: self.state_file.clone(),
            log_file: self.log_file.clone(),
        }))
    }
}

/// Logs go to a file, never to the terminal the UI draws on. `--print`
/// runs keep stdout clean and leave no log file behind.
fn init_tracing(config: &Config, verbose: bool, print: bool) {
    let default = if verbose {
        "coursedeck=debug"
    } else {
        "coursedeck=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    if print {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    }

    let path = config
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
        }
        Err(_) => tracing_subscriber::registry().with(env_filter).init(),
    }
}

/// Raw mode plus alternate screen, restored on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("entering alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn run(session: &mut TerminalSession, app: &mut App) -> Result<()> {
    loop {
        session.terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read().context("reading terminal input")? {
            if app.handle_key(key) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config, cli.verbose, cli.print);

    let state_file = config.state_file.as_deref();
    let controller = session::load(Catalog::standard(), state_file)
        .context("restoring saved session")?;
    if cli.print {
        session::print_view(controller, cli.dismiss, &cli.expand, &mut io::stdout().lock())?;
        return Ok(());
    }

    let mut app = App::new(controller, &config);
    {
        let mut terminal = TerminalSession::new()?;
        run(&mut terminal, &mut app)?;
    }
    tracing::info!(screen = ?app.controller().current_screen(), "session ended");

    session::save(&app.into_controller(), state_file).context("saving session")
}
