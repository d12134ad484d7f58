mod events;
mod ui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::time::Duration;

use clap::{Parser as ClapParser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use events::AppEvent;
use hexrecall::app::App;
use hexrecall::color::DifficultyMode;
use hexrecall::config::{resolve_config, ConfigLayer};
use hexrecall::report::{JsonFormatter, ReportFormatter, SessionReport, TextFormatter};

/// Redraw and UI timer cadence; the memorize countdown runs off accumulated time.
const UI_TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

#[derive(ClapParser, Debug)]
#[command(name = "hexrecall", about = "Memorize a color, then guess its hex code")]
struct Cli {
    /// Difficulty: full hex range or the 0/8/F palette.
    #[arg(short, long, value_enum)]
    mode: Option<DifficultyMode>,

    /// Number of rounds per session.
    #[arg(short, long)]
    rounds: Option<usize>,

    /// Countdown ticks before the target is hidden.
    #[arg(long)]
    countdown: Option<u32>,

    /// Length of one countdown tick in milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// TOML file with default settings; flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write tracing output to this file (filtered by RUST_LOG).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the session results after leaving the TUI.
    #[arg(long, value_enum)]
    summary: Option<SummaryFormat>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let flags = ConfigLayer {
        mode: cli.mode,
        rounds: cli.rounds,
        countdown: cli.countdown,
        tick_ms: cli.tick_ms,
    };
    let config = resolve_config(cli.config.as_deref(), flags).wrap_err("failed to load configuration")?;
    info!(mode = %config.mode, rounds = config.total_rounds, countdown = config.countdown_ticks, "starting");

    // Launch TUI.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run_tui(&mut terminal, &mut app);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if let (Some(format), Some(session)) = (cli.summary, app.session.as_ref()) {
        let report = SessionReport::from_session(session);
        let output = match format {
            SummaryFormat::Text => TextFormatter.format(&report),
            SummaryFormat::Json => JsonFormatter::default().format(&report),
        };
        println!("{output}");
    }

    Ok(())
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).wrap_err_with(|| format!("cannot open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_tui(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();

    events::spawn_key_reader(tx.clone());
    events::spawn_tick_timer(tx, UI_TICK);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(AppEvent::Key(key)) => app.handle_key(key),
            Ok(AppEvent::Tick(dt)) => app.on_tick(dt),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if app.should_quit {
            break;
        }
    }

    if let Some(session) = app.session.as_ref() {
        info!(
            finished = session.is_finished(),
            score = session.final_score(),
            "session closed"
        );
    }
    Ok(())
}
