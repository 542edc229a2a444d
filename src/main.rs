// sortty: step-by-step sorting visualizer for the terminal

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use sortty::config::{self, Config};
use sortty::driver::{BellListener, Driver, Tick, TracingListener};
use sortty::engine::{Algorithm, Direction};
use sortty::ui::App;

#[derive(Parser, Debug)]
#[command(name = "sortty", about = "Watch sorting algorithms work, one swap at a time")]
struct Cli {
    /// Algorithm to select at startup (bubble, insertion, selection, merge, quick, shaker, heap)
    #[arg(short, long, default_value = "bubble", value_parser = parse_algorithm)]
    algorithm: Algorithm,

    /// Sort in descending order
    #[arg(short, long)]
    descending: bool,

    /// Number of values in generated lists
    #[arg(short = 'n', long, default_value_t = config::DEFAULT_SIZE)]
    size: usize,

    /// Smallest generated value
    #[arg(long, default_value_t = config::DEFAULT_MIN_VALUE, allow_hyphen_values = true)]
    min: i32,

    /// Largest generated value
    #[arg(long, default_value_t = config::DEFAULT_MAX_VALUE, allow_hyphen_values = true)]
    max: i32,

    /// Milliseconds between two steps
    #[arg(long, default_value_t = config::DEFAULT_TICK.as_millis() as u64)]
    tick_ms: u64,

    /// Seed for list generation
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed starting list, e.g. `--values 5,3,8,1`
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i32>>,

    /// Sort once without the terminal UI and print a summary
    #[arg(long)]
    headless: bool,

    /// Write logs to this file (the UI owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Ring the terminal bell when a run finishes
    #[arg(long)]
    bell: bool,
}

/// Where the `--bell` listener writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BellTarget {
    Stdout,
    /// Headless mode prints its summary on stdout
    Stderr,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, sortty::error::ConfigError> {
    s.parse()
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            size: self.size,
            min_value: self.min,
            max_value: self.max,
            tick: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            algorithm: self.algorithm,
            direction: if self.descending {
                Direction::Descending
            } else {
                Direction::Ascending
            },
            values: self.values.clone(),
        }
    }

    fn bell_target(&self) -> Option<BellTarget> {
        match (self.bell, self.headless) {
            (false, _) => None,
            (true, false) => Some(BellTarget::Stdout),
            (true, true) => Some(BellTarget::Stderr),
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortty=info"));

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.config();
    config.validate().context("invalid configuration")?;

    let mut driver = Driver::new(&config);
    driver.add_listener(Box::new(TracingListener));
    match cli.bell_target() {
        Some(BellTarget::Stdout) => driver.add_listener(Box::new(BellListener::new(io::stdout()))),
        Some(BellTarget::Stderr) => driver.add_listener(Box::new(BellListener::new(io::stderr()))),
        None => {}
    }

    if cli.headless {
        return run_headless(driver);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(driver, &config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")
}

fn run_headless(mut driver: Driver) -> Result<()> {
    let initial = driver.sequence().values().to_vec();
    driver.start();
    while driver.is_running() {
        if let Tick::Completed = driver.tick() {
            break;
        }
    }

    let sorted = driver.direction().is_sorted(driver.sequence().values());
    println!("{} - {}", driver.algorithm(), driver.direction());
    println!("input:  {:?}", initial);
    println!("output: {:?}", driver.sequence().values());
    println!("steps:  {}", driver.steps_taken());

    if !sorted {
        anyhow::bail!("{} left the list unsorted", driver.algorithm());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sortty").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_bell_stays_off_stdout_when_headless() {
        assert_eq!(parse(&[]).bell_target(), None);
        assert_eq!(parse(&["--bell"]).bell_target(), Some(BellTarget::Stdout));
        assert_eq!(
            parse(&["--headless", "--bell"]).bell_target(),
            Some(BellTarget::Stderr)
        );
    }

    #[test]
    fn test_cli_builds_config() {
        let config = parse(&["--algorithm", "heap", "--descending", "--values", "5,-3,8"]).config();
        assert_eq!(config.algorithm, Algorithm::Heap);
        assert_eq!(config.direction, Direction::Descending);
        assert_eq!(config.values, Some(vec![5, -3, 8]));
        assert!(config.validate().is_ok());
    }
}
