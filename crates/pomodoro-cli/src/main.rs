use chrono::Utc;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use pomodoro_core::{Command, Dispatcher, Sinks, TimerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pomodoro", version, about = "Pomodoro timer for the tmux status bar")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start a timer for 30 minutes
    Start,
    /// Show number of done pomodoros and status of the current timer
    Status {
        /// Print a JSON snapshot instead of the status-bar line
        #[arg(long)]
        json: bool,
    },
    /// Stop the current timer
    Stop,
    /// Clear the current timer
    Clear,
    /// Mark the previous finished pomodoro as failed, stop the current timer
    Cancel,
    /// Reset number of done pomodoros to 0, stop the current timer
    Reset,
    /// Wait for the current timer to finish (started by `start`)
    #[command(hide = true)]
    Beep,
}

impl From<&Commands> for Command {
    fn from(command: &Commands) -> Self {
        match command {
            Commands::Start => Command::Start,
            Commands::Status { .. } => Command::Status,
            Commands::Stop => Command::Stop,
            Commands::Clear => Command::Clear,
            Commands::Cancel => Command::Cancel,
            Commands::Reset => Command::Reset,
            Commands::Beep => Command::Beep,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("POMODORO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    let _ = Cli::command().print_help();
    println!();
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = Dispatcher::new(TimerConfig::load(), Sinks::system());
    let now = Utc::now();
    tracing::debug!(?command, "running");

    match command {
        Commands::Status { json: true } => {
            if let Some(snapshot) = dispatcher.snapshot(now)? {
                println!("{}", serde_json::to_string(&snapshot)?);
            }
        }
        other => {
            if let Some(line) = dispatcher.run(Command::from(&other), now)? {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            tracing::debug!(error = %e, "unrecognized command");
            print_usage();
            std::process::exit(1);
        }
    };

    let Some(command) = cli.command else {
        print_usage();
        return;
    };

    if let Err(e) = run(command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
