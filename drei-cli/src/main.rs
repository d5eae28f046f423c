use clap::{Parser, Subcommand};
use colored::Colorize;
use drei_lib::Repository;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod browse;
mod dialogs;
mod quiz;

#[derive(Parser, Debug)]
#[command(name = "drei")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Operate on quizzes
    #[command(subcommand)]
    Quiz(quiz::Command),
    /// Browse and manage quizzes interactively
    Browse,
}

fn main() -> sysexits::ExitCode {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let repo = Repository::new();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Quiz(cmd) => quiz::handle(&repo, cmd),
        Command::Browse => browse::run(&repo),
    };

    match result {
        Ok(()) => sysexits::ExitCode::Ok,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            sysexits::ExitCode::Software
        }
    }
}
