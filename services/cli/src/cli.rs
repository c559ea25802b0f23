use crate::ceremony;
use clap::{Args, Parser, Subcommand};
use sorting_hat::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sorting-hat",
    about = "Find out which house you really belong to",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the sorting (default command)
    Sort(SortArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct SortArgs {
    /// Use the longer quiz (every variation of each question will be asked)
    #[arg(short, long)]
    pub(crate) long_quiz: bool,
    /// Read questions.csv, answers.csv and weights.csv from this directory
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Sort(SortArgs::default()));

    match command {
        Command::Sort(args) => ceremony::run(args),
    }
}
