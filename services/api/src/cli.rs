use crate::demo::{run_demo, run_normalize, run_rank, NormalizeArgs, RankArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use listing_decision::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Listing Decision Engine",
    about = "Score, rank, and explain rental listings from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank listings from a CSV export for a searcher's context
    Rank(RankArgs),
    /// Normalize a raw decision payload (JSON file or stdin) into the canonical shape
    Normalize(NormalizeArgs),
    /// Score, rank, and normalize a built-in set of sample listings
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Rank(args) => run_rank(args),
        Command::Normalize(args) => run_normalize(args),
        Command::Demo => run_demo(),
    }
}
