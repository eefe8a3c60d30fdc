use crate::report::{run_batch, run_estimate, BatchArgs, EstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use coparent_plan::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Co-Parenting Plan Builder",
    about = "Run the plan builder service or estimate support ranges from the command line",
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
    /// Estimate a monthly support range for one household
    Estimate(EstimateArgs),
    /// Estimate every household in a CSV export of form submissions
    Batch(BatchArgs),
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
        Command::Estimate(args) => run_estimate(args),
        Command::Batch(args) => run_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["coparent-plan-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_estimate_arguments() {
        let cli = Cli::try_parse_from([
            "coparent-plan-api",
            "estimate",
            "--income-a",
            "4000",
            "--income-b",
            "3500",
            "--children",
            "2",
            "--overnights-a",
            "182",
            "--expenses",
            "500",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Estimate(args)) => {
                assert_eq!(args.income_a, "4000");
                assert_eq!(args.overnights_b, None);
                assert!(!args.json);
            }
            other => panic!("expected estimate command, got {other:?}"),
        }
    }

    #[test]
    fn batch_requires_csv_path() {
        assert!(Cli::try_parse_from(["coparent-plan-api", "batch"]).is_err());
    }
}
