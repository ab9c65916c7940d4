use crate::reports::{
    run_batch_estimate, run_diagnose, run_estimate, BatchArgs, DiagnoseArgs, EstimateArgs,
};
use crate::server;
use auto_advisor::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Auto Advisor",
    about = "Estimate vehicle emissions and diagnose car problems from the command line",
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
    /// Estimate tailpipe emissions for one vehicle or a fleet file
    Emissions {
        #[command(subcommand)]
        command: EmissionsCommand,
    },
    /// Describe a car problem and print the matching advice
    Diagnose(DiagnoseArgs),
}

#[derive(Subcommand, Debug)]
enum EmissionsCommand {
    /// Estimate a single vehicle
    Estimate(EstimateArgs),
    /// Estimate every row of a CSV file
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
        Command::Emissions {
            command: EmissionsCommand::Estimate(args),
        } => run_estimate(args),
        Command::Emissions {
            command: EmissionsCommand::Batch(args),
        } => run_batch_estimate(args),
        Command::Diagnose(args) => run_diagnose(args),
    }
}
