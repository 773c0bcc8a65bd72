use crate::demo::{run_demo, run_register_export, DemoArgs, RegisterExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use govpack::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Governance Pack Service",
    about = "Demonstrate and run the SMCR governance pack service from the command line",
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
    /// Work with the responsibilities register from the command line
    Register {
        #[command(subcommand)]
        command: RegisterCommand,
    },
    /// Run an end-to-end CLI demo covering the governance pack workflow
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RegisterCommand {
    /// Export a responsibilities register as CSV
    Export(RegisterExportArgs),
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
        Command::Register {
            command: RegisterCommand::Export(args),
        } => run_register_export(args),
        Command::Demo(args) => run_demo(args),
    }
}
