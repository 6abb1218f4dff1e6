use crate::commands::{run_batch, run_demo, run_diagnose, BatchArgs, DemoArgs, DiagnoseArgs};
use clap::{Parser, Subcommand};
use diagnostico::config::AppConfig;
use diagnostico::error::AppError;
use diagnostico::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "diagnostico",
    about = "Run the restructuring diagnosis for prospective clients from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Diagnose a single company from its monthly figures
    Diagnose(DiagnoseArgs),
    /// Diagnose every lead in a CSV export
    Batch(BatchArgs),
    /// Walk through a reference case end to end (default command)
    Demo(DemoArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Diagnose(args) => run_diagnose(args, &config).await,
        Command::Batch(args) => run_batch(args),
        Command::Demo(args) => run_demo(args, &config).await,
    }
}
