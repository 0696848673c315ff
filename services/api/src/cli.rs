use crate::demo::{
    run_demo, run_overlap_report, run_priority_report, run_score_report, DemoArgs,
    OverlapReportArgs, PriorityReportArgs, ScoreReportArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use exposure::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Exposure Analyst",
    about = "Score subject dossiers, plan remediation and scan caseloads for overlaps",
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
    /// Score a dossier read from a JSON file and list its remediation options
    Score(ScoreReportArgs),
    /// Compare one subject against a caseload exported as JSON
    Overlaps(OverlapReportArgs),
    /// Triage a case from its subjects' dossiers
    Priority(PriorityReportArgs),
    /// Walk a built-in sample dossier through every engine stage
    Demo(DemoArgs),
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
        Command::Score(args) => run_score_report(args),
        Command::Overlaps(args) => run_overlap_report(args),
        Command::Priority(args) => run_priority_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
