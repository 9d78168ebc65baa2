use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "emphbench")]
#[command(about = "Cycle-accurate verification harness for the energy-operator circuit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Drive a signal through the device and export the verification table
    Run(cmd::run::RunArgs),

    /// Render the five-panel HTML report from an exported table
    Report(cmd::report::ReportArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Run(args) => cmd::run::run(args),
        Commands::Report(args) => cmd::report::run(args),
    }
}
