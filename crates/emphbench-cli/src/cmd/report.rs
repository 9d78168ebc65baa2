use clap::Args;

use crate::io::{csv, report};

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Input CSV as written by `run`
    #[arg(long)]
    pub r#in: String,

    /// Output HTML path
    #[arg(long, default_value = "report.html")]
    pub out: String,

    /// Report title
    #[arg(long, default_value = "Operator Validation")]
    pub title: String,
}

pub fn run(args: ReportArgs) -> anyhow::Result<()> {
    let records = csv::read_records(&args.r#in)?;
    report::write_html(&args.out, &args.title, &records)?;
    eprintln!("--- report ---");
    eprintln!("rows     = {}", records.len());
    eprintln!("html     = {}", args.out);
    Ok(())
}
