use std::path::Path;

use clap::{Args, ValueEnum};
use emphbench_core::device::reference::ReferenceDut;
use emphbench_core::signal::{dataset, MIXED_SINE};
use emphbench_core::{golden, validate, DriveConfig, Driver, QFormat, Signal};

use crate::io::csv;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SignalKind {
    /// Deterministic 10 Hz + 150 Hz sine mix
    Synthetic,
    /// Pre-quantized i16 text file (one sample per line)
    Dataset,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Signal source
    #[arg(long, value_enum, default_value_t = SignalKind::Synthetic)]
    pub signal: SignalKind,

    /// Dataset path (required with --signal dataset)
    #[arg(long)]
    pub dataset: Option<String>,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 2000.0)]
    pub fs: f64,

    /// Synthetic signal duration in seconds
    #[arg(long, default_value_t = 0.5)]
    pub duration: f64,

    /// Reset hold in clock edges (must cover the device pipeline depth)
    #[arg(long, default_value_t = 10)]
    pub reset_hold: u32,

    /// Post-reset settle in clock edges
    #[arg(long, default_value_t = 1)]
    pub settle: u32,

    /// Fraction bits of the sample format (15 = Q1.15)
    #[arg(long, default_value_t = 15)]
    pub frac_bits: u32,

    /// Cross-check the captured trace against the direct-form model
    /// (pass `--golden-check false` to skip)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, num_args = 1)]
    pub golden_check: bool,

    /// Write the verification table here
    #[arg(long, default_value = "operators_comparison.csv")]
    pub csv: String,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let fmt = QFormat {
        frac_bits: args.frac_bits,
    };
    validate::validate_qformat(&fmt)?;

    let sig = match args.signal {
        SignalKind::Synthetic => {
            Signal::from_components("mixed_sine", args.fs, args.duration, &MIXED_SINE, fmt)
        }
        SignalKind::Dataset => {
            let path = args
                .dataset
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("--dataset is required with --signal dataset"))?;
            let data = dataset::load_i16_lines(Path::new(path))?;
            let name = Path::new(path)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("dataset");
            Signal::from_quantized(name, args.fs, data, fmt)
        }
    };

    eprintln!("--- run ---");
    eprintln!(
        "signal   = {} ({} samples @ {} Hz)",
        sig.name(),
        sig.len(),
        sig.fs()
    );

    let mut dut = ReferenceDut::new(fmt);
    let cfg = DriveConfig {
        reset_hold_cycles: args.reset_hold,
        settle_cycles: args.settle,
    };
    let trace = Driver::run(&mut dut, &sig, cfg)?;

    if args.golden_check {
        golden::check(&trace, &sig, fmt)?;
        eprintln!("golden   = ok");
    }

    csv::write_trace(&args.csv, &trace)?;

    let fp: String = trace
        .fingerprint16()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();
    eprintln!("edges    = {}", trace.edges());
    eprintln!("records  = {}", trace.len());
    eprintln!("crc32    = {:08x}", trace.crc32());
    eprintln!("blake3   = {fp}");
    eprintln!("csv      = {}", args.csv);
    Ok(())
}
