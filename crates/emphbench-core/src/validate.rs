use crate::drive::DriveConfig;
use crate::error::{BenchError, Result};
use crate::fixed::qfmt::QFormat;

pub fn validate_drive(cfg: &DriveConfig) -> Result<()> {
    // A zero hold would release reset before any edge clears the pipeline.
    if cfg.reset_hold_cycles == 0 {
        return Err(BenchError::Config(
            "reset_hold_cycles must be at least 1".into(),
        ));
    }
    // Reset release is registered; the first sample cannot share its edge.
    if cfg.settle_cycles == 0 {
        return Err(BenchError::Config("settle_cycles must be at least 1".into()));
    }
    Ok(())
}

pub fn validate_qformat(fmt: &QFormat) -> Result<()> {
    if fmt.frac_bits == 0 || fmt.frac_bits > 15 {
        return Err(BenchError::Config(format!(
            "frac_bits must be in 1..=15 for a 16-bit sample word, got {}",
            fmt.frac_bits
        )));
    }
    Ok(())
}
