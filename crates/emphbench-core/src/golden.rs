//! Direct-form golden model and trace cross-check.
//!
//! Computes the four operator series straight from the quantized samples
//! with zero-initialized history, independently of the register-transfer
//! device model, then compares a captured trace record by record.

use crate::error::{BenchError, Result, Stage};
use crate::fixed::{ops, QFormat};
use crate::signal::Signal;
use crate::trace::VerificationTrace;

#[derive(Clone, Debug, Default)]
pub struct GoldenSeries {
    pub tkeo: Vec<i16>,
    pub ed: Vec<i16>,
    pub aso: Vec<i16>,
    pub ado: Vec<i16>,
}

/// Expected outputs for each sample index, assuming the device's history
/// registers were zeroed by reset.
pub fn series(x: &[i16], fmt: QFormat) -> GoldenSeries {
    let mut g = GoldenSeries::default();
    let (mut x1, mut x2) = (0i16, 0i16);
    for &xn in x {
        g.tkeo.push(ops::tkeo(xn, x1, x2, fmt));
        g.ed.push(ops::ed(xn, x1, fmt));
        g.aso.push(ops::aso(xn, x1, fmt));
        g.ado.push(ops::ado(xn, x1));
        x2 = x1;
        x1 = xn;
    }
    g
}

/// Compare every captured record against the direct form. The first
/// divergence is a contract violation carrying its sample index.
pub fn check(trace: &VerificationTrace, signal: &Signal, fmt: QFormat) -> Result<()> {
    if trace.len() != signal.len() {
        return Err(BenchError::contract(
            Stage::Validation,
            None,
            format!(
                "trace has {} records for {} input samples",
                trace.len(),
                signal.len()
            ),
        ));
    }

    let g = series(signal.samples(), fmt);
    for (i, rec) in trace.records().iter().enumerate() {
        let want = [g.tkeo[i], g.ed[i], g.aso[i], g.ado[i]];
        let got = rec.outputs();
        if got != want {
            return Err(BenchError::contract(
                Stage::Validation,
                Some(i),
                format!("captured {got:?} diverges from golden {want:?}"),
            ));
        }
    }
    Ok(())
}
