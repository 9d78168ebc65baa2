//! Device driving protocol: reset sequencing plus the one-sample-per-edge
//! feed/capture loop.

use crate::device::Dut;
use crate::error::{BenchError, Result, Stage};
use crate::signal::Signal;
use crate::trace::{CycleRecord, TraceBuilder, VerificationTrace};
use crate::validate::validate_drive;

/// Reset timing, reified as parameters: both counts are properties of the
/// device's pipeline depth, not of the protocol.
#[derive(Clone, Copy, Debug)]
pub struct DriveConfig {
    /// Rising edges to hold reset high with data-in at zero. Must exceed
    /// the device's internal pipeline depth.
    pub reset_hold_cycles: u32,
    /// Rising edges between reset release and the first sample, to respect
    /// the registered reset-release timing.
    pub settle_cycles: u32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            reset_hold_cycles: 10,
            settle_cycles: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unreset,
    Resetting,
    Idle,
    Streaming,
    Done,
}

/// Owns the device ports for the duration of a run. Strictly sequential:
/// one input stream, one capture stream, synchronized 1:1 by the edge.
pub struct Driver<'a, D: Dut> {
    dut: &'a mut D,
    cfg: DriveConfig,
    phase: Phase,
    edges: u64,
}

impl<'a, D: Dut> Driver<'a, D> {
    pub fn new(dut: &'a mut D, cfg: DriveConfig) -> Result<Self> {
        validate_drive(&cfg)?;
        Ok(Self {
            dut,
            cfg,
            phase: Phase::Unreset,
            edges: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rising edges consumed so far. A full run consumes exactly
    /// `reset_hold_cycles + settle_cycles + N`.
    pub fn edges(&self) -> u64 {
        self.edges
    }

    fn edge(&mut self) {
        self.dut.clock_edge();
        self.edges += 1;
    }

    /// Unreset -> Resetting -> Idle. Probes the pins first; a probe failure
    /// aborts with zero edges driven.
    pub fn reset(&mut self) -> Result<()> {
        if self.phase != Phase::Unreset {
            return Err(BenchError::Config(format!(
                "reset must start from the unreset phase, not {:?}",
                self.phase
            )));
        }
        self.dut.probe()?;

        self.phase = Phase::Resetting;
        self.dut.set_reset(true);
        self.dut.set_data_in(0);
        for _ in 0..self.cfg.reset_hold_cycles {
            self.edge();
        }

        self.dut.set_reset(false);
        for _ in 0..self.cfg.settle_cycles {
            self.edge();
        }
        self.phase = Phase::Idle;
        Ok(())
    }

    /// Idle -> Streaming -> Done. For each quantized sample in order: drive
    /// data-in, advance one edge, capture the four outputs into a cycle
    /// record tagged `index / fs`.
    ///
    /// On error the device is left mid-stream and needs a fresh reset
    /// before it can be driven again.
    pub fn stream(&mut self, signal: &Signal) -> Result<VerificationTrace> {
        if self.phase != Phase::Idle {
            return Err(BenchError::Config(format!(
                "stream requires the idle phase, not {:?}",
                self.phase
            )));
        }
        self.phase = Phase::Streaming;

        let mut builder = TraceBuilder::new(signal.name(), signal.fs());
        for (i, &sample) in signal.samples().iter().enumerate() {
            self.dut.set_data_in(sample);
            self.edge();

            let out = self.dut.outputs();
            let mut words = [0i16; 4];
            for (w, (port, raw)) in words.iter_mut().zip(out.words()) {
                *w = check_word(port, raw, i)?;
            }
            builder.push(CycleRecord {
                t: signal.time(i),
                input: sample,
                tkeo: words[0],
                ed: words[1],
                aso: words[2],
                ado: words[3],
            });
        }

        self.phase = Phase::Done;
        builder.finish(signal.len(), self.edges)
    }

    /// Convenience: probe, reset, then stream the whole signal.
    pub fn run(dut: &'a mut D, signal: &Signal, cfg: DriveConfig) -> Result<VerificationTrace> {
        let mut drv = Driver::new(dut, cfg)?;
        drv.reset()?;
        drv.stream(signal)
    }
}

/// A captured word outside the declared 16-bit range is a device-contract
/// violation; it is reported, never clamped.
fn check_word(port: &str, raw: i32, index: usize) -> Result<i16> {
    i16::try_from(raw).map_err(|_| {
        BenchError::contract(
            Stage::Streaming,
            Some(index),
            format!("{port} word {raw} outside the 16-bit signed range"),
        )
    })
}
