//! Pin-level boundary of the device under test.
//!
//! The harness drives the circuit only through this capability trait
//! (reset, data-in, clock, four operator outputs), so a simulated model and
//! a cosimulation bridge are interchangeable.

pub mod reference;

use crate::error::Result;

/// One cycle's output words, wider than the declared 16-bit ports so the
/// drive loop can detect out-of-range values instead of clamping them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DutOutputs {
    pub tkeo: i32,
    pub ed: i32,
    pub aso: i32,
    pub ado: i32,
}

impl DutOutputs {
    /// Port-name/value pairs in declared order.
    pub fn words(&self) -> [(&'static str, i32); 4] {
        [
            ("tkeo_out", self.tkeo),
            ("ed_out", self.ed),
            ("aso_out", self.aso),
            ("ado_out", self.ado),
        ]
    }
}

pub trait Dut {
    /// Confirm the reset/data/clock/output pins are all reachable.
    ///
    /// Called once before any edge is driven; `Err(Config)` aborts the run
    /// with the device untouched.
    fn probe(&self) -> Result<()>;

    fn set_reset(&mut self, high: bool);

    fn set_data_in(&mut self, sample: i16);

    /// Advance exactly one rising edge. The protocol never skips or
    /// double-consumes edges.
    fn clock_edge(&mut self);

    /// Output words as of the last rising edge. Valid one edge after the
    /// corresponding input was driven; never sampled combinationally.
    fn outputs(&self) -> DutOutputs;
}
