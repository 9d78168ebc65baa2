//! Register-transfer-level software model of the operator circuit.
//!
//! Two sample history registers and four output registers, all updated on
//! the rising edge and cleared while reset is high. Outputs therefore show
//! the result of the previously consumed input, matching the one-edge
//! latency the pin contract declares.

use crate::device::{Dut, DutOutputs};
use crate::error::Result;
use crate::fixed::{ops, QFormat};

pub struct ReferenceDut {
    fmt: QFormat,
    reset: bool,
    data_in: i16,
    x1: i16,
    x2: i16,
    out: DutOutputs,
}

impl ReferenceDut {
    pub fn new(fmt: QFormat) -> Self {
        Self {
            fmt,
            reset: false,
            data_in: 0,
            x1: 0,
            x2: 0,
            out: DutOutputs::default(),
        }
    }
}

impl Dut for ReferenceDut {
    fn probe(&self) -> Result<()> {
        // All pins are plain fields here; nothing can be missing.
        Ok(())
    }

    fn set_reset(&mut self, high: bool) {
        self.reset = high;
    }

    fn set_data_in(&mut self, sample: i16) {
        self.data_in = sample;
    }

    fn clock_edge(&mut self) {
        if self.reset {
            self.x1 = 0;
            self.x2 = 0;
            self.out = DutOutputs::default();
            return;
        }
        let x = self.data_in;
        self.out = DutOutputs {
            tkeo: ops::tkeo(x, self.x1, self.x2, self.fmt) as i32,
            ed: ops::ed(x, self.x1, self.fmt) as i32,
            aso: ops::aso(x, self.x1, self.fmt) as i32,
            ado: ops::ado(x, self.x1) as i32,
        };
        self.x2 = self.x1;
        self.x1 = x;
    }

    fn outputs(&self) -> DutOutputs {
        self.out
    }
}
