pub mod error;
pub mod validate;

pub mod device;
pub mod drive;
pub mod fixed;
pub mod golden;
pub mod signal;
pub mod trace;

pub use crate::device::{Dut, DutOutputs};
pub use crate::drive::{DriveConfig, Driver, Phase};
pub use crate::error::{BenchError, Result, Stage};
pub use crate::fixed::qfmt::QFormat;
pub use crate::signal::Signal;
pub use crate::trace::{CycleRecord, VerificationTrace};
