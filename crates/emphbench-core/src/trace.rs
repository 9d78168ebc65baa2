//! Verification record builder: aligned per-cycle capture series plus
//! checksums for regression comparison.

use crate::error::{BenchError, Result, Stage};

/// Operator names in declared port order.
pub const OPERATORS: [&str; 4] = ["tkeo", "ed", "aso", "ado"];

/// One clock edge's capture: the atomic unit of the verification trace.
/// Insertion order is temporal order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleRecord {
    pub t: f64,
    pub input: i16,
    pub tkeo: i16,
    pub ed: i16,
    pub aso: i16,
    pub ado: i16,
}

impl CycleRecord {
    pub fn outputs(&self) -> [i16; 4] {
        [self.tkeo, self.ed, self.aso, self.ado]
    }
}

/// Accumulates cycle records during the drive loop; `finish` validates the
/// count and freezes the trace.
pub struct TraceBuilder {
    signal_name: String,
    fs: f64,
    records: Vec<CycleRecord>,
}

impl TraceBuilder {
    pub fn new(signal_name: &str, fs: f64) -> Self {
        Self {
            signal_name: signal_name.to_string(),
            fs,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, rec: CycleRecord) {
        self.records.push(rec);
    }

    /// A length mismatch at DONE is a contract violation, not a setup
    /// error: the device (or the loop driving it) dropped or duplicated a
    /// cycle.
    pub fn finish(self, expected_len: usize, edges: u64) -> Result<VerificationTrace> {
        if self.records.len() != expected_len {
            return Err(BenchError::contract(
                Stage::Validation,
                None,
                format!(
                    "captured {} cycle records for {} input samples",
                    self.records.len(),
                    expected_len
                ),
            ));
        }
        Ok(VerificationTrace {
            signal_name: self.signal_name,
            fs: self.fs,
            edges,
            records: self.records,
        })
    }
}

/// The finalized, immutable record of one run. Owned by the run that
/// produced it; handed as a whole to exporters.
#[derive(Clone, Debug)]
pub struct VerificationTrace {
    signal_name: String,
    fs: f64,
    edges: u64,
    records: Vec<CycleRecord>,
}

impl VerificationTrace {
    pub fn signal_name(&self) -> &str {
        &self.signal_name
    }

    pub fn fs(&self) -> f64 {
        self.fs
    }

    /// Total rising edges the run consumed, reset and settle included.
    pub fn edges(&self) -> u64 {
        self.edges
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CycleRecord] {
        &self.records
    }

    pub fn times(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.t).collect()
    }

    pub fn inputs(&self) -> Vec<i16> {
        self.records.iter().map(|r| r.input).collect()
    }

    /// Output series `k` in `OPERATORS` order; same length as the input
    /// series by construction.
    pub fn operator(&self, k: usize) -> Vec<i16> {
        self.records.iter().map(|r| r.outputs()[k]).collect()
    }

    pub fn tkeo(&self) -> Vec<i16> {
        self.operator(0)
    }

    pub fn ed(&self) -> Vec<i16> {
        self.operator(1)
    }

    pub fn aso(&self) -> Vec<i16> {
        self.operator(2)
    }

    pub fn ado(&self) -> Vec<i16> {
        self.operator(3)
    }

    /// Integer content of the trace, little-endian, in temporal order.
    /// The time axis is derived (`i / fs`) and so not packed.
    fn packed(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.records.len() * 10);
        for r in &self.records {
            bytes.extend_from_slice(&r.input.to_le_bytes());
            for w in r.outputs() {
                bytes.extend_from_slice(&w.to_le_bytes());
            }
        }
        bytes
    }

    /// Cheap regression checksum, stable across identical runs.
    pub fn crc32(&self) -> u32 {
        let mut h = crc32fast::Hasher::new();
        h.update(&self.packed());
        h.finalize()
    }

    /// Stronger fingerprint for locking golden runs.
    pub fn fingerprint16(&self) -> [u8; 16] {
        let hash = blake3::hash(&self.packed());
        let mut out = [0u8; 16];
        out.copy_from_slice(&hash.as_bytes()[0..16]);
        out
    }
}
