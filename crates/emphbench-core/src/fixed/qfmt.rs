/// Signed fixed-point sample format stored in an i16 word.
///
/// The fraction-bit count is explicit configuration rather than a global
/// constant, so the same codec serves Q1.15 (the circuit's native format)
/// and narrower formats like Q1.7.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QFormat {
    pub frac_bits: u32,
}

impl QFormat {
    /// 1 sign bit, 15 fraction bits: the operator circuit's sample format.
    pub const Q15: QFormat = QFormat { frac_bits: 15 };

    #[inline]
    pub fn scale(self) -> i32 {
        // Wider counts overflow the shift; validate_qformat gates the CLI
        // path, this catches direct library construction.
        debug_assert!(
            (1..=15).contains(&self.frac_bits),
            "frac_bits {} outside 1..=15",
            self.frac_bits
        );
        1 << self.frac_bits
    }

    /// Largest representable magnitude, strictly below 1.
    ///
    /// Clipping to this asymmetric bound (never to -1.0) guarantees the
    /// rounded-and-scaled value stays inside the sample word.
    #[inline]
    pub fn max_mag(self) -> f64 {
        (self.scale() - 1) as f64 / self.scale() as f64
    }

    /// Largest positive code (e.g. 32767 for Q1.15).
    #[inline]
    pub fn max_code(self) -> i16 {
        (self.scale() - 1) as i16
    }

    /// Quantize one sample: clip to `[-max_mag, max_mag]`, scale, round.
    ///
    /// Rounding is half-away-from-zero (`f64::round`). Total over the real
    /// line; out-of-range inputs saturate, they are never an error.
    pub fn encode_one(self, x: f64) -> i16 {
        let l = self.max_mag();
        (x.clamp(-l, l) * self.scale() as f64).round() as i16
    }

    pub fn encode(self, xs: &[f64]) -> Vec<i16> {
        xs.iter().map(|&x| self.encode_one(x)).collect()
    }

    /// Exact: every i16 divides evenly into an f64.
    pub fn decode_one(self, q: i16) -> f64 {
        q as f64 / self.scale() as f64
    }

    pub fn decode(self, qs: &[i16]) -> Vec<f64> {
        qs.iter().map(|&q| self.decode_one(q)).collect()
    }
}
