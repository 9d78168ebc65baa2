pub mod dataset;

use crate::fixed::qfmt::QFormat;

/// The 10 Hz + 150 Hz mix used by the stock verification run.
pub const MIXED_SINE: [(f64, f64); 2] = [(0.6, 10.0), (0.3, 150.0)];

/// A named test stimulus: uniformly sampled floats plus their quantized
/// view. Read-only after construction; time axis is `index / fs`.
#[derive(Clone, Debug)]
pub struct Signal {
    name: String,
    fs: f64,
    x_float: Vec<f64>,
    x_q: Vec<i16>,
}

impl Signal {
    /// Deterministic sum-of-sinusoids stimulus.
    ///
    /// `components` is a list of `(amplitude, freq_hz)` terms evaluated at
    /// `t = i / fs` for `ceil(duration_s * fs)` samples, then quantized.
    pub fn from_components(
        name: &str,
        fs: f64,
        duration_s: f64,
        components: &[(f64, f64)],
        fmt: QFormat,
    ) -> Signal {
        let n = (duration_s * fs).ceil() as usize;
        let x_float: Vec<f64> = (0..n)
            .map(|i| {
                let t = i as f64 / fs;
                components
                    .iter()
                    .map(|&(amp, freq)| amp * (2.0 * std::f64::consts::PI * freq * t).sin())
                    .sum()
            })
            .collect();
        let x_q = fmt.encode(&x_float);
        Signal {
            name: name.to_string(),
            fs,
            x_float,
            x_q,
        }
    }

    /// The stock mixed-sine stimulus: N = 1000 samples at 2 kHz.
    pub fn synthetic_mixed_sine(fmt: QFormat) -> Signal {
        Signal::from_components("mixed_sine", 2000.0, 0.5, &MIXED_SINE, fmt)
    }

    /// Wrap an externally supplied pre-quantized channel.
    ///
    /// The integers are kept bit-exact for feeding; the float view is their
    /// decode. Re-encoding that view reproduces the same integers for every
    /// code the encoder can emit (the one exception, the unreachable
    /// minimum code, is preserved here by keeping `data` as-is).
    pub fn from_quantized(name: &str, fs: f64, data: Vec<i16>, fmt: QFormat) -> Signal {
        let x_float = fmt.decode(&data);
        Signal {
            name: name.to_string(),
            fs,
            x_float,
            x_q: data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fs(&self) -> f64 {
        self.fs
    }

    pub fn len(&self) -> usize {
        self.x_q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_q.is_empty()
    }

    /// Quantized samples, the stream fed to the device.
    pub fn samples(&self) -> &[i16] {
        &self.x_q
    }

    pub fn floats(&self) -> &[f64] {
        &self.x_float
    }

    pub fn time(&self, index: usize) -> f64 {
        index as f64 / self.fs
    }
}
