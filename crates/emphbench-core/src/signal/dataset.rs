//! Loader for pre-quantized datasets: signed 16-bit samples as text,
//! one token per line (or whitespace-separated), a single channel.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{BenchError, Result};

/// Read a whole dataset file. A missing file or an unparseable sample is a
/// configuration error, surfaced immediately and never retried.
pub fn load_i16_lines(path: &Path) -> Result<Vec<i16>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            BenchError::Config(format!("dataset not found: {}", path.display()))
        } else {
            BenchError::Io(e)
        }
    })?;

    let mut out = Vec::new();
    for (i, tok) in text.split_whitespace().enumerate() {
        let v: i16 = tok.parse().map_err(|_| {
            BenchError::Config(format!(
                "dataset {}: sample {} is not a 16-bit signed integer: {:?}",
                path.display(),
                i,
                tok
            ))
        })?;
        out.push(v);
    }
    Ok(out)
}
