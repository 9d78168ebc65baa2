//! Row-oriented verification table: `t,input,tkeo,ed,aso,ado`, one row per
//! cycle record, in temporal order. Time values are double precision and
//! round-trip exactly through Rust's shortest float formatting.

use anyhow::Context;
use emphbench_core::{CycleRecord, VerificationTrace};

pub const HEADER: &str = "t,input,tkeo,ed,aso,ado";

pub fn write_trace(path: &str, trace: &VerificationTrace) -> anyhow::Result<()> {
    let mut s = String::with_capacity(trace.len() * 48 + HEADER.len() + 1);
    s.push_str(HEADER);
    s.push('\n');
    for r in trace.records() {
        s.push_str(&format!(
            "{},{},{},{},{},{}\n",
            r.t, r.input, r.tkeo, r.ed, r.aso, r.ado
        ));
    }
    std::fs::write(path, s).with_context(|| format!("write trace csv: {path}"))?;
    Ok(())
}

pub fn read_records(path: &str) -> anyhow::Result<Vec<CycleRecord>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read trace csv: {path}"))?;
    let mut lines = text.lines();
    let header = lines.next().context("empty trace csv")?;
    anyhow::ensure!(
        header.trim() == HEADER,
        "unexpected csv header: {header:?}"
    );

    let mut out = Vec::new();
    for (i, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split(',').collect();
        anyhow::ensure!(cols.len() == 6, "row {i}: expected 6 columns, got {}", cols.len());
        out.push(CycleRecord {
            t: cols[0].parse().with_context(|| format!("row {i}: bad t"))?,
            input: cols[1]
                .parse()
                .with_context(|| format!("row {i}: bad input"))?,
            tkeo: cols[2].parse().with_context(|| format!("row {i}: bad tkeo"))?,
            ed: cols[3].parse().with_context(|| format!("row {i}: bad ed"))?,
            aso: cols[4].parse().with_context(|| format!("row {i}: bad aso"))?,
            ado: cols[5].parse().with_context(|| format!("row {i}: bad ado"))?,
        });
    }
    Ok(out)
}
