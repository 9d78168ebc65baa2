//! Static five-panel HTML report: raw input plus the four operator series,
//! each an inline SVG polyline over the shared time axis. No scripts, no
//! external assets; the file is self-contained for archiving next to the
//! CSV it renders.

use anyhow::Context;
use emphbench_core::CycleRecord;

pub const PANEL_TITLES: [&str; 5] = [
    "Raw Input Signal",
    "TKEO Energy",
    "ED Energy",
    "ASO Magnitude",
    "ADO Magnitude",
];

const W: f64 = 960.0;
const H: f64 = 170.0;
const PAD: f64 = 10.0;

pub fn write_html(path: &str, title: &str, records: &[CycleRecord]) -> anyhow::Result<()> {
    anyhow::ensure!(!records.is_empty(), "no records to report");

    let t: Vec<f64> = records.iter().map(|r| r.t).collect();
    let series: [Vec<f64>; 5] = [
        records.iter().map(|r| r.input as f64).collect(),
        records.iter().map(|r| r.tkeo as f64).collect(),
        records.iter().map(|r| r.ed as f64).collect(),
        records.iter().map(|r| r.aso as f64).collect(),
        records.iter().map(|r| r.ado as f64).collect(),
    ];

    let mut html = String::new();
    html.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\">");
    html.push_str(&format!("<title>{title}</title>"));
    html.push_str(
        "<style>body{font-family:sans-serif;margin:24px}\
         figure{margin:0 0 14px 0}\
         figcaption{font-size:13px;color:#444;margin-bottom:2px}\
         svg{border:1px solid #ddd;width:100%;height:170px;display:block}</style>",
    );
    html.push_str("</head><body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    for (panel, ys) in PANEL_TITLES.iter().zip(&series) {
        html.push_str(&panel_svg(panel, &t, ys));
    }
    html.push_str("</body></html>\n");

    std::fs::write(path, html).with_context(|| format!("write report html: {path}"))?;
    Ok(())
}

fn bounds(vs: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in vs {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}

fn panel_svg(title: &str, t: &[f64], ys: &[f64]) -> String {
    let (tmin, tmax) = bounds(t);
    let (ymin, ymax) = bounds(ys);
    let tspan = (tmax - tmin).max(f64::EPSILON);
    let yspan = (ymax - ymin).max(f64::EPSILON);

    let mut pts = String::with_capacity(t.len() * 12);
    for (&x, &y) in t.iter().zip(ys) {
        let px = PAD + (x - tmin) / tspan * (W - 2.0 * PAD);
        let py = H - PAD - (y - ymin) / yspan * (H - 2.0 * PAD);
        pts.push_str(&format!("{px:.1},{py:.1} "));
    }

    format!(
        "<figure><figcaption>{title} &mdash; y range [{ymin}, {ymax}]</figcaption>\
         <svg viewBox=\"0 0 {W} {H}\" preserveAspectRatio=\"none\">\
         <polyline fill=\"none\" stroke=\"#1f77b4\" stroke-width=\"1\" points=\"{pts}\"/>\
         </svg></figure>\n"
    )
}
