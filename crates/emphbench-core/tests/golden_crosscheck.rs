use emphbench_core::device::reference::ReferenceDut;
use emphbench_core::trace::TraceBuilder;
use emphbench_core::{
    golden, BenchError, CycleRecord, DriveConfig, Driver, QFormat, Signal, Stage,
};

#[test]
fn direct_form_matches_hand_computed_case() {
    // x = [0.5, -0.5, 0.25] in Q1.15.
    let g = golden::series(&[16384, -16384, 8192], QFormat::Q15);
    assert_eq!(g.tkeo, vec![0, 8192, 4096]);
    assert_eq!(g.ed, vec![8192, 0, -6144]);
    assert_eq!(g.aso, vec![8192, 16384, 6144]);
    assert_eq!(g.ado, vec![16384, 0, -8192]);
}

#[test]
fn captured_trace_matches_the_direct_form() {
    let sig = Signal::synthetic_mixed_sine(QFormat::Q15);
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let trace = Driver::run(&mut dut, &sig, DriveConfig::default()).unwrap();
    golden::check(&trace, &sig, QFormat::Q15).unwrap();
}

#[test]
fn crosscheck_holds_at_full_scale_inputs() {
    // Saturating arithmetic must agree between the register model and the
    // direct form at the extremes.
    let sig = Signal::from_quantized(
        "rails",
        1000.0,
        vec![32767, -32767, 32767, -32767, 0],
        QFormat::Q15,
    );
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let trace = Driver::run(&mut dut, &sig, DriveConfig::default()).unwrap();
    golden::check(&trace, &sig, QFormat::Q15).unwrap();
}

#[test]
fn tampered_record_is_reported_with_its_index() {
    let sig = Signal::from_quantized("short", 1000.0, vec![16384, -16384, 8192], QFormat::Q15);
    let g = golden::series(sig.samples(), QFormat::Q15);

    let mut b = TraceBuilder::new(sig.name(), sig.fs());
    for (i, &input) in sig.samples().iter().enumerate() {
        let mut rec = CycleRecord {
            t: sig.time(i),
            input,
            tkeo: g.tkeo[i],
            ed: g.ed[i],
            aso: g.aso[i],
            ado: g.ado[i],
        };
        if i == 1 {
            rec.ed ^= 1; // single-bit corruption
        }
        b.push(rec);
    }
    let trace = b.finish(sig.len(), 16).unwrap();

    match golden::check(&trace, &sig, QFormat::Q15).unwrap_err() {
        BenchError::Contract { stage, index, .. } => {
            assert_eq!(stage, Stage::Validation);
            assert_eq!(index, Some(1));
        }
        other => panic!("expected Contract, got {other:?}"),
    }
}

#[test]
fn length_mismatch_is_a_validation_violation() {
    let sig = Signal::from_quantized("short", 1000.0, vec![1, 2, 3], QFormat::Q15);
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let trace = Driver::run(&mut dut, &sig, DriveConfig::default()).unwrap();

    let longer = Signal::from_quantized("longer", 1000.0, vec![1, 2, 3, 4], QFormat::Q15);
    match golden::check(&trace, &longer, QFormat::Q15).unwrap_err() {
        BenchError::Contract { stage, index, .. } => {
            assert_eq!(stage, Stage::Validation);
            assert_eq!(index, None);
        }
        other => panic!("expected Contract, got {other:?}"),
    }
}
