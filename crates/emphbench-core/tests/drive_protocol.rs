use emphbench_core::device::reference::ReferenceDut;
use emphbench_core::{BenchError, DriveConfig, Driver, Phase, QFormat, Signal};

fn short_signal(samples: Vec<i16>) -> Signal {
    Signal::from_quantized("short", 1000.0, samples, QFormat::Q15)
}

#[test]
fn full_run_produces_one_record_per_sample() {
    let sig = Signal::synthetic_mixed_sine(QFormat::Q15);
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let trace = Driver::run(&mut dut, &sig, DriveConfig::default()).unwrap();

    assert_eq!(trace.len(), 1000);
    assert_eq!(trace.inputs(), sig.samples());
    for k in 0..4 {
        assert_eq!(trace.operator(k).len(), 1000);
    }
    // Record 0 carries the first sample, encode(0.0) == 0.
    assert_eq!(trace.records()[0].input, 0);
}

#[test]
fn record_times_follow_the_sample_clock() {
    let sig = Signal::synthetic_mixed_sine(QFormat::Q15);
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let trace = Driver::run(&mut dut, &sig, DriveConfig::default()).unwrap();

    for (i, r) in trace.records().iter().enumerate() {
        assert_eq!(r.t, i as f64 / 2000.0);
    }
}

#[test]
fn edge_budget_is_hold_plus_settle_plus_n() {
    let sig = Signal::synthetic_mixed_sine(QFormat::Q15);
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let trace = Driver::run(&mut dut, &sig, DriveConfig::default()).unwrap();
    assert_eq!(trace.edges(), 10 + 1 + 1000);

    let sig = short_signal(vec![1, 2, 3, 4, 5]);
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let cfg = DriveConfig {
        reset_hold_cycles: 3,
        settle_cycles: 2,
    };
    let trace = Driver::run(&mut dut, &sig, cfg).unwrap();
    assert_eq!(trace.edges(), 3 + 2 + 5);
}

#[test]
fn phases_advance_in_order() {
    let sig = short_signal(vec![100, -100]);
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let mut drv = Driver::new(&mut dut, DriveConfig::default()).unwrap();

    assert_eq!(drv.phase(), Phase::Unreset);
    drv.reset().unwrap();
    assert_eq!(drv.phase(), Phase::Idle);
    assert_eq!(drv.edges(), 11);

    let trace = drv.stream(&sig).unwrap();
    assert_eq!(drv.phase(), Phase::Done);
    assert_eq!(trace.len(), 2);
}

#[test]
fn reset_cannot_be_reentered() {
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let mut drv = Driver::new(&mut dut, DriveConfig::default()).unwrap();
    drv.reset().unwrap();
    match drv.reset().unwrap_err() {
        BenchError::Config(msg) => assert!(msg.contains("unreset"), "{msg}"),
        other => panic!("expected Config, got {other:?}"),
    }
}

#[test]
fn streaming_before_reset_is_rejected() {
    let sig = short_signal(vec![1]);
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let mut drv = Driver::new(&mut dut, DriveConfig::default()).unwrap();
    assert!(matches!(
        drv.stream(&sig).unwrap_err(),
        BenchError::Config(_)
    ));
}

#[test]
fn zero_hold_or_settle_is_rejected() {
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let cfg = DriveConfig {
        reset_hold_cycles: 0,
        settle_cycles: 1,
    };
    let Err(err) = Driver::new(&mut dut, cfg) else {
        panic!("zero reset hold must be rejected");
    };
    assert!(matches!(err, BenchError::Config(_)));

    let cfg = DriveConfig {
        reset_hold_cycles: 10,
        settle_cycles: 0,
    };
    let Err(err) = Driver::new(&mut dut, cfg) else {
        panic!("zero settle must be rejected");
    };
    assert!(matches!(err, BenchError::Config(_)));
}

#[test]
fn empty_signal_completes_with_zero_records() {
    let sig = short_signal(vec![]);
    let mut dut = ReferenceDut::new(QFormat::Q15);
    let trace = Driver::run(&mut dut, &sig, DriveConfig::default()).unwrap();
    assert_eq!(trace.len(), 0);
    assert!(trace.is_empty());
    assert_eq!(trace.edges(), 11);
}
