use std::sync::mpsc::TrySendError;

use currentplot::{channel_current, ChartCommand, DrainStats, LiveChartApp, LiveChartConfig};

fn config(capacity: usize) -> LiveChartConfig {
    LiveChartConfig {
        capacity,
        ..LiveChartConfig::default()
    }
}

#[test]
fn drain_applies_commands_in_order() {
    let (sink, rx) = channel_current(16);
    let mut app = LiveChartApp::new(rx, &config(4)).unwrap();

    sink.send_sample(1e-6).unwrap();
    sink.send_samples(vec![2e-6, 3e-6]).unwrap();
    sink.set_title("Sensor B").unwrap();

    let stats = app.drain_commands();
    assert_eq!(
        stats,
        DrainStats {
            applied: 3,
            rejected: 0,
            title_changed: true,
            disconnected: false,
        }
    );
    assert_eq!(app.chart().buffer().as_slice(), &[0.0, 1e-6, 2e-6, 3e-6]);
    assert_eq!(app.chart().y_bounds().max, 3e-6);
    assert_eq!(app.chart().title(), "Sensor B");
}

#[test]
fn drain_skips_non_finite_samples() {
    let (sink, rx) = channel_current(16);
    let mut app = LiveChartApp::new(rx, &config(2)).unwrap();

    sink.send_samples(vec![1e-6, f64::NAN, 2e-6]).unwrap();
    let stats = app.drain_commands();
    assert_eq!(stats.applied, 2);
    assert_eq!(stats.rejected, 1);
    assert_eq!(app.chart().buffer().as_slice(), &[1e-6, 2e-6]);
}

#[test]
fn empty_channel_is_a_no_op() {
    let (_sink, rx) = channel_current(4);
    let mut app = LiveChartApp::new(rx, &config(2)).unwrap();
    assert_eq!(app.drain_commands(), DrainStats::default());
    assert!(!app.producers_gone());
}

#[test]
fn dropped_producers_are_reported_after_pending_commands() {
    let (sink, rx) = channel_current(4);
    let mut app = LiveChartApp::new(rx, &config(2)).unwrap();
    sink.send_sample(5e-9).unwrap();
    drop(sink);

    let stats = app.drain_commands();
    assert_eq!(stats.applied, 1);
    assert!(stats.disconnected);
    assert!(app.producers_gone());
    assert_eq!(app.chart().buffer().latest(), 5e-9);
}

#[test]
fn samples_from_other_threads_arrive_in_order() {
    let (sink, rx) = channel_current(8);
    let mut app = LiveChartApp::new(rx, &config(100)).unwrap();

    let producer = std::thread::spawn(move || {
        for i in 1..=100 {
            sink.send_sample(i as f64 * 1e-9).unwrap();
        }
    });

    let mut applied = 0;
    while applied < 100 {
        applied += app.drain_commands().applied;
        std::thread::yield_now();
    }
    producer.join().unwrap();

    let expected: Vec<f64> = (1..=100).map(|i| i as f64 * 1e-9).collect();
    assert_eq!(app.chart().buffer().as_slice(), expected.as_slice());
}

#[test]
fn try_send_reports_full_channel() {
    let (sink, rx) = channel_current(1);
    sink.try_send_sample(1.0).unwrap();
    match sink.try_send_sample(2.0) {
        Err(TrySendError::Full(ChartCommand::Sample(v))) => assert_eq!(v, 2.0),
        other => panic!("expected Full, got {other:?}"),
    }
    drop(rx);
    assert!(matches!(
        sink.try_send_sample(3.0),
        Err(TrySendError::Disconnected(_))
    ));
}

#[test]
fn invalid_config_is_rejected_by_app() {
    let (_sink, rx) = channel_current(1);
    assert!(LiveChartApp::new(rx, &config(0)).is_err());
}
