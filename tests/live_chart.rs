use currentplot::{AxisBounds, ConfigError, LiveChart, LiveChartConfig, SampleError};

fn small_config(capacity: usize) -> LiveChartConfig {
    LiveChartConfig {
        capacity,
        ..LiveChartConfig::default()
    }
}

#[test]
fn fresh_chart_shows_initial_bounds() {
    let chart = LiveChart::new(&LiveChartConfig::default()).unwrap();
    assert_eq!(chart.y_bounds(), AxisBounds::new(-1e-9, 1e-3));
    assert_eq!(chart.x_bounds(), AxisBounds::new(0.0, 299.0));
    assert_eq!(chart.buffer().len(), 300);
    assert_eq!(chart.title(), "Real Time Data");
}

#[test]
fn positive_sample_sets_upper_bound() {
    let mut chart = LiveChart::new(&LiveChartConfig::default()).unwrap();
    let frame = chart.on_new_sample(3e-6).unwrap();
    assert_eq!(frame.y_bounds, AxisBounds::new(-1e-9, 3e-6));
    assert_eq!(frame.samples.len(), 300);
    assert_eq!(frame.samples[299], 3e-6);
}

#[test]
fn upper_bound_shrinks_when_peak_is_evicted() {
    let mut chart = LiveChart::new(&small_config(3)).unwrap();
    chart.on_new_sample(5e-6).unwrap();
    chart.on_new_sample(1e-6).unwrap();
    chart.on_new_sample(2e-6).unwrap();
    assert_eq!(chart.y_bounds().max, 5e-6);
    chart.on_new_sample(1e-6).unwrap();
    assert_eq!(chart.y_bounds().max, 2e-6);
}

#[test]
fn samples_below_floor_hold_minimum_range() {
    let mut chart = LiveChart::new(&small_config(2)).unwrap();
    chart.on_new_sample(-5e-9).unwrap();
    let frame = chart.on_new_sample(-3e-9).unwrap();
    assert_eq!(frame.y_bounds, AxisBounds::new(-1e-9, 0.0));
    assert_eq!(frame.y_bounds.span(), 1e-9);
}

#[test]
fn lower_bound_is_always_the_floor() {
    let mut chart = LiveChart::new(&small_config(4)).unwrap();
    for v in [-2e-3, 4e-6, -7e-9, 1.0] {
        let frame = chart.on_new_sample(v).unwrap();
        assert_eq!(frame.y_bounds.min, -1e-9);
    }
}

#[test]
fn auto_fit_margin_lifts_upper_bound() {
    let cfg = LiveChartConfig {
        capacity: 2,
        auto_fit_margin: 0.5,
        ..LiveChartConfig::default()
    };
    let mut chart = LiveChart::new(&cfg).unwrap();
    chart.on_new_sample(0.0).unwrap();
    let frame = chart.on_new_sample(2e-6).unwrap();
    assert!((frame.y_bounds.max - 3e-6).abs() < 1e-18);
}

#[test]
fn non_finite_samples_are_rejected_without_side_effects() {
    let mut chart = LiveChart::new(&small_config(3)).unwrap();
    chart.on_new_sample(1e-6).unwrap();
    let before_buffer = chart.buffer().clone();
    let before_bounds = chart.y_bounds();

    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = chart.on_new_sample(bad).unwrap_err();
        assert!(matches!(err, SampleError::NonFinite(_)));
    }
    assert_eq!(chart.buffer(), &before_buffer);
    assert_eq!(chart.y_bounds(), before_bounds);
}

#[test]
fn axis_labels_use_current_units() {
    assert_eq!(LiveChart::format_axis_label(3.2e-9), "3.2nA");
    assert_eq!(LiveChart::format_axis_label(0.0), "0.0pA");
}

#[test]
fn title_can_be_changed() {
    let mut chart = LiveChart::new(&LiveChartConfig::default()).unwrap();
    chart.set_title("Channel 2");
    assert_eq!(chart.title(), "Channel 2");
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    assert!(matches!(
        LiveChart::new(&small_config(0)),
        Err(ConfigError::ZeroCapacity)
    ));
    let zero_range = LiveChartConfig {
        floor: 0.0,
        range_basis: 0.0,
        ..LiveChartConfig::default()
    };
    assert!(matches!(
        LiveChart::new(&zero_range),
        Err(ConfigError::ZeroMinimumRange { .. })
    ));
}
