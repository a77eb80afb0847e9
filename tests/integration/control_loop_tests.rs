//! Integration tests: ControlLoop → SoftPwm → timeline, end to end.

use thermofan::app::service::ControlLoop;
use thermofan::config::SystemConfig;
use thermofan::control::{FanTier, Phase};

use crate::mock_hw::{LineSink, MockBoard};

fn control() -> ControlLoop {
    ControlLoop::new(SystemConfig::default()).unwrap()
}

#[test]
fn warm_room_runs_half_duty_for_one_second() {
    let mut ctl = control();
    let mut hw = MockBoard::new(&[540]);
    let mut sink = LineSink::default();

    let report = ctl.cycle(&mut hw, &mut sink).unwrap();

    assert_eq!(sink.lines, ["Temp: 27.53 °C | Fan: 50%"]);
    assert_eq!(report.tier, FanTier::Half);
    assert_eq!(report.periods, 50);
    assert_eq!(hw.bench.now_ms(), 1000);
    assert_eq!(hw.bench.high_low_ms(), (500, 500));
    assert_eq!(ctl.phase(), Phase::Reporting);
}

#[test]
fn cold_sensor_keeps_fan_low() {
    let mut ctl = control();
    let mut hw = MockBoard::new(&[300]);
    let mut sink = LineSink::default();

    ctl.cycle(&mut hw, &mut sink).unwrap();

    assert_eq!(sink.lines, ["Temp: 6.44 °C | Fan: OFF"]);
    assert_eq!(hw.bench.high_writes(), 0);
    assert_eq!(hw.bench.high_low_ms(), (0, 1000));
}

#[test]
fn hot_sensor_holds_fan_high() {
    let mut ctl = control();
    let mut hw = MockBoard::new(&[700]);
    let mut sink = LineSink::default();

    ctl.cycle(&mut hw, &mut sink).unwrap();

    assert_eq!(sink.lines, ["Temp: 43.48 °C | Fan: 100%"]);
    assert_eq!(hw.bench.high_low_ms(), (1000, 0));
}

#[test]
fn disconnected_sensor_rails_are_clamped() {
    let mut ctl = control();
    let mut hw = MockBoard::new(&[0, 1023]);
    let mut sink = LineSink::default();

    let low = ctl.cycle(&mut hw, &mut sink).unwrap();
    let high = ctl.cycle(&mut hw, &mut sink).unwrap();

    assert_eq!(low.reading.clamped, 1);
    assert_eq!(low.tier, FanTier::Off);
    assert_eq!(high.reading.clamped, 1022);
    assert_eq!(high.tier, FanTier::Full);
    assert_eq!(sink.lines[0], "Temp: -77.39 °C | Fan: OFF");
    assert!(sink.lines[1].ends_with("°C | Fan: 100%"));
}

#[test]
fn tier_follows_each_fresh_sample() {
    let mut ctl = control();
    // Threshold neighbourhood: 566 ≈ 29.89 °C, 567 ≈ 29.99 °C, 568 ≈ 30.08 °C.
    let mut hw = MockBoard::new(&[511, 512, 567, 568, 511]);
    let mut sink = LineSink::default();

    let tiers: Vec<FanTier> = (0..5)
        .map(|_| ctl.cycle(&mut hw, &mut sink).unwrap().tier)
        .collect();

    assert_eq!(
        tiers,
        [
            FanTier::Off,
            FanTier::Half,
            FanTier::Half,
            FanTier::Full,
            FanTier::Off,
        ]
    );
    assert_eq!(hw.bench.now_ms(), 5000);
    assert_eq!(ctl.cycle_count(), 5);
}

#[test]
fn uneven_period_overruns_window_slightly() {
    let mut cfg = SystemConfig::default();
    cfg.pwm.period_ms = 30;
    let mut ctl = ControlLoop::new(cfg).unwrap();
    let mut hw = MockBoard::with_period(&[540], 30);
    let mut sink = LineSink::default();

    let report = ctl.cycle(&mut hw, &mut sink).unwrap();

    // Never less than the window, at most one period over.
    assert!(report.actuation_ms >= 1000);
    assert!(report.actuation_ms < 1000 + 30);
    assert_eq!(report.periods, 34);
}
