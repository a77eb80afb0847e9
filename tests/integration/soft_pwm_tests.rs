//! Integration tests: SoftPwm waveform shape on a shared timeline.

use thermofan::app::ports::WaveformDriver;
use thermofan::drivers::soft_pwm::SoftPwm;

use crate::mock_hw::{Bench, Step};

fn pwm(bench: &Bench) -> SoftPwm<crate::mock_hw::MockPin, crate::mock_hw::MockDelay> {
    SoftPwm::new(bench.pin(), bench.delay(), 20)
}

#[test]
fn fifty_percent_is_ten_high_ten_low() {
    let bench = Bench::new();
    pwm(&bench).drive(50).unwrap();
    assert_eq!(
        bench.steps(),
        [Step::High, Step::Wait(10), Step::Low, Step::Wait(10)]
    );
    assert_eq!(bench.now_ms(), 20);
}

#[test]
fn zero_percent_is_low_only() {
    let bench = Bench::new();
    pwm(&bench).drive(0).unwrap();
    assert_eq!(bench.steps(), [Step::Low, Step::Wait(20)]);
    assert_eq!(bench.high_writes(), 0);
}

#[test]
fn hundred_percent_is_high_only() {
    let bench = Bench::new();
    pwm(&bench).drive(100).unwrap();
    assert_eq!(bench.steps(), [Step::High, Step::Wait(20)]);
    assert_eq!(bench.high_low_ms(), (20, 0));
}

#[test]
fn each_call_is_exactly_one_period() {
    let bench = Bench::new();
    let mut p = pwm(&bench);
    for duty in [0, 25, 50, 75, 100] {
        let before = bench.now_ms();
        p.drive(duty).unwrap();
        assert_eq!(bench.now_ms() - before, 20, "duty {duty}");
    }
}

#[test]
fn repeated_half_duty_sustains_ratio() {
    let bench = Bench::new();
    let mut p = pwm(&bench);
    for _ in 0..50 {
        p.drive(50).unwrap();
    }
    assert_eq!(bench.high_low_ms(), (500, 500));
    assert_eq!(bench.high_writes(), 50);
}
