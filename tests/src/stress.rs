use crate::common::{forecast_request, setup, LIVE_URL};
use meteoprobe::{emulator, ApiRequest, QueryParams, StressRunner};
use std::time::Duration;

fn stress_params() -> QueryParams {
    QueryParams::new()
        .with("latitude", 59.94)
        .with("longitude", 30.31)
        .with("hourly", "temperature_2m")
}

fn run_stress(url: &str, amount: usize, timeout: Duration) {
    let report = StressRunner::new(amount, timeout).run_blocking(url);

    assert!(
        report.all_completed(),
        "One of {} responses timed out after {:?}",
        amount,
        timeout
    );
}

#[test]
fn test_stress_short() {
    setup();
    run_stress(
        &forecast_request(stress_params()).full_url(),
        10,
        Duration::from_millis(500),
    );
}

#[test]
fn test_stress_moderate() {
    setup();
    run_stress(
        &forecast_request(stress_params()).full_url(),
        100,
        Duration::from_secs(1),
    );
}

#[test]
fn test_stress_long() {
    setup();
    run_stress(
        &forecast_request(stress_params()).full_url(),
        1000,
        Duration::from_secs(5),
    );
}

#[test]
fn test_stress_timeout_markers() {
    setup();

    // Every request is slower than its timeout, so every slot must carry
    // the absent marker instead of a body.
    let report = StressRunner::new(5, Duration::from_millis(100))
        .run_blocking(&emulator::slow_url(1500));

    assert_eq!(report.total(), 5);
    assert_eq!(report.absent(), 5);
    assert!(!report.all_completed());
}

// Requires network access to api.open-meteo.com.
#[test]
#[ignore]
fn test_stress_live() {
    setup();

    let url = ApiRequest::new(LIVE_URL, stress_params()).full_url();

    run_stress(&url, 10, Duration::from_millis(500));
    run_stress(&url, 100, Duration::from_secs(1));
    run_stress(&url, 1000, Duration::from_secs(5));
}
