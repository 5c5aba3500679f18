use crate::common::{array_len, forecast_request, setup, LIVE_URL};
use meteoprobe::{ApiRequest, ApiResponse, Probe, QueryParams};
use openmeteo_forecast_api_client::{ForecastApiClientBuilder, ForecastParams};
use serde_json::Value;

fn functional_params() -> Vec<QueryParams> {
    vec![
        QueryParams::new()
            .with("latitude", 59.94)
            .with("longitude", 30.31)
            .with("hourly", "temperature_2m"),
        QueryParams::new()
            .with("latitude", 59.94)
            .with("longitude", 30.31)
            .with("hourly", vec!["temperature_2m", "relativehumidity_2m"]),
        QueryParams::new()
            .with("latitude", 59.94)
            .with("longitude", 30.31)
            .with("hourly", "temperature_2m")
            .with("forecast_days", 5),
        QueryParams::new()
            .with("latitude", 59.94)
            .with("longitude", 30.31)
            .with("daily", "temperature_2m_max")
            .with("timezone", "GMT")
            .with("forecast_days", 5),
    ]
}

fn perform_all(requests: &[ApiRequest]) -> Vec<ApiResponse> {
    let probe = Probe::new();

    requests
        .iter()
        .map(|request| probe.perform(request).expect("unexpected transport failure"))
        .collect()
}

fn assert_functional_properties(responses: &[ApiResponse]) {
    assert!(
        responses.iter().all(|res| !res.timeout),
        "Some of the requests timed out (try running the tests again)"
    );
    assert!(
        responses.iter().all(|res| res.status == Some(200)),
        "Some of the requests did not finish with OK"
    );

    let contents: Vec<&Value> = responses
        .iter()
        .map(|res| res.content.as_ref().expect("an OK response carries a body"))
        .collect();

    assert_eq!(
        array_len(contents[0], "hourly", "time"),
        array_len(contents[0], "hourly", "temperature_2m"),
        "Data and time lists should have the same length"
    );
    assert_eq!(
        array_len(contents[1], "hourly", "temperature_2m"),
        array_len(contents[1], "hourly", "relativehumidity_2m"),
        "Data lists should have the same length"
    );
    assert_eq!(
        array_len(contents[2], "hourly", "temperature_2m"),
        120,
        "Hourly data list length should be the amount of days times 24"
    );
    assert_eq!(
        array_len(contents[3], "daily", "temperature_2m_max"),
        5,
        "Daily data list length should be the amount of days"
    );
}

#[test]
fn test_functional() {
    setup();

    let requests: Vec<ApiRequest> = functional_params()
        .into_iter()
        .map(forecast_request)
        .collect();

    assert_functional_properties(&perform_all(&requests));
}

#[test]
fn test_functional_typed_client() {
    setup();

    let client = ForecastApiClientBuilder::new()
        .with_domain_name(meteoprobe::emulator::base_url())
        .build();
    let params = ForecastParams::new(59.94, 30.31)
        .with_hourly("temperature_2m")
        .with_hourly("relativehumidity_2m")
        .with_forecast_days(5);

    let forecast = client.get_forecast(&params).expect("forecast request failed");
    let hourly = forecast.hourly.expect("hourly series requested");

    assert_eq!(hourly.time.len(), 120);
    assert_eq!(hourly.temperature_2m.expect("requested").len(), 120);
    assert_eq!(hourly.relativehumidity_2m.expect("requested").len(), 120);
}

// Requires network access to api.open-meteo.com.
#[test]
#[ignore]
fn test_functional_live() {
    setup();

    let requests: Vec<ApiRequest> = functional_params()
        .into_iter()
        .map(|params| ApiRequest::new(LIVE_URL, params))
        .collect();

    assert_functional_properties(&perform_all(&requests));
}
