use crate::common::{forecast_request, setup, LIVE_URL};
use meteoprobe::{ApiRequest, ApiResponse, Probe, QueryParams};
use serde_json::Value;

fn negative_params() -> Vec<QueryParams> {
    vec![
        // invalid coordinates
        QueryParams::new().with("latitude", 96).with("longitude", 420),
        // invalid weather variable value
        QueryParams::new()
            .with("latitude", 59.94)
            .with("longitude", 30.31)
            .with("hourly", "kek"),
        // no parameters at all
        QueryParams::new(),
    ]
}

fn perform_all(requests: &[ApiRequest]) -> Vec<ApiResponse> {
    let probe = Probe::new();

    requests
        .iter()
        .map(|request| probe.perform(request).expect("unexpected transport failure"))
        .collect()
}

fn reason_of(response: &ApiResponse) -> String {
    response
        .content
        .as_ref()
        .and_then(|content: &Value| content["reason"].as_str())
        .unwrap_or_default()
        .to_string()
}

#[test]
fn test_negative() {
    setup();

    let requests: Vec<ApiRequest> = negative_params()
        .into_iter()
        .map(forecast_request)
        .collect();

    let responses = perform_all(&requests);

    assert!(
        responses.iter().all(|res| !res.timeout),
        "Some of the requests timed out (try running the tests again)"
    );
    assert!(
        responses.iter().all(|res| res.status == Some(400)),
        "Some of the requests did not finish with Bad Request"
    );

    assert!(reason_of(&responses[0]).contains("Latitude"));
    assert!(reason_of(&responses[1]).contains("kek"));
    assert!(reason_of(&responses[2]).contains("required"));
}

#[test]
fn test_unknown_parameter_keys_are_not_rejected() {
    setup();

    // The live API ignores parameter keys it does not know instead of
    // answering 400; the emulator pins that lenient behavior.
    let request = forecast_request(
        QueryParams::new()
            .with("latitude", 59.94)
            .with("longitude", 30.31)
            .with("kek", "temperature_2m"),
    );

    let response = Probe::new().perform(&request).expect("transport failure");

    assert!(!response.timeout);
    assert_eq!(response.status, Some(200));
}

// Requires network access to api.open-meteo.com. The live API has not
// always answered every one of these with a uniform 400, so this twin of
// test_negative stays opt-in and documents the inconsistency instead of
// resolving it.
#[test]
#[ignore]
fn test_negative_live() {
    setup();

    let requests: Vec<ApiRequest> = negative_params()
        .into_iter()
        .map(|params| ApiRequest::new(LIVE_URL, params))
        .collect();

    let responses = perform_all(&requests);

    assert!(
        responses.iter().all(|res| !res.timeout),
        "Some of the requests timed out (try running the tests again)"
    );
    assert!(
        responses.iter().all(|res| res.status == Some(400)),
        "Some of the requests did not finish with Bad Request"
    );
}
