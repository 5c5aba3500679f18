//! Deterministic localhost double of the Open-Meteo forecast API.
//!
//! The server is started at most once per process, on its own thread with
//! its own runtime, and bound to an ephemeral port so parallel test
//! binaries never collide. Suites point their clients at [`base_url`]
//! instead of the live service and get the same observable contract:
//! parameter validation with the API's error body shape, and forecast
//! datasets whose array lengths follow the requested parameters.

mod forecast;

pub use forecast::{DAILY_VARIABLES, HOURLY_VARIABLES};

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use lazy_static::lazy_static;
use log::debug;
use serde_json::{json, Value};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{mpsc, Mutex, Once};
use std::thread;
use std::time::Duration;
use tokio::runtime::Runtime;

static INITIALIZE_EMULATOR: Once = Once::new();

lazy_static! {
    static ref EMULATOR_ADDR: Mutex<Option<SocketAddr>> = Mutex::new(None);
}

/// Base URL of the process-wide emulator instance, e.g.
/// `http://127.0.0.1:49213`. The first call starts the server; it then
/// lives for the rest of the process.
pub fn base_url() -> String {
    format!("http://{}", address())
}

/// Full URL of the forecast route.
pub fn forecast_url() -> String {
    format!("{}/v1/forecast", base_url())
}

/// Full URL of the artificial-delay route; it answers 200 after `ms`
/// milliseconds.
pub fn slow_url(ms: u64) -> String {
    format!("{}/slow?ms={}", base_url(), ms)
}

fn address() -> SocketAddr {
    start_once();

    EMULATOR_ADDR
        .lock()
        .unwrap()
        .expect("the emulator address is set during startup")
}

fn start_once() {
    INITIALIZE_EMULATOR.call_once(|| {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            Runtime::new().unwrap().block_on(async move {
                let addr = SocketAddr::from(([127, 0, 0, 1], 0));

                let server = Server::bind(&addr).serve(make_service_fn(|_| async {
                    Ok::<_, Infallible>(service_fn(handle_request))
                }));

                sender.send(server.local_addr()).unwrap();

                if let Err(e) = server.await {
                    eprintln!("Forecast emulator error: {}", e);
                }
            });
        });

        *EMULATOR_ADDR.lock().unwrap() = Some(
            receiver
                .recv()
                .expect("the emulator failed to bind a port"),
        );
    });
}

async fn handle_request(request: Request<Body>) -> Result<Response<Body>, Infallible> {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(String::from);

    debug!("emulator: {} {}", method, request.uri());

    let (status, body) = match (method, path.as_str()) {
        (Method::GET, "/v1/forecast") => forecast::respond(query.as_deref()),
        (Method::GET, "/slow") => {
            let ms = delay_from_query(query.as_deref());
            tokio::time::sleep(Duration::from_millis(ms)).await;
            (200, json!({ "status": "ok", "delayed_ms": ms }))
        }
        _ => (404, error_body("Not Found")),
    };

    Ok(json_response(status, &body))
}

fn delay_from_query(query: Option<&str>) -> u64 {
    parse_query(query.unwrap_or(""))
        .into_iter()
        .find(|(key, _)| key == "ms")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(2000)
}

pub(crate) fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

pub(crate) fn error_body<S: AsRef<str>>(reason: S) -> Value {
    json!({ "error": true, "reason": reason.as_ref() })
}

fn json_response(status: u16, body: &Value) -> Response<Body> {
    Response::builder()
        .status(StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header("content-type", "application/json; charset=utf-8")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_keep_their_order() {
        let pairs = parse_query("latitude=59.94&longitude=30.31&hourly=a,b");

        assert_eq!(
            pairs,
            vec![
                ("latitude".to_string(), "59.94".to_string()),
                ("longitude".to_string(), "30.31".to_string()),
                ("hourly".to_string(), "a,b".to_string()),
            ]
        );
    }

    #[test]
    fn a_bare_key_maps_to_an_empty_value() {
        assert_eq!(
            parse_query("latitude"),
            vec![("latitude".to_string(), String::new())]
        );
        assert!(parse_query("").is_empty());
    }
}
