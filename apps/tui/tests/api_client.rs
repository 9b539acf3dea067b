//! Integration tests for the API client against a real local HTTP server.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use tiny_http::{Response, Server, StatusCode};

use agro_dash::api::models::PredictionInput;
use agro_dash::api::{ApiClient, ApiError};

/// Start a server that answers exactly one request with `handler`, then
/// shuts down. Returns the base URL to point the client at.
fn serve_one(
    handler: impl FnOnce(tiny_http::Request) + Send + 'static,
) -> (String, JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base_url = format!("http://{addr}");

    let handle = thread::spawn(move || {
        let request = server.recv().unwrap();
        handler(request);
    });

    (base_url, handle)
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Duration::from_secs(2))
}

#[test]
fn base_url_is_normalized_without_a_trailing_slash() {
    let client = client("http://127.0.0.1:8000/");
    assert_eq!(client.base_url(), "http://127.0.0.1:8000");
}

#[test]
fn yield_trend_sends_query_params_and_decodes_renamed_fields() {
    let (base_url, handle) = serve_one(|request| {
        let url = request.url().to_string();
        assert!(url.starts_with("/api/yield-trend?"), "url was {url}");
        assert!(url.contains("region=Punjab"));
        assert!(url.contains("crop=Wheat"));

        let body = r#"[
            {"Year": 2019, "Yield (tonnes/ha)": 2.4},
            {"Year": 2020, "Yield (tonnes/ha)": 2.9}
        ]"#;
        request.respond(Response::from_string(body)).unwrap();
    });

    let points = client(&base_url)
        .yield_trend("Punjab", Some("Wheat"))
        .unwrap();
    handle.join().unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].year, 2019);
    assert!((points[1].yield_tonnes_ha - 2.9).abs() < f64::EPSILON);
}

#[test]
fn multi_word_query_values_are_percent_encoded() {
    let (base_url, handle) = serve_one(|request| {
        let url = request.url().to_string();
        assert!(
            url.contains("region=Trans%20Gangetic%20Plains"),
            "url was {url}"
        );
        request.respond(Response::from_string("[]")).unwrap();
    });

    let points = client(&base_url)
        .yield_trend("Trans Gangetic Plains", None)
        .unwrap();
    handle.join().unwrap();
    assert!(points.is_empty());
}

#[test]
fn yield_trend_without_crop_omits_the_param() {
    let (base_url, handle) = serve_one(|request| {
        let url = request.url().to_string();
        assert!(!url.contains("crop="), "url was {url}");
        request.respond(Response::from_string("[]")).unwrap();
    });

    let points = client(&base_url).yield_trend("Punjab", None).unwrap();
    handle.join().unwrap();
    assert!(points.is_empty());
}

#[test]
fn insights_error_body_with_status_200_is_a_domain_error() {
    let (base_url, handle) = serve_one(|request| {
        let body = r#"{"error": "No data available for Unknown Zone"}"#;
        request.respond(Response::from_string(body)).unwrap();
    });

    let error = client(&base_url)
        .regional_insights("Unknown Zone", None)
        .unwrap_err();
    handle.join().unwrap();

    assert!(matches!(error, ApiError::Domain(_)));
    assert_eq!(error.to_string(), "No data available for Unknown Zone");
}

#[test]
fn error_status_with_error_body_is_a_domain_error() {
    let (base_url, handle) = serve_one(|request| {
        let body = r#"{"error": "Insufficient data to make prediction"}"#;
        let response = Response::from_string(body).with_status_code(StatusCode(400));
        request.respond(response).unwrap();
    });

    let input = PredictionInput {
        region: "Punjab".to_string(),
        crop: "Wheat".to_string(),
        rainfall: 600.0,
        irrigation: 80.0,
        fertilizer: 120.0,
    };
    let error = client(&base_url).predict_yield(&input).unwrap_err();
    handle.join().unwrap();

    assert!(matches!(error, ApiError::Domain(_)));
    assert_eq!(error.to_string(), "Insufficient data to make prediction");
}

#[test]
fn predict_posts_the_inputs_as_json() {
    let (base_url, handle) = serve_one(|mut request| {
        let mut body = String::new();
        request.as_reader().read_to_string(&mut body).unwrap();
        let sent: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(sent["region"], "Punjab");
        assert_eq!(sent["crop"], "Wheat");
        assert_eq!(sent["rainfall"], 600.0);
        assert_eq!(sent["irrigation"], 80.0);
        assert_eq!(sent["fertilizer"], 120.0);

        let response = r#"{"predicted_yield": 3.42, "unit": "tonnes/ha"}"#;
        request.respond(Response::from_string(response)).unwrap();
    });

    let input = PredictionInput {
        region: "Punjab".to_string(),
        crop: "Wheat".to_string(),
        rainfall: 600.0,
        irrigation: 80.0,
        fertilizer: 120.0,
    };
    let prediction = client(&base_url).predict_yield(&input).unwrap();
    handle.join().unwrap();

    assert!((prediction.predicted_yield - 3.42).abs() < f64::EPSILON);
    assert_eq!(prediction.unit, "tonnes/ha");
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Port 1 is never listening.
    let error = client("http://127.0.0.1:1").regions().unwrap_err();
    assert!(matches!(error, ApiError::Transport(_)));
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let (base_url, handle) = serve_one(|request| {
        request
            .respond(Response::from_string("not json at all"))
            .unwrap();
    });

    let error = client(&base_url).crops().unwrap_err();
    handle.join().unwrap();
    assert!(matches!(error, ApiError::Decode(_)));
}
