//! End-to-end detection flow against an in-process sampling service.
//!
//! The stub speaks the same wire contract as the real backend: it takes the
//! data URI payload with fractional coordinates, clamps them into bounds,
//! and answers with an RGB triple. Instead of decoding the payload it reads
//! from a fixed four-quadrant test card.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use huevision_core::{DetectionSession, Dimensions, HttpPixelSampler, ImagePayload, TapPoint};

/// Side length of the stub's square test card.
const CARD_SIZE: i64 = 800;

#[derive(Debug, Deserialize)]
struct DetectBody {
    image: String,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct PixelBody {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Clone)]
struct StubState {
    fail: Arc<AtomicBool>,
}

async fn detect_color(
    State(state): State<StubState>,
    Json(body): Json<DetectBody>,
) -> Result<Json<PixelBody>, StatusCode> {
    if state.fail.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    if !body.image.starts_with("data:image/") {
        return Err(StatusCode::BAD_REQUEST);
    }

    // Same truncate-and-clamp the real backend applies before reading.
    let x = (body.x as i64).clamp(0, CARD_SIZE - 1);
    let y = (body.y as i64).clamp(0, CARD_SIZE - 1);

    let (r, g, b) = match (x < CARD_SIZE / 2, y < CARD_SIZE / 2) {
        (true, true) => (255, 0, 0),       // top-left: red
        (false, true) => (0, 255, 0),      // top-right: green
        (true, false) => (0, 0, 255),      // bottom-left: blue
        (false, false) => (255, 255, 255), // bottom-right: white
    };

    Ok(Json(PixelBody { r, g, b }))
}

/// Spawn the stub on an ephemeral port; returns its detect endpoint and the
/// failure toggle.
async fn spawn_stub() -> (String, Arc<AtomicBool>) {
    let fail = Arc::new(AtomicBool::new(false));
    let app = Router::new()
        .route("/detect-color", post(detect_color))
        .with_state(StubState { fail: fail.clone() });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/detect-color", addr), fail)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

fn ready_session(endpoint: &str) -> DetectionSession {
    let sampler = HttpPixelSampler::new(reqwest::Client::new(), endpoint);
    let mut session = DetectionSession::new(Arc::new(sampler));

    session
        .load_image(
            ImagePayload::from_base64_jpeg("dGVzdGNhcmQ="),
            Dimensions::new(800, 800),
        )
        .unwrap();
    session.set_displayed(Dimensions::new(200, 200)).unwrap();

    session
}

#[tokio::test]
async fn test_detect_flow_over_http() {
    init_tracing();
    let (endpoint, _fail) = spawn_stub().await;
    let mut session = ready_session(&endpoint);

    // (50, 100) in the displayed box maps to (200, 400): bottom-left, blue.
    let result = session.detect(TapPoint::new(50.0, 100.0)).await.unwrap();
    assert_eq!(result.name, "Blue");
    assert_eq!(result.to_string(), "Blue (RGB: 0, 0, 255)");

    // (150, 150) maps to (600, 600): bottom-right, white.
    let result = session.detect(TapPoint::new(150.0, 150.0)).await.unwrap();
    assert_eq!(result.name, "White");

    assert_eq!(
        session.history().entries(),
        ["White (RGB: 255, 255, 255)", "Blue (RGB: 0, 0, 255)"]
    );
}

#[tokio::test]
async fn test_out_of_bounds_tap_is_clamped_by_the_service() {
    let (endpoint, _fail) = spawn_stub().await;
    let mut session = ready_session(&endpoint);

    // (250, 10) maps to (1000, 40), past the right edge; the service clamps
    // x to the last column, which is in the green quadrant.
    let result = session.detect(TapPoint::new(250.0, 10.0)).await.unwrap();
    assert_eq!(result.name, "Green");
}

#[tokio::test]
async fn test_service_failure_is_upstream_and_preserves_history() {
    init_tracing();
    let (endpoint, fail) = spawn_stub().await;
    let mut session = ready_session(&endpoint);

    session.detect(TapPoint::new(10.0, 10.0)).await.unwrap();
    assert_eq!(session.history().len(), 1);

    fail.store(true, Ordering::SeqCst);
    let err = session.detect(TapPoint::new(10.0, 10.0)).await.unwrap_err();
    assert!(err.is_upstream());

    // The failed lookup changed nothing.
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.last_detection().map(|r| r.name), Some("Red"));

    // And the session keeps working once the service recovers.
    fail.store(false, Ordering::SeqCst);
    session.detect(TapPoint::new(10.0, 10.0)).await.unwrap();
    assert_eq!(session.history().len(), 2);
}

#[tokio::test]
async fn test_unreachable_service_is_upstream() {
    // Nothing listens on port 9; the client error is a normal-operation
    // failure, not a wiring bug.
    let mut session = ready_session("http://127.0.0.1:9/detect-color");

    let err = session.detect(TapPoint::new(10.0, 10.0)).await.unwrap_err();
    assert!(err.is_upstream());
    assert!(session.history().is_empty());
}
