use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use scorecast_client::{PredictionApi, PredictionClient, PredictionError};
use scorecast_models::{PredictionRequest, PredictionResult};
use scorecast_services::{MatchForm, PredictorController, GENERIC_FAILURE_NOTICE};
use scorecast_store::MemoryStore;
use scorecast_ui::{RecentRow, ResultView};

#[derive(Clone, Debug, PartialEq)]
enum ViewEvent {
    Loading(bool),
    Result(String),
    Error(String),
    Prepended(String),
    Rendered(usize),
}

#[derive(Clone, Default)]
struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ResultView for RecordingView {
    fn set_loading(&mut self, active: bool) {
        self.events.lock().unwrap().push(ViewEvent::Loading(active));
    }

    fn render_result(&mut self, result: &PredictionResult) {
        self.events.lock().unwrap().push(ViewEvent::Result(format!(
            "{} vs {}",
            result.home_team, result.away_team
        )));
    }

    fn render_error(&mut self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Error(message.to_string()));
    }

    fn render_recent(&mut self, rows: Vec<RecentRow>) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Rendered(rows.len()));
    }

    fn prepend_recent(&mut self, row: RecentRow) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Prepended(row.matchup));
    }

    fn redraw_recent(&self) {}
}

fn sample_form() -> MatchForm {
    MatchForm::new(
        vec![
            "Arsenal".to_string(),
            "Chelsea".to_string(),
            "Liverpool".to_string(),
        ],
        vec!["Premier League".to_string()],
    )
    .unwrap()
}

fn filled_form() -> MatchForm {
    let mut form = sample_form();
    form.select_home(Some(0)).unwrap();
    form.select_away(Some(1)).unwrap();
    form.set_date("2026-08-30").unwrap();
    form
}

fn ok_payload() -> Value {
    json!({
        "home_team": "A",
        "away_team": "B",
        "predicted_score_home": 2.3,
        "predicted_score_away": 1.1,
        "confidence": 0.78,
        "win_probability_home": 0.60,
        "draw_probability": 0.25,
        "win_probability_away": 0.15,
        "model_version": "v1.0",
        "prediction_timestamp": "2026-08-25T10:00:00.000000",
    })
}

async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn ok_router() -> Router {
    Router::new().route(
        "/api/v1/predict",
        post(|Json(_): Json<Value>| async { Json(ok_payload()) }),
    )
}

fn failing_router() -> Router {
    Router::new().route(
        "/api/v1/predict",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    )
}

fn garbage_router() -> Router {
    Router::new().route(
        "/api/v1/predict",
        post(|| async { Json(json!({"unexpected": true})) }),
    )
}

/// Base URL of a port that was just bound and released, so connecting fails.
async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_successful_submit_renders_and_persists() {
    let base_url = spawn_stub(ok_router()).await;
    let store = MemoryStore::new();
    let view = RecordingView::default();

    let mut controller = PredictorController::new(
        PredictionClient::new(&base_url),
        store.clone(),
        view.clone(),
        filled_form(),
    );
    controller.init().unwrap();
    controller.submit().await;

    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Rendered(0),
            ViewEvent::Loading(true),
            ViewEvent::Result("A vs B".to_string()),
            ViewEvent::Prepended("A vs B".to_string()),
            ViewEvent::Loading(false),
        ]
    );

    let history = store.snapshot();
    assert_eq!(history.len(), 1);
    let entry = &history.entries()[0];
    assert_eq!(entry.result.home_team, "A");
    assert_eq!(entry.result.predicted_score_home, 2.3);
    assert_eq!(entry.result.confidence, 0.78);

    // A second submit lands on top.
    controller.submit().await;
    assert_eq!(store.snapshot().len(), 2);
}

#[tokio::test]
async fn test_request_body_matches_wire_contract() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let recorder = seen.clone();
    let app = Router::new().route(
        "/api/v1/predict",
        post(move |Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                *recorder.lock().unwrap() = Some(body);
                Json(ok_payload())
            }
        }),
    );
    let base_url = spawn_stub(app).await;

    let mut controller = PredictorController::new(
        PredictionClient::new(&base_url),
        MemoryStore::new(),
        RecordingView::default(),
        filled_form(),
    );
    controller.init().unwrap();
    controller.submit().await;

    let body = seen.lock().unwrap().clone().unwrap();
    assert_eq!(
        body,
        json!({
            "home_team": "Arsenal",
            "away_team": "Chelsea",
            "match_date": "2026-08-30",
            "league": null,
        })
    );
}

#[tokio::test]
async fn test_request_body_carries_selected_league() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let recorder = seen.clone();
    let app = Router::new().route(
        "/api/v1/predict",
        post(move |Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                *recorder.lock().unwrap() = Some(body);
                Json(ok_payload())
            }
        }),
    );
    let base_url = spawn_stub(app).await;

    let mut form = filled_form();
    form.select_league(Some(0)).unwrap();
    let mut controller = PredictorController::new(
        PredictionClient::new(&base_url),
        MemoryStore::new(),
        RecordingView::default(),
        form,
    );
    controller.init().unwrap();
    controller.submit().await;

    let body = seen.lock().unwrap().clone().unwrap();
    assert_eq!(body["league"], json!("Premier League"));
}

#[tokio::test]
async fn test_http_error_shows_generic_notice_and_stores_nothing() {
    let base_url = spawn_stub(failing_router()).await;
    let store = MemoryStore::new();
    let view = RecordingView::default();

    let mut controller = PredictorController::new(
        PredictionClient::new(&base_url),
        store.clone(),
        view.clone(),
        filled_form(),
    );
    controller.init().unwrap();
    controller.submit().await;

    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Rendered(0),
            ViewEvent::Loading(true),
            ViewEvent::Error(GENERIC_FAILURE_NOTICE.to_string()),
            ViewEvent::Loading(false),
        ]
    );
    assert!(store.snapshot().is_empty());
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_undecodable_body_shows_the_same_notice() {
    let base_url = spawn_stub(garbage_router()).await;
    let store = MemoryStore::new();
    let view = RecordingView::default();

    let mut controller = PredictorController::new(
        PredictionClient::new(&base_url),
        store.clone(),
        view.clone(),
        filled_form(),
    );
    controller.init().unwrap();
    controller.submit().await;

    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Rendered(0),
            ViewEvent::Loading(true),
            ViewEvent::Error(GENERIC_FAILURE_NOTICE.to_string()),
            ViewEvent::Loading(false),
        ]
    );
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn test_unreachable_service_shows_the_same_notice() {
    let base_url = unreachable_base_url().await;
    let store = MemoryStore::new();
    let view = RecordingView::default();

    let mut controller = PredictorController::new(
        PredictionClient::new(&base_url),
        store.clone(),
        view.clone(),
        filled_form(),
    );
    controller.init().unwrap();
    controller.submit().await;

    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Rendered(0),
            ViewEvent::Loading(true),
            ViewEvent::Error(GENERIC_FAILURE_NOTICE.to_string()),
            ViewEvent::Loading(false),
        ]
    );
    assert!(store.snapshot().is_empty());
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_client_reports_the_failure_taxonomy() {
    let request = PredictionRequest::new(
        "Arsenal".to_string(),
        "Chelsea".to_string(),
        "2026-08-30".to_string(),
    );

    let client = PredictionClient::new(spawn_stub(failing_router()).await);
    match client.predict(&request).await {
        Err(PredictionError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected a status error, got {:?}", other.map(|_| ())),
    }

    let client = PredictionClient::new(spawn_stub(garbage_router()).await);
    assert!(matches!(
        client.predict(&request).await,
        Err(PredictionError::Decode { .. })
    ));

    let client = PredictionClient::new(unreachable_base_url().await);
    assert!(matches!(
        client.predict(&request).await,
        Err(PredictionError::Transport { .. })
    ));
}
