//! Shared fixtures: a stub benchmark server and recording UI fakes.

#![allow(dead_code)]

use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use bench_client::chart::{ChartBackend, ChartConfig};
use bench_client::model::BenchmarkRequest;
use bench_client::render::{SampleListView, StatsView};
use bench_client::ui_state::UiSurface;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const ENDPOINT: &str = "/api/benchmark";

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Result body shaped like the reference server's, derived from the request.
pub fn result_body(request: &BenchmarkRequest, samples: &[&str]) -> Value {
    let steps = 5u64;
    let labels: Vec<u64> = (1..=steps).map(|i| (request.n / steps) * i).collect();
    let iterative: Vec<f64> = (1..=steps).map(|i| i as f64 * 0.1).collect();
    let recursive: Vec<f64> = (1..=steps).map(|i| i as f64 * 0.25).collect();
    json!({
        "iterativeTime": "0.50 ms",
        "recursiveTime": "1.25 ms",
        "iterativeRaw": 0.5,
        "recursiveRaw": 1.25,
        "graphLabels": labels,
        "graphIterative": iterative,
        "graphRecursive": recursive,
        "samples": samples,
    })
}

/// Stub that answers with a valid result and records each request.
pub fn benchmark_router(samples: &'static [&'static str], seen: Arc<Mutex<Vec<(Value, HeaderMap)>>>) -> Router {
    Router::new().route(
        ENDPOINT,
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                let request: BenchmarkRequest = serde_json::from_value(body.clone()).unwrap();
                seen.lock().unwrap().push((body, headers));
                Json(result_body(&request, samples))
            }
        }),
    )
}

/// Stub that always fails with `status`.
pub fn status_router(status: StatusCode) -> Router {
    Router::new().route(ENDPOINT, post(move || async move { status }))
}

/// Stub that answers 200 with a body that is not a benchmark result.
pub fn malformed_router() -> Router {
    Router::new().route(
        ENDPOINT,
        post(|| async { Json(json!({ "iterativeTime": "1 ms", "graphLabels": "oops" })) }),
    )
}

#[derive(Default)]
pub struct RecordingSurface {
    pub notifications: Vec<String>,
    pub loading: bool,
    pub results: bool,
    pub stats: Option<StatsView>,
    pub samples: Option<SampleListView>,
    pub stats_writes: usize,
}

impl UiSurface for RecordingSurface {
    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results = visible;
    }

    fn show_stats(&mut self, stats: &StatsView) {
        self.stats = Some(stats.clone());
        self.stats_writes += 1;
    }

    fn show_samples(&mut self, samples: &SampleListView) {
        self.samples = Some(samples.clone());
    }
}

/// Chart widget table; `live` holds every created and not yet destroyed chart.
#[derive(Default)]
pub struct RecordingCharts {
    next_id: u64,
    pub live: Vec<(u64, ChartConfig)>,
    pub destroyed: usize,
}

impl ChartBackend for RecordingCharts {
    type Handle = u64;

    fn create(&mut self, config: &ChartConfig) -> u64 {
        self.next_id += 1;
        self.live.push((self.next_id, config.clone()));
        self.next_id
    }

    fn destroy(&mut self, handle: u64) {
        let before = self.live.len();
        self.live.retain(|(id, _)| *id != handle);
        assert_eq!(before, self.live.len() + 1, "unknown chart handle {}", handle);
        self.destroyed += 1;
    }
}
