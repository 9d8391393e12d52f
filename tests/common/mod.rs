//! Shared utilities for integration tests.

use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use latency_prober::config::{
    EndpointConfig, ObservabilityConfig, ProbeConfig, ProberConfig, ReportConfig,
};

pub const API_VERSION: &str = "2024-02-01";
pub const APIM_KEY: &str = "sub-key";

/// Mount a chat-completions deployment on `server` that answers with
/// `status` after `delay`.
pub async fn mount_deployment(server: &MockServer, deployment: &str, delay: Duration, status: u16) {
    Mock::given(method("POST"))
        .and(path(format!("/openai/deployments/{}/chat/completions", deployment)))
        .and(query_param("api-version", API_VERSION))
        .and(header("api-key", format!("key-{}", deployment).as_str()))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "model": deployment,
            "messages": [
                {"role": "system", "content": ""},
                {"role": "user", "content": "Once upon a time"}
            ],
            "max_tokens": 10
        })))
        .respond_with(
            ResponseTemplate::new(status)
                .set_delay(delay)
                .set_body_json(json!({"choices": [{"message": {"content": "there was"}}]})),
        )
        .mount(server)
        .await;
}

/// Mount the APIM helper API answering with `status`.
pub async fn mount_apim(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/helpers/set-preferred-backends"))
        .and(header("ocp-apim-subscription-key", APIM_KEY))
        .respond_with(ResponseTemplate::new(status).set_body_string("updated"))
        .mount(server)
        .await;
}

/// Like `mount_apim`, but records the arrival time of every report.
#[allow(dead_code)]
pub async fn mount_apim_recording(server: &MockServer, status: u16) -> Arc<Mutex<Vec<Instant>>> {
    let arrivals = Arc::new(Mutex::new(Vec::new()));
    let recorded = arrivals.clone();
    Mock::given(method("POST"))
        .and(path("/helpers/set-preferred-backends"))
        .and(header("ocp-apim-subscription-key", APIM_KEY))
        .respond_with(move |_: &Request| {
            recorded.lock().unwrap().push(Instant::now());
            ResponseTemplate::new(status).set_body_string("updated")
        })
        .mount(server)
        .await;
    arrivals
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl CapturedLogs {
    /// Route this thread's events into the sink until the guard drops.
    /// Needs the current-thread runtime so spawned tasks share the guard.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines_with(&self, needle: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|l| l.contains(needle))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Endpoint config pointing at a deployment on `server`.
pub fn endpoint(server: &MockServer, deployment: &str, backend_id: &str) -> EndpointConfig {
    EndpointConfig {
        endpoint: server.address().to_string(),
        deployment_name: deployment.to_string(),
        api_key: format!("key-{}", deployment),
        backend_id: backend_id.to_string(),
    }
}

/// Plain-HTTP config with a short probe timeout.
pub fn config(endpoints: Vec<EndpointConfig>, apim: &MockServer) -> ProberConfig {
    ProberConfig {
        endpoints,
        aoai_api_version: API_VERSION.to_string(),
        apim_url: apim.uri(),
        apim_api_key: APIM_KEY.to_string(),
        sleep_timeout: 1,
        probe: ProbeConfig {
            timeout_secs: 1,
            max_tokens: 10,
            scheme: "http".to_string(),
        },
        report: ReportConfig { timeout_secs: 5 },
        observability: ObservabilityConfig::default(),
    }
}

/// Bodies of all set-preferred-backends calls received by `apim`.
#[allow(dead_code)]
pub async fn reported_lists(apim: &MockServer) -> Vec<Vec<String>> {
    apim.received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == "/helpers/set-preferred-backends")
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
            body["preferredBackends"]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_str().unwrap().to_string())
                .collect()
        })
        .collect()
}
