#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use account_vault::config::VaultSettings;
use actix_http::StatusCode;
use actix_web::{
    dev::ServerHandle,
    web::{self, Bytes, Data},
    App, HttpRequest, HttpResponse, HttpServer,
};

pub const API_KEY: &str = "test-api-key";

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub accept: Option<String>,
    pub content_type: Option<String>,
    pub api_key: Option<String>,
    pub body: serde_json::Value,
}

struct StubState {
    status: u16,
    body: String,
    delay: Duration,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Vault double answering every request with a canned status and body.
pub struct StubVault {
    pub settings: VaultSettings,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: ServerHandle,
}

impl StubVault {
    pub async fn start(status: u16, body: &str) -> StubVault {
        Self::start_delayed(status, body, Duration::ZERO).await
    }

    /// Like [`StubVault::start`], but every answer is held back for `delay`.
    pub async fn start_delayed(status: u16, body: &str, delay: Duration) -> StubVault {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = Data::new(StubState {
            status,
            body: body.to_string(),
            delay,
            requests: requests.clone(),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .default_service(web::to(record))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("failed to bind stub vault");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        StubVault {
            settings: VaultSettings {
                url: format!("http://{}/documents", addr),
                search_url: format!("http://{}/documents/search", addr),
                api_key: API_KEY.to_string(),
                timeout_sec: 10,
            },
            requests,
            handle,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn record(req: HttpRequest, body: Bytes, state: Data<StubState>) -> HttpResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        accept: header(&req, "accept"),
        content_type: header(&req, "content-type"),
        api_key: header(&req, "x-api-key"),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    });

    if !state.delay.is_zero() {
        actix_web::rt::time::sleep(state.delay).await;
    }

    let status = StatusCode::from_u16(state.status).unwrap();
    HttpResponse::build(status)
        .content_type("application/json")
        .body(state.body.clone())
}
