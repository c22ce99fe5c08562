//! Canned ResRobot responses for client tests.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::IntoResponse;

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<String>>>,
}

async fn respond(State(canned): State<Canned>, uri: Uri) -> impl IntoResponse {
    canned.requests.lock().unwrap().push(uri.to_string());
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
}

/// A local server answering every request with the same status and body.
pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub async fn start(status: u16, body: &str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let canned = Canned {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(respond).with_state(canned);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Path and query of the most recent request, e.g.
    /// `/trip?accessId=...&originId=...`.
    pub fn last_request(&self) -> String {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}
