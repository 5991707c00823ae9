//! Shared fixtures: an axum fake of the service bus endpoint

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use contentservice_api_grpc::{GrpcServer, GrpcServerConfig, GrpcServerHandle};
use contentservice_infra_http::{HttpServiceBusCaller, ServiceBusConfig};
use contentservice_sdk::{ClientConfig, ContentServiceClient, PutRequest};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const BOM: &[u8] = b"\xEF\xBB\xBF";

pub const STORED_BODY: &str = r#"{"jsonrpc":"2.0","result":{"contractorid":72494,"releasedate":"2015-08-06T15:09:30","scandate":"2017-03-09T10:33:09","imagetype":1,"imagewidth":100,"imageheight":100,"deptcode":"01","descprefix":"test","desctext":"test","category":"test","ordernumber":600016555,"archived":"N","datecreated":"2017-03-09T10:33:09","datemodefied":"2017-03-09T10:33:09","filesize":180,"id":1810448062,"imagefilename":"\\\\filer\\QA01\\ImageStore\\ServiceBus\\600\\016\\555\\da00563b-bb38-49b1-b3ef-29dbce63fbed.png","thumbnailsize":0,"webfilename":"QA01/ImageStore/ServiceBus/600/016/555/da00563b-bb38-49b1-b3ef-29dbce63fbed.png"}}"#;

pub const NOT_FOUND_BODY: &str = r#"{"jsonrpc":"2.0","error":{"message":"not found"}}"#;

/// What the fake answers to every request
#[derive(Debug, Clone)]
pub enum Reply {
    Body { status: u16, body: Vec<u8> },
    /// Wait before answering; a client hang-up during the wait is counted
    Delayed { delay: Duration, body: Vec<u8> },
}

impl Reply {
    pub fn ok(body: impl AsRef<[u8]>) -> Self {
        Reply::Body {
            status: 200,
            body: body.as_ref().to_vec(),
        }
    }

    pub fn with_bom(body: impl AsRef<[u8]>) -> Self {
        let mut bytes = BOM.to_vec();
        bytes.extend_from_slice(body.as_ref());
        Reply::Body {
            status: 200,
            body: bytes,
        }
    }

    pub fn status(status: u16, body: impl AsRef<[u8]>) -> Self {
        Reply::Body {
            status,
            body: body.as_ref().to_vec(),
        }
    }
}

/// Request as seen by the fake
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

#[derive(Clone)]
struct BusState {
    reply: Reply,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    abandoned: Arc<AtomicUsize>,
}

/// Counts a request as abandoned unless disarmed before the handler future is dropped
struct AbandonGuard {
    abandoned: Arc<AtomicUsize>,
    armed: bool,
}

impl Drop for AbandonGuard {
    fn drop(&mut self) {
        if self.armed {
            self.abandoned.fetch_add(1, Ordering::SeqCst);
        }
    }
}

async fn execute(
    State(state): State<BusState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(CapturedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });

    let (status, body) = match state.reply {
        Reply::Body { status, body } => (status, body),
        Reply::Delayed { delay, body } => {
            let mut guard = AbandonGuard {
                abandoned: state.abandoned.clone(),
                armed: true,
            };
            tokio::time::sleep(delay).await;
            guard.armed = false;
            (200, body)
        }
    };

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response()
}

pub struct FakeServiceBus {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    abandoned: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl FakeServiceBus {
    pub async fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = BusState {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
            abandoned: Arc::new(AtomicUsize::new(0)),
        };
        let requests = state.requests.clone();
        let abandoned = state.abandoned.clone();

        // Every method and path lands in the same handler so tests can assert on both
        let app = Router::new().fallback(execute).with_state(state);
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            requests,
            abandoned,
            task,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/Execute.svc/Execute", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of delayed requests whose client hung up before the answer
    pub fn abandoned(&self) -> usize {
        self.abandoned.load(Ordering::SeqCst)
    }
}

impl Drop for FakeServiceBus {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Address guaranteed to refuse connections
pub fn refused_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/Execute.svc/Execute", addr)
}

pub fn http_caller(endpoint: impl Into<String>, timeout: Duration) -> HttpServiceBusCaller {
    HttpServiceBusCaller::new(ServiceBusConfig::new(endpoint, timeout)).unwrap()
}

/// Full stack: HTTP caller -> gRPC server on an ephemeral port -> SDK client
pub async fn start_stack(
    endpoint: impl Into<String>,
    servicebus_timeout: Duration,
    client_timeout: Duration,
) -> (GrpcServerHandle, ContentServiceClient) {
    let caller = Arc::new(http_caller(endpoint, servicebus_timeout));
    let config = GrpcServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        tls: None,
    };
    let handle = GrpcServer::new(config, caller).start().await.unwrap();

    let client = ContentServiceClient::connect(ClientConfig {
        server_addr: handle.local_addr().to_string(),
        timeout: client_timeout,
        ..Default::default()
    })
    .await
    .unwrap();

    (handle, client)
}

pub fn sample_request() -> PutRequest {
    PutRequest {
        contractor_id: 72494,
        order_number: 600016555,
        image_type: 1,
        file_name: "test.png".to_string(),
        image_width: 100,
        image_height: 100,
        release_date: "2015-08-06".to_string(),
        dept_code: "01".to_string(),
        file_contents: "iVBORw0KGgo=".to_string(),
    }
}
