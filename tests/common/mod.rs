#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::{fs, path::Path};

use futures::future::BoxFuture;
use httpmock::MockServer;
use rust_decimal::Decimal;
use url::Url;
use yfinance_api::{HttpResponse, HttpTransport, YfClient, YfError};

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{symbol}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Client whose every endpoint points at the mock server.
pub fn mock_client(server: &MockServer) -> YfClient {
    let base = server.base_url();
    YfClient::builder()
        .base_search(Url::parse(&format!("{base}/search/")).unwrap())
        .base_history_page(Url::parse(&format!("{base}/quote/")).unwrap())
        .base_download(Url::parse(&format!("{base}/v7/finance/download/")).unwrap())
        .base_quote_v7(Url::parse(&format!("{base}/v7/finance/quote")).unwrap())
        .build()
        .unwrap()
}

/// In-process transport: answers by URL path fragment and records every requested URL.
#[derive(Default)]
pub struct StubTransport {
    routes: Vec<(String, Result<HttpResponse, String>)>,
    calls: Mutex<Vec<Url>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests whose path contains `fragment` with `status` and `body`.
    pub fn route(mut self, fragment: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.push((
            fragment.to_string(),
            Ok(HttpResponse {
                status,
                body: body.into(),
            }),
        ));
        self
    }

    /// Fail requests whose path contains `fragment` with a transport error.
    pub fn fail(mut self, fragment: &str, message: &str) -> Self {
        self.routes
            .push((fragment.to_string(), Err(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<Url> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl HttpTransport for StubTransport {
    fn get<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<HttpResponse, YfError>> {
        self.calls.lock().unwrap().push(url.clone());
        let answer = self
            .routes
            .iter()
            .find(|(fragment, _)| url.path().contains(fragment.as_str()))
            .map(|(_, answer)| answer.clone());
        Box::pin(async move {
            match answer {
                Some(Ok(resp)) => Ok(resp),
                Some(Err(msg)) => Err(YfError::Transport(msg)),
                None => Err(YfError::Transport(format!("no route for {url}"))),
            }
        })
    }
}

/// Client over a stub transport, keeping a handle to the stub for assertions.
pub fn stub_client(stub: StubTransport) -> (YfClient, Arc<StubTransport>) {
    let stub = Arc::new(stub);
    let client = YfClient::with_transport(stub.clone());
    (client, stub)
}
