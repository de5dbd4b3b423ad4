//! The single network primitive the client depends on: `GET url -> (status, body)`.

use futures::future::BoxFuture;
use reqwest::Client;
use url::Url;

use crate::core::YfError;

/// Status code and text body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// A `200 OK` response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// HTTP transport used for every request the client makes.
///
/// Implement this to route requests through your own stack, or to stub the network in
/// tests. Errors returned here reach the caller unchanged. Timeouts, retries and
/// connection pooling belong to the implementation.
pub trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<HttpResponse, YfError>>;
}

/// Default transport backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub const fn new(http: Client) -> Self {
        Self { http }
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<HttpResponse, YfError>> {
        Box::pin(async move {
            let resp = self.http.get(url.clone()).send().await?;
            let status = resp.status().as_u16();
            let body = resp.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}
