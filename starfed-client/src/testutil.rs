//! Scripted transport for exercising clients without a network.

use std::sync::Mutex;

use async_trait::async_trait;
use starfed_core::traits::{HttpResponse, HttpTransport, TransportError};

/// [`HttpTransport`] that replays queued responses in order and records
/// every requested URL.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    responses: Mutex<Vec<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and body.
    pub(crate) fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(HttpResponse {
            status,
            body: body.into(),
        }));
        self
    }

    /// Queues a transport-level failure.
    pub(crate) fn fail(self, reason: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Err(TransportError(reason.to_string())));
        self
    }

    /// URLs requested so far, in order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(TransportError("no response queued".to_string()));
        }
        responses.remove(0)
    }
}
