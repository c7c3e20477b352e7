use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

type Reply = Result<ApiResponse, ApiError>;

/// Scripted Transport for tests.
///
/// Replies are queued per `(method, path)`. The last queued reply for a route
/// repeats once the others are used up. Unscripted routes answer `404`.
///
/// # Panics
///
/// Every method panics if a previous holder of the internal lock panicked.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    routes: Arc<Mutex<HashMap<(Method, String), VecDeque<Reply>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    /// Queue a JSON reply.
    pub fn respond<B: Serialize>(&self, method: Method, path: &str, status: u16, body: &B) {
        let body = serde_json::to_vec(body).unwrap_or_default();
        self.push(method, path, Ok(ApiResponse { status, body }));
    }

    /// Queue a reply with a raw body (empty, HTML, plain text).
    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &[u8]) {
        self.push(
            method,
            path,
            Ok(ApiResponse {
                status,
                body: body.to_vec(),
            }),
        );
    }

    /// Queue a failure where no response arrives.
    pub fn fail(&self, method: Method, path: &str) {
        self.push(
            method,
            path,
            Err(ApiError::Network("connection refused".to_string())),
        );
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests sent to one route.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = (request.method, request.path.clone());
        self.requests.lock().unwrap().push(request);

        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(not_found),
            Some(queue) => queue.front().cloned().unwrap_or_else(not_found),
            None => not_found(),
        }
    }
}

fn not_found() -> Reply {
    Ok(ApiResponse {
        status: 404,
        body: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unscripted_route_is_404() {
        let transport = MemoryTransport::new();
        let response = transport
            .send(ApiRequest::new(Method::Get, "/gender"))
            .await
            .unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_last_reply_repeats() {
        let transport = MemoryTransport::new();
        transport.respond_raw(Method::Delete, "/gender/1", 500, b"");
        transport.respond_raw(Method::Delete, "/gender/1", 204, b"");

        let mut statuses = Vec::new();
        for _ in 0..3 {
            let response = transport
                .send(ApiRequest::new(Method::Delete, "/gender/1"))
                .await
                .unwrap();
            statuses.push(response.status);
        }
        assert_eq!(statuses, vec![500, 204, 204]);
        assert_eq!(transport.requests_to(Method::Delete, "/gender/1").len(), 3);
    }

    #[tokio::test]
    async fn test_network_failure() {
        let transport = MemoryTransport::new();
        transport.fail(Method::Get, "/country");
        let err = transport
            .send(ApiRequest::new(Method::Get, "/country"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
