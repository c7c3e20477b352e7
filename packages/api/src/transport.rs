//! The HTTP seam. [`ApiClient`](crate::ApiClient) builds [`ApiRequest`]s and a
//! [`Transport`] carries them: [`HttpTransport`] over reqwest in the app,
//! [`MemoryTransport`](crate::MemoryTransport) in tests.

use std::future::Future;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A file to send as one multipart field.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub field: &'static str,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Already-serialized JSON.
    Json(Vec<u8>),
    File(FileUpload),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, e.g. `/person/3`.
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    /// Bearer token, only set when the session holds one.
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            bearer: None,
            body: RequestBody::Empty,
        }
    }

    /// Look up a query parameter by name.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations only fail with [`ApiError::Network`] when no response
/// arrived; non-success statuses come back as an [`ApiResponse`].
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// reqwest-backed transport. Works natively and in the browser (fetch).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(method, self.url(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes),
            RequestBody::File(file) => {
                let mut part =
                    reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(mime) = file.content_type {
                    part = part
                        .mime_str(&mime)
                        .map_err(|e| ApiError::Invalid(e.to_string()))?;
                }
                builder.multipart(reqwest::multipart::Form::new().part(file.field, part))
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let transport = HttpTransport::new("http://localhost:5000/api/");
        assert_eq!(transport.base_url(), "http://localhost:5000/api");
        assert_eq!(transport.url("/person/3"), "http://localhost:5000/api/person/3");
        assert_eq!(transport.url("gender"), "http://localhost:5000/api/gender");
    }

    #[test]
    fn test_query_value() {
        let mut request = ApiRequest::new(Method::Get, "/person/search");
        request.query.push(("pageSize", "10".into()));
        assert_eq!(request.query_value("pageSize"), Some("10"));
        assert_eq!(request.query_value("searchTerm"), None);
    }

    #[test]
    fn test_success_range() {
        assert!(ApiResponse { status: 204, body: vec![] }.is_success());
        assert!(!ApiResponse { status: 404, body: vec![] }.is_success());
    }
}
