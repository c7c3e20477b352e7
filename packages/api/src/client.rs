use serde::de::DeserializeOwned;
use serde::Serialize;

use domain::Entity;

use crate::error::{log_error, ApiError};
use crate::services::EntityService;
use crate::transport::{ApiRequest, FileUpload, Method, RequestBody, Transport};

/// Shared REST client: attaches the bearer token, decodes JSON, logs failures.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            token: None,
        }
    }

    /// Blank tokens are ignored so no `Authorization` header is sent for them.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Typed service for one entity family.
    pub fn service<E: Entity>(&self) -> EntityService<'_, T, E> {
        EntityService::new(self)
    }

    async fn execute(&self, mut request: ApiRequest) -> Result<Vec<u8>, ApiError> {
        request.bearer = self.token.clone();
        let method = request.method.as_str();
        let path = request.path.clone();
        tracing::debug!(%method, %path, "API request");

        let result = match self.transport.send(request).await {
            Ok(response) if response.is_success() => Ok(response.body),
            Ok(response) => Err(ApiError::from_response(response.status, &response.body)),
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            log_error(method, &path, err);
        }
        result
    }

    async fn execute_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        let body = self.execute(request).await?;
        decode(&body).inspect_err(|err| log_error(method, &path, err))
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<R, ApiError> {
        let mut request = ApiRequest::new(Method::Get, path);
        request.query = query;
        self.execute_json(request).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let mut request = ApiRequest::new(Method::Post, path);
        request.body = json_body(body)?;
        self.execute_json(request).await
    }

    /// PUT whose response body is ignored.
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let mut request = ApiRequest::new(Method::Put, path);
        request.body = json_body(body)?;
        self.execute(request).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(Method::Delete, path))
            .await
            .map(|_| ())
    }

    /// Multipart POST of a single file.
    pub async fn upload<R: DeserializeOwned>(
        &self,
        path: &str,
        file: FileUpload,
    ) -> Result<R, ApiError> {
        let mut request = ApiRequest::new(Method::Post, path);
        request.body = RequestBody::File(file);
        self.execute_json(request).await
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_vec(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Invalid(e.to_string()))
}

/// An empty success body decodes as JSON `null`.
fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R, ApiError> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTransport;
    use domain::Gender;

    #[tokio::test]
    async fn test_bearer_only_when_token_present() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/gender", 200, &Vec::<Gender>::new());

        let anonymous = ApiClient::new(transport.clone());
        let _: Vec<Gender> = anonymous.get("/gender", vec![]).await.unwrap();

        let blank = ApiClient::new(transport.clone()).with_token(Some(String::new()));
        let _: Vec<Gender> = blank.get("/gender", vec![]).await.unwrap();

        let signed_in = ApiClient::new(transport.clone()).with_token(Some("abc".into()));
        let _: Vec<Gender> = signed_in.get("/gender", vec![]).await.unwrap();

        let bearers: Vec<_> = transport.requests().into_iter().map(|r| r.bearer).collect();
        assert_eq!(bearers, vec![None, None, Some("abc".to_string())]);
    }

    #[tokio::test]
    async fn test_non_success_is_api_error() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Post,
            "/gender",
            400,
            &serde_json::json!({"message": "Validation failed", "detail": "Code is required"}),
        );
        let client = ApiClient::new(transport);
        let err = client
            .post::<_, Gender>("/gender", &serde_json::json!({}))
            .await
            .unwrap_err();
        match err {
            ApiError::Api { status, body, .. } => {
                assert_eq!(status, 400);
                assert_eq!(body.unwrap().message, "Validation failed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bad_json_is_decode_error() {
        let transport = MemoryTransport::new();
        transport.respond_raw(Method::Get, "/gender/1", 200, b"not json");
        let client = ApiClient::new(transport);
        let err = client.get::<Gender>("/gender/1", vec![]).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_put_ignores_body() {
        let transport = MemoryTransport::new();
        transport.respond_raw(Method::Put, "/gender/2", 204, b"");
        let client = ApiClient::new(transport.clone());
        client
            .put("/gender/2", &serde_json::json!({"id": 2}))
            .await
            .unwrap();

        let sent = transport.requests_to(Method::Put, "/gender/2");
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].body,
            RequestBody::Json(br#"{"id":2}"#.to_vec())
        );
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let value: Option<Gender> = decode(b"").unwrap();
        assert!(value.is_none());
        let value: () = decode(b"  ").unwrap();
        assert_eq!(value, ());
    }
}
