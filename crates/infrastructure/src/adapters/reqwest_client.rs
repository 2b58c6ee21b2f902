//! Catalog API implementation using reqwest.
//!
//! This adapter implements the `CatalogApi` port over HTTP. Each call
//! issues a single GET; there is no retry.

use std::time::Duration;

use async_trait::async_trait;
use holocron_application::{CatalogApi, FetchError};
use holocron_domain::{
    ClientSettings, DomainError, ListRequest, ListResponse, Record, query::SPECIES_RESOURCE,
    resource_url,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::serialization::from_json_bytes;

/// Maximum number of redirects followed per request.
const MAX_REDIRECTS: usize = 10;

/// Catalog API client backed by `reqwest::Client`.
pub struct ReqwestCatalogApi {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ReqwestCatalogApi {
    /// Creates a client from settings.
    ///
    /// Configuration:
    /// - Per-request timeout: `request_timeout_ms`
    /// - Follow redirects: up to 10
    /// - User-Agent: `user_agent`
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the client cannot be
    /// created.
    pub fn new(settings: &ClientSettings) -> Result<Self, FetchError> {
        let base_url = settings.base_url()?;
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self::with_client(client, base_url, settings.request_timeout()))
    }

    /// Creates an adapter around an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }

    /// Base URL the list endpoints hang off.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Issues a GET and decodes a JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let timeout_ms = self.timeout_ms();
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;
        Self::decode(&body)
    }

    fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, FetchError> {
        from_json_bytes(body).map_err(|e| FetchError::MalformedResponse(e.to_string()))
    }

    /// Maps reqwest errors to `FetchError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> FetchError {
        if error.is_timeout() {
            return FetchError::Timeout { timeout_ms };
        }
        if error.is_decode() {
            return FetchError::MalformedResponse(error.to_string());
        }
        if error.is_redirect() {
            return FetchError::Network(format!("too many redirects (max {MAX_REDIRECTS})"));
        }
        FetchError::Network(error.to_string())
    }
}

#[async_trait]
impl CatalogApi for ReqwestCatalogApi {
    async fn list_people(&self, request: &ListRequest) -> Result<ListResponse, FetchError> {
        let url = request.to_url(&self.base_url)?;
        self.get_json(url).await
    }

    async fn list_species(&self) -> Result<Vec<Record>, FetchError> {
        let url = resource_url(&self.base_url, SPECIES_RESOURCE)?;
        let response: ListResponse = self.get_json(url).await?;
        Ok(response.results.unwrap_or_default())
    }

    async fn fetch_record(&self, url: &str) -> Result<Record, FetchError> {
        let url = Url::parse(url)
            .map_err(|e| DomainError::InvalidResourceUrl(format!("{e}: {url}")))?;
        let value: serde_json::Value = self.get_json(url).await?;
        Record::from_value(value)
            .ok_or_else(|| FetchError::MalformedResponse("expected a JSON object".to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use holocron_domain::QueryState;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves exactly one canned HTTP response and reports the request line.
    async fn serve_once(status: &'static str, body: &'static str) -> (Url, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buffer = Vec::new();
            let mut chunk = [0_u8; 1024];
            while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = socket.read(&mut chunk).await.unwrap();
                if read == 0 {
                    break;
                }
                buffer.extend_from_slice(&chunk[..read]);
            }
            let request = String::from_utf8_lossy(&buffer);
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        let base = Url::parse(&format!("http://{addr}/api")).unwrap();
        (base, rx)
    }

    fn api(base: Url) -> ReqwestCatalogApi {
        ReqwestCatalogApi::with_client(Client::new(), base, Duration::from_secs(5))
    }

    #[test]
    fn test_client_creation() {
        assert!(ReqwestCatalogApi::new(&ClientSettings::default()).is_ok());
    }

    #[test]
    fn test_client_creation_rejects_bad_base_url() {
        let settings = ClientSettings {
            base_url: "not a url".to_string(),
            ..ClientSettings::default()
        };
        assert!(matches!(
            ReqwestCatalogApi::new(&settings),
            Err(FetchError::InvalidRequest(DomainError::InvalidBaseUrl(_)))
        ));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let result: Result<ListResponse, _> =
            ReqwestCatalogApi::decode(br#"{"count": "lots", "results": []}"#);
        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_list_people_sends_query_and_decodes() {
        let (base, request_line) = serve_once(
            "200 OK",
            r#"{"count": 82, "next": null, "previous": null, "results": [{"name": "Luke Skywalker"}]}"#,
        )
        .await;

        let mut query = QueryState::default();
        query.set_search_text("Luke", true);
        let response = api(base).list_people(&query.to_request()).await.unwrap();

        assert_eq!(response.count, Some(82));
        assert_eq!(
            request_line.await.unwrap(),
            "GET /api/people/?page=1&search=Luke HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let (base, _) = serve_once("404 Not Found", r#"{"detail": "Not found"}"#).await;
        let result = api(base)
            .list_people(&QueryState::default().to_request())
            .await;
        assert_eq!(result, Err(FetchError::Http { status: 404 }));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (base, _) = serve_once("200 OK", "<html>oops</html>").await;
        let result = api(base)
            .list_people(&QueryState::default().to_request())
            .await;
        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_list_species_reads_results() {
        let (base, request_line) =
            serve_once("200 OK", r#"{"count": 2, "results": [{"name": "Human"}, {"name": "Droid"}]}"#)
                .await;
        let species = api(base).list_species().await.unwrap();
        assert_eq!(species.len(), 2);
        assert_eq!(request_line.await.unwrap(), "GET /api/species/ HTTP/1.1");
    }

    #[tokio::test]
    async fn test_fetch_record_requires_object() {
        let (base, _) = serve_once("200 OK", r#"["not", "an", "object"]"#).await;
        let url = base.join("planets/1/").unwrap();
        let result = api(base).fetch_record(url.as_str()).await;
        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_fetch_record_rejects_invalid_url() {
        let result = api(Url::parse("http://127.0.0.1/api").unwrap())
            .fetch_record("::not a url::")
            .await;
        assert!(matches!(
            result,
            Err(FetchError::InvalidRequest(DomainError::InvalidResourceUrl(_)))
        ));
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let base = Url::parse(&format!("http://{addr}/api")).unwrap();
        let api = ReqwestCatalogApi::with_client(Client::new(), base, Duration::from_millis(100));
        let result = api.list_people(&QueryState::default().to_request()).await;

        assert_eq!(result, Err(FetchError::Timeout { timeout_ms: 100 }));
        server.abort();
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = Url::parse(&format!("http://{addr}/api")).unwrap();
        let result = api(base).list_species().await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
