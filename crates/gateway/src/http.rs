//! reqwest implementation of the gateway.

use async_trait::async_trait;
use reqwest::{Client, Method, Request, Url};
use serde::de::DeserializeOwned;
use simucredito_core::simulation::{PaymentRow, SimulationResult};
use simucredito_shared::config::GatewayConfig;
use simucredito_shared::types::{Page, PageRequest, SimulationId};
use tracing::{debug, error};

use crate::client::SimulationGateway;
use crate::error::GatewayError;
use crate::types::{CreatedSimulation, ListResponse, SimulationInput, SimulationSummaryItem};

const SIMULATIONS: &str = "simulations";
const AMORTIZATION: &str = "amortization";

/// Talks to the simulations API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSimulationGateway {
    base_url: Url,
    bearer_token: Option<String>,
    client: Client,
}

impl HttpSimulationGateway {
    /// Creates a gateway for `base_url`, e.g. `http://localhost:8080/api`.
    ///
    /// The bearer token, when present, comes from the session layer and is sent as-is.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBaseUrl` unless the URL is an absolute http(s) URL, and
    /// `Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str, bearer_token: Option<String>) -> Result<Self, GatewayError> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|e| GatewayError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(GatewayError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder().gzip(true).build()?;
        Ok(Self {
            base_url: parsed,
            bearer_token: bearer_token.filter(|t| !t.trim().is_empty()),
            client,
        })
    }

    /// Creates a gateway from configuration.
    ///
    /// # Errors
    ///
    /// See [`HttpSimulationGateway::new`].
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        Self::new(&config.base_url, config.bearer_token.clone())
    }

    /// Base URL every path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) fn create_request(&self, input: &SimulationInput) -> Result<Request, GatewayError> {
        let url = self.endpoint(&[SIMULATIONS])?;
        Ok(self.request(Method::POST, url).json(input).build()?)
    }

    pub(crate) fn list_request(&self) -> Result<Request, GatewayError> {
        let url = self.endpoint(&[SIMULATIONS])?;
        Ok(self.request(Method::GET, url).build()?)
    }

    pub(crate) fn get_request(&self, id: &SimulationId) -> Result<Request, GatewayError> {
        let url = self.endpoint(&[SIMULATIONS, id.as_str()])?;
        Ok(self.request(Method::GET, url).build()?)
    }

    pub(crate) fn amortization_request(
        &self,
        id: &SimulationId,
        page: PageRequest,
    ) -> Result<Request, GatewayError> {
        let url = self.endpoint(&[SIMULATIONS, id.as_str(), AMORTIZATION])?;
        Ok(self
            .request(Method::GET, url)
            .query(&[("page", page.page), ("size", page.size)])
            .build()?)
    }

    /// Sends one request and decodes a JSON body, logging any failure.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: Result<Request, GatewayError>,
    ) -> Result<T, GatewayError> {
        let result = match request {
            Ok(request) => {
                debug!(
                    operation,
                    method = %request.method(),
                    url = %request.url(),
                    "Calling simulations API"
                );
                self.send(request).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            error!(error = %e, operation, "Simulations API call failed");
        }
        result
    }

    async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<T, GatewayError> {
        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[async_trait]
impl SimulationGateway for HttpSimulationGateway {
    async fn create(&self, input: &SimulationInput) -> Result<CreatedSimulation, GatewayError> {
        self.execute("create", self.create_request(input)).await
    }

    async fn list(&self) -> Result<Vec<SimulationSummaryItem>, GatewayError> {
        self.execute::<ListResponse>("list", self.list_request())
            .await
            .map(ListResponse::into_items)
    }

    async fn get_by_id(&self, id: &SimulationId) -> Result<SimulationResult, GatewayError> {
        self.execute("get_by_id", self.get_request(id)).await
    }

    async fn get_amortization_page(
        &self,
        id: &SimulationId,
        request: PageRequest,
    ) -> Result<Page<PaymentRow>, GatewayError> {
        self.execute(
            "get_amortization_page",
            self.amortization_request(id, request),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn gateway() -> HttpSimulationGateway {
        HttpSimulationGateway::new("http://localhost:8080/api", None).unwrap()
    }

    #[rstest]
    #[case("http://localhost:8080/api")]
    #[case("http://localhost:8080/api/")]
    #[case("https://simucredito.example.com/api")]
    fn test_accepts_http_base_urls(#[case] base: &str) {
        let gateway = HttpSimulationGateway::new(base, None).unwrap();
        let request = gateway.list_request().unwrap();
        assert!(request.url().path().ends_with("/api/simulations"));
    }

    #[rstest]
    #[case("localhost:8080/api")]
    #[case("ftp://localhost/api")]
    #[case("not a url")]
    #[case("mailto:team@example.com")]
    fn test_rejects_invalid_base_urls(#[case] base: &str) {
        let err = HttpSimulationGateway::new(base, None).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_create_request() {
        let input = SimulationInput::new(serde_json::json!({"propertyValue": 100000}));
        let request = gateway().create_request(&input).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:8080/api/simulations");
        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(body, br#"{"propertyValue":100000}"#);
    }

    #[test]
    fn test_get_request_escapes_id() {
        let request = gateway().get_request(&SimulationId::new("a/b")).unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/api/simulations/a%2Fb"
        );
    }

    #[test]
    fn test_amortization_request_query() {
        let request = gateway()
            .amortization_request(&SimulationId::new("42"), PageRequest::default())
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/api/simulations/42/amortization?page=0&size=10"
        );
    }

    #[test]
    fn test_bearer_token_is_attached() {
        let gateway =
            HttpSimulationGateway::new("http://localhost:8080/api", Some("tok".to_string()))
                .unwrap();
        let request = gateway.list_request().unwrap();
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer tok"
        );
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let gateway =
            HttpSimulationGateway::new("http://localhost:8080/api", Some("  ".to_string()))
                .unwrap();
        let request = gateway.list_request().unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let gateway = HttpSimulationGateway::new("http://127.0.0.1:9/api", None).unwrap();
        let err = gateway.list().await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    /// Answers a single connection with a fixed response; returns the base URL.
    async fn canned_server(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/api")
    }

    #[tokio::test]
    async fn test_error_status_is_returned_with_body() {
        let base = canned_server("503 Service Unavailable", "busy").await;
        let gateway = HttpSimulationGateway::new(&base, None).unwrap();

        let err = gateway.get_by_id(&SimulationId::new("42")).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Status { status: 503, ref body } if body == "busy"
        ));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_undecodable_body_is_decode_error() {
        let base = canned_server("200 OK", "{not json").await;
        let gateway = HttpSimulationGateway::new(&base, None).unwrap();

        let err = gateway.list().await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn test_success_body_is_decoded() {
        let base = canned_server("200 OK", r#"[{"id": 7, "clientInfo": {"name": "Ana"}}]"#).await;
        let gateway = HttpSimulationGateway::new(&base, None).unwrap();

        let items = gateway.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].client_name(), Some("Ana"));
    }
}
