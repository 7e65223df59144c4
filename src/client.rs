//! Data API client implementation

use crate::error::{Error, Result};
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::types::Version;
use futures::stream::Stream;
use reqwest::Url;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, warn};

/// Base URL of a locally installed Movable Type development server
pub const DEFAULT_BASE_URL: &str = "http://localhost/cgi-bin/MT-6.1/mt-data-api.cgi";

/// Endpoint version used when none is configured
pub const DEFAULT_ENDPOINT_VERSION: &str = "v3";

/// Stream that yields exactly one result and then ends
pub type VersionStream = Pin<Box<dyn Stream<Item = Result<Version>> + Send>>;

/// Configuration for the Data API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Data API base URL (e.g., "https://movabletype.net/.data-api")
    pub base_url: String,
    /// Endpoint version path segment (e.g., "v4")
    pub endpoint_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_version: DEFAULT_ENDPOINT_VERSION.to_string(),
        }
    }
}

impl ClientConfig {
    /// Versioned API root, `{base_url}/{endpoint_version}`
    pub fn api_url(&self) -> String {
        format!("{}/{}", self.base_url, self.endpoint_version)
    }
}

/// Data API client
///
/// Configuration is read when a request is built, so changing the base URL or
/// endpoint version only affects requests issued afterwards.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a new client backed by a fresh `reqwest` transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a new client that sends requests through `transport`
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Set the base URL. Not validated until a request is issued.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.config.base_url = base_url.into();
    }

    pub fn endpoint_version(&self) -> &str {
        &self.config.endpoint_version
    }

    pub fn set_endpoint_version(&mut self, endpoint_version: impl Into<String>) {
        self.config.endpoint_version = endpoint_version.into();
    }

    pub fn api_url(&self) -> String {
        self.config.api_url()
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url(), path)
    }

    fn build_request(&self, path: &str) -> Result<HttpRequest> {
        let raw = self.build_url(path);
        let url = Url::parse(&raw).map_err(|e| {
            warn!(url = %raw, error = %e, "rejecting malformed request URL");
            Error::InvalidUrl(raw.clone())
        })?;
        Ok(HttpRequest::get(url))
    }

    /// Get the version information of the Data API
    ///
    /// Issues `GET {base_url}/{endpoint_version}/version`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mt_data_api::{Client, ClientConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut client = Client::new(ClientConfig::default())?;
    /// client.set_base_url("https://movabletype.net/.data-api");
    /// let version = client.version().await?;
    /// println!("{} {}", version.endpoint_version(), version.api_version());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn version(&self) -> Result<Version> {
        let request = self.build_request("version")?;
        fetch(self.transport.as_ref(), request).await
    }

    /// Stream flavor of [`Client::version`]
    ///
    /// Configuration is captured immediately. The returned stream yields a
    /// single `Ok(version)` or `Err(error)` and then ends. A malformed base URL
    /// yields its error without calling the transport. Dropping the stream
    /// before it yields cancels the request.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mt_data_api::{Client, ClientConfig};
    /// # use futures::StreamExt;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new(ClientConfig::default())?;
    /// let mut stream = client.version_stream();
    /// while let Some(result) = stream.next().await {
    ///     match result {
    ///         Ok(version) => println!("Version: {:?}", version),
    ///         Err(e) => eprintln!("Error: {}", e),
    ///     }
    /// }
    /// println!("finished");
    /// # Ok(())
    /// # }
    /// ```
    pub fn version_stream(&self) -> VersionStream {
        let request = self.build_request("version");
        let transport = Arc::clone(&self.transport);

        let stream = async_stream::stream! {
            match request {
                Ok(request) => yield fetch(transport.as_ref(), request).await,
                Err(e) => yield Err(e),
            }
        };

        Box::pin(stream)
    }
}

async fn fetch(transport: &dyn Transport, request: HttpRequest) -> Result<Version> {
    debug!(method = %request.method, url = %request.url, "sending request");

    let response = transport.send(request).await.map_err(|e| {
        warn!(error = %e, "request failed");
        e
    })?;

    decode(response)
}

fn decode(response: HttpResponse) -> Result<Version> {
    // The body is decoded whatever the status; an error page fails as a decode error.
    if !response.is_success() {
        debug!(status = response.status, "decoding body of non-success response");
    }

    let version: Version = serde_json::from_slice(&response.body).map_err(|e| {
        warn!(status = response.status, error = %e, "failed to decode version response");
        e
    })?;
    debug!(
        endpoint_version = %version.endpoint_version(),
        api_version = %version.api_version(),
        "decoded version"
    );

    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiVersion, EndpointVersion};

    #[test]
    fn test_default_config() {
        let client = Client::new(ClientConfig::default()).unwrap();

        assert_eq!(client.endpoint_version(), "v3");
        assert_eq!(
            client.base_url(),
            "http://localhost/cgi-bin/MT-6.1/mt-data-api.cgi"
        );
    }

    #[test]
    fn test_set_config() {
        let mut client = Client::new(ClientConfig::default()).unwrap();

        client.set_endpoint_version("v4");
        assert_eq!(client.endpoint_version(), "v4");

        client.set_base_url("https://movabletype.net/.data-api");
        assert_eq!(client.base_url(), "https://movabletype.net/.data-api");

        client.config_mut().endpoint_version = "v5".to_string();
        assert_eq!(client.config().endpoint_version, "v5");
    }

    #[test]
    fn test_build_url() {
        let mut client = Client::new(ClientConfig {
            base_url: "https://www.example.com/.data-api".to_string(),
            endpoint_version: "v4".to_string(),
        })
        .unwrap();

        assert_eq!(client.api_url(), "https://www.example.com/.data-api/v4");
        assert_eq!(
            client.build_url("version"),
            "https://www.example.com/.data-api/v4/version"
        );

        client.set_endpoint_version("v6");
        assert_eq!(
            client.build_url("version"),
            "https://www.example.com/.data-api/v6/version"
        );
    }

    #[test]
    fn test_build_request_rejects_malformed_url() {
        let mut client = Client::new(ClientConfig::default()).unwrap();

        client.set_base_url("");
        assert!(matches!(
            client.build_request("version"),
            Err(Error::InvalidUrl(_))
        ));

        client.set_base_url("http://exa mple.com");
        assert!(matches!(
            client.build_request("version"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_decode_success() {
        let response = HttpResponse::new(200, r#"{"endpointVersion":"v4","apiVersion":4}"#);

        assert_eq!(
            decode(response).unwrap(),
            Version::new(EndpointVersion::new("v4"), ApiVersion::new(4.0))
        );
    }

    #[test]
    fn test_decode_ignores_status() {
        let response = HttpResponse::new(404, r#"{"endpointVersion":"v4","apiVersion":4}"#);

        assert_eq!(
            decode(response).unwrap(),
            Version::new(EndpointVersion::new("v4"), ApiVersion::new(4.0))
        );
    }

    #[test]
    fn test_decode_error_page_is_decode_error() {
        let response = HttpResponse::new(503, "<html>Service Unavailable</html>");

        let err = decode(response).unwrap_err();
        assert!(err.is_decode());
        assert!(matches!(err, Error::JsonError(_)));
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode(HttpResponse::new(200, "{not json")).unwrap_err();
        assert!(err.is_decode());
    }
}
