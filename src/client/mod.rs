//! Client layer: orchestrates validation, transport calls and response parsing.

mod cache;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiKey, ApiResponse, CustomSearch, SearchResult, Translate, TranslateResult, ValidationError,
};
use crate::transport::{CustomSearchParser, DataParser, ParseError, TranslateParser};

pub use cache::{MemoryCache, RequestCache};

const DEFAULT_CUSTOM_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://www.googleapis.com/language/translate/v2";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GoogleApiClient`].
///
/// An error reported by Google itself is not one of these: it is returned as
/// [`ApiResponse::Failure`].
pub enum GoogleApiError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status whose body is not a Google error envelope.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The request was rejected before being sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
/// Builder for [`GoogleApiClient`].
///
/// Use this when you need to customize the endpoints, timeout, user-agent or
/// response caching.
pub struct GoogleApiClientBuilder {
    custom_search_endpoint: String,
    translate_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    cache: Option<Arc<dyn RequestCache>>,
}

impl GoogleApiClientBuilder {
    /// Create a builder with the default endpoints, no timeout/user-agent override and no cache.
    pub fn new() -> Self {
        Self {
            custom_search_endpoint: DEFAULT_CUSTOM_SEARCH_ENDPOINT.to_owned(),
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            cache: None,
        }
    }

    /// Override the Custom Search endpoint URL.
    pub fn custom_search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.custom_search_endpoint = endpoint.into();
        self
    }

    /// Override the Translate endpoint URL.
    pub fn translate_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.translate_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Reuse response bodies for identical request URLs.
    ///
    /// Only bodies of successful (2xx) responses that parsed cleanly are stored.
    pub fn cache(mut self, cache: Arc<dyn RequestCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build a [`GoogleApiClient`].
    pub fn build(self) -> Result<GoogleApiClient, GoogleApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| GoogleApiError::Transport(Box::new(err)))?;

        Ok(GoogleApiClient {
            custom_search_endpoint: self.custom_search_endpoint,
            translate_endpoint: self.translate_endpoint,
            http: Arc::new(ReqwestTransport { client }),
            cache: self.cache,
        })
    }
}

impl Default for GoogleApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
/// High-level client for the Custom Search and Translate APIs.
///
/// Each call validates the request, builds the request URL, performs an HTTP
/// `GET` and parses the body into an [`ApiResponse`]. By default it uses:
/// - `https://www.googleapis.com/customsearch/v1` for searches
/// - `https://www.googleapis.com/language/translate/v2` for translations
pub struct GoogleApiClient {
    custom_search_endpoint: String,
    translate_endpoint: String,
    http: Arc<dyn HttpTransport>,
    cache: Option<Arc<dyn RequestCache>>,
}

impl GoogleApiClient {
    /// Create a client using the default endpoints and no cache.
    ///
    /// For more customization, use [`GoogleApiClient::builder`].
    pub fn new() -> Self {
        Self {
            custom_search_endpoint: DEFAULT_CUSTOM_SEARCH_ENDPOINT.to_owned(),
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
            cache: None,
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> GoogleApiClientBuilder {
        GoogleApiClientBuilder::new()
    }

    /// Run a Custom Search query.
    ///
    /// Errors:
    /// - [`GoogleApiError::Validation`] when a required parameter is missing,
    /// - [`GoogleApiError::Transport`] / [`GoogleApiError::HttpStatus`] for HTTP failures,
    /// - [`GoogleApiError::Parse`] when the body has an unexpected shape.
    pub async fn custom_search(
        &self,
        request: &CustomSearch,
    ) -> Result<ApiResponse<SearchResult>, GoogleApiError> {
        request.validate()?;
        let url = request.build_request_url(&self.custom_search_endpoint);
        self.execute(&url, &CustomSearchParser).await
    }

    /// Translate one or more texts.
    ///
    /// Errors are reported as for [`GoogleApiClient::custom_search`].
    pub async fn translate(
        &self,
        request: &Translate,
    ) -> Result<ApiResponse<TranslateResult>, GoogleApiError> {
        request.validate()?;
        let url = request.build_request_url(&self.translate_endpoint);
        self.execute(&url, &TranslateParser).await
    }

    async fn execute<P>(
        &self,
        url: &str,
        parser: &P,
    ) -> Result<ApiResponse<P::Output>, GoogleApiError>
    where
        P: DataParser + Sync,
    {
        if let Some(body) = self.cache.as_ref().and_then(|cache| cache.get(url)) {
            tracing::debug!(url = %redact_api_key(url), "reusing cached response body");
            return Ok(crate::transport::parse_response(parser, &body)?);
        }

        tracing::debug!(url = %redact_api_key(url), "sending request");
        let response = self
            .http
            .get(url)
            .await
            .map_err(GoogleApiError::Transport)?;
        let success = (200..=299).contains(&response.status);

        match crate::transport::parse_response(parser, &response.body) {
            Ok(failure @ ApiResponse::Failure(_)) => Ok(failure),
            Ok(parsed) if success => {
                if let Some(cache) = self.cache.as_ref() {
                    cache.insert(url, response.body);
                }
                Ok(parsed)
            }
            Ok(_) => Err(http_status_error(response)),
            Err(_) if !success => Err(http_status_error(response)),
            Err(err) => {
                tracing::warn!(error = %err, "failed to parse response body");
                Err(err.into())
            }
        }
    }
}

impl Default for GoogleApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn http_status_error(response: HttpResponse) -> GoogleApiError {
    tracing::warn!(status = response.status, "unexpected HTTP status");
    let body = if response.body.trim().is_empty() {
        None
    } else {
        Some(response.body)
    };
    GoogleApiError::HttpStatus {
        status: response.status,
        body,
    }
}

fn redact_api_key(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_owned();
    };
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == ApiKey::FIELD {
                "REDACTED".to_owned()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    if pairs.is_empty() {
        return parsed.into();
    }
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.into()
}
