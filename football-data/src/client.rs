use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::{endpoints::competition::CompetitionEndpoints, error::Error};

/// Default base URL of the football-data.org v4 API.
pub const DEFAULT_API_URL: &str = "https://api.football-data.org/v4";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the API token.
pub const AUTH_HEADER: &str = "x-auth-token";

const DEFAULT_USER_AGENT: &str = concat!("football-data-rs/", env!("CARGO_PKG_VERSION"));

/// Client for the football-data.org API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) api_url: String,
    pub(crate) timeout: Duration,
}

impl Client {
    /// Creates a new [`ClientBuilder`]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Competition related endpoints
    pub fn competitions(&self) -> CompetitionEndpoints<'_> {
        CompetitionEndpoints::new(self)
    }

    /// Base URL requests are made against, without trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Issues a GET request and returns the successful response's body as text.
    ///
    /// Non-success statuses are turned into [`Error::Status`] and timeouts into
    /// [`Error::Timeout`] so callers can tell transport failures apart.
    pub(crate) async fn get_text(&self, url: &str, query: &[(&str, String)]) -> Result<String, Error> {
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, url))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();

            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(err, url))
    }

    fn convert_reqwest_error(&self, error: reqwest::Error, url: &str) -> Error {
        if error.is_timeout() {
            return Error::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout.as_secs(),
            };
        }

        Error::ReqwestError(error)
    }
}

/// Builder for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_url: String,
    api_token: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Overrides the API base URL, used to point tests at a mock server
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the token sent as `X-Auth-Token` on every request (required)
    pub fn api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    /// Sets the timeout applied to connecting and to each whole request
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let token = match self.api_token {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Err(Error::Builder("an API token is required".to_string())),
        };

        let mut token = HeaderValue::from_str(&token)
            .map_err(|_| Error::Builder("API token contains invalid header characters".to_string()))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(AUTH_HEADER), token);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(&self.user_agent)
            .connect_timeout(self.timeout)
            .timeout(self.timeout)
            .build()
            .map_err(|err| Error::Builder(err.to_string()))?;

        Ok(Client {
            http,
            api_url: self.api_url.trim_end_matches('/').to_string(),
            timeout: self.timeout,
        })
    }
}
