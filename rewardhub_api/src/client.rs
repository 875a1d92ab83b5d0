//! HTTP client for the RewardHub platform API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{query::Query, Error};

/// Request timeout for all API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Production API base URL, used by [`Client::from_env`] when
/// `REWARDHUB_API_URL` is not set.
const DEFAULT_API_URL: &str = "https://api.rewardhub.app";

/// Session credentials attached to every outbound request.
///
/// Created once at application start and handed to [`Client::new`]; tearing
/// down the session means dropping the client. Public endpoints (category
/// search, leaderboards) work with [`Session::anonymous`].
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// A session authenticated with a bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// An unauthenticated session for public endpoints.
    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

/// HTTP client for the RewardHub platform API.
///
/// Holds one configured `reqwest::Client` with a 30-second timeout and the
/// session credentials. Every resource method is a thin mapping from typed
/// input to one backend endpoint; errors are normalized into [`Error`] and
/// propagated unchanged to the caller.
pub struct Client {
    http: reqwest::Client,
    base_api_url: String,
    session: Session,
}

impl Client {
    /// Creates a new client for the given base URL and session.
    pub fn new(base_url: &str, session: Session) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Creates a client from `REWARDHUB_API_URL` and `REWARDHUB_API_TOKEN`.
    ///
    /// Falls back to the production base URL when the URL variable is unset,
    /// and to an anonymous session when no token is present.
    pub fn from_env() -> Result<Self, Error> {
        let base_url =
            std::env::var("REWARDHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let session = match std::env::var("REWARDHUB_API_TOKEN") {
            Ok(token) => Session::bearer(token),
            Err(_) => Session::anonymous(),
        };
        Self::new(&base_url, session)
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn execute(&self, req: reqwest::RequestBuilder) -> Result<String, Error> {
        let resp = self
            .authorize(req)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                Error::Network(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::error!("Request failed with status {}: {}", status, message);
            return Err(status_error(status.as_u16(), message));
        }

        Ok(body)
    }

    fn parse<T: DeserializeOwned>(&self, body: &str) -> Result<T, Error> {
        serde_json::from_str::<T>(body).map_err(|e| {
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(body));
            Error::Decode(e)
        })
    }

    pub(crate) async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let body = self.execute(self.http.get(url)).await?;
        self.parse(&body)
    }

    pub(crate) async fn post<T, B>(&self, path: &str, payload: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path, None::<&crate::ListQuery>)?;
        let body = self.execute(self.http.post(url).json(payload)).await?;
        self.parse(&body)
    }

    pub(crate) async fn patch<T, B>(&self, path: &str, payload: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path, None::<&crate::ListQuery>)?;
        let req = match payload {
            Some(payload) => self.http.patch(url).json(payload),
            None => self.http.patch(url),
        };
        let body = self.execute(req).await?;
        self.parse(&body)
    }

    /// DELETE returns no body on success (204), so nothing is parsed.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.get_url(path, None::<&crate::ListQuery>)?;
        self.execute(self.http.delete(url)).await?;
        Ok(())
    }
}

/// Backend error bodies carry the message under a `detail` key.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.detail,
        Err(_) => truncate_body(body),
    }
}

fn status_error(status: u16, message: String) -> Error {
    match status {
        401 | 403 => Error::Auth { status, message },
        404 => Error::NotFound { message },
        409 => Error::Conflict { message },
        400..=499 => Error::Validation { status, message },
        _ => Error::Server { status, message },
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // back off to a char boundary so multibyte bodies cannot panic the cut
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
