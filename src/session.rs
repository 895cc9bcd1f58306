//! Connection to a Marquee environment.
//!
//! A [`Session`] owns the HTTP client, the API host and the default headers shared by every
//! API client in this crate. Authentication is out of scope: a session either carries a
//! pre-issued OAuth bearer token or relies on whatever sits in front of the host.
//!
//! ```no_run
//! use marquee_client_sdk::{Config, Environment, Session};
//! use marquee_client_sdk::types::SecretString;
//!
//! # fn example() -> marquee_client_sdk::Result<()> {
//! let config = Config::builder()
//!     .application("my-desk-tool")
//!     .access_token(SecretString::from("token".to_owned()))
//!     .build();
//! let session = Session::for_environment(Environment::Qa, config)?;
//! assert_eq!(session.host().as_str(), "https://api.marquee-qa.gs.com/");
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;
use std::time::Duration;

use bon::Builder;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method};
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;
use crate::{ACCESS_TOKEN_VAR, APPLICATION_VAR, ENVIRONMENT_VAR, HOST_VAR, Result, ToQueryParams as _};

/// Default value of the `X-Application` header.
pub const DEFAULT_APPLICATION: &str = "marquee-client-sdk";

/// Marquee deployments reachable through the public API gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Environment {
    #[default]
    Prod,
    Qa,
    Dev,
}

impl Environment {
    /// Base URL of the API gateway for this environment.
    #[must_use]
    pub const fn api_url(self) -> &'static str {
        match self {
            Self::Prod => "https://api.marquee.gs.com",
            Self::Qa => "https://api.marquee-qa.gs.com",
            Self::Dev => "https://api.marquee-dev-ext.gs.com",
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PROD" | "PRODUCTION" => Ok(Self::Prod),
            "QA" => Ok(Self::Qa),
            "DEV" => Ok(Self::Dev),
            other => Err(Error::validation(format!(
                "unknown Marquee environment {other:?}, expected PROD, QA or DEV"
            ))),
        }
    }
}

/// Configuration for [`Session`]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Version segment prefixed to every request path. The default is `v1`.
    #[builder(into, default = "v1".to_owned())]
    api_version: String,
    /// Overall timeout of a single request. The default is sixty-five (65) seconds.
    #[builder(default = Duration::from_secs(65))]
    timeout: Duration,
    /// Sent as `X-Application` so Marquee can attribute traffic.
    #[builder(into, default = DEFAULT_APPLICATION.to_owned())]
    application: String,
    /// OAuth bearer token, sent as a sensitive `Authorization` header when present.
    access_token: Option<SecretString>,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    /// Reads the application name and access token from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Config::builder()
            .maybe_application(std::env::var(APPLICATION_VAR).ok())
            .maybe_access_token(std::env::var(ACCESS_TOKEN_VAR).ok().map(SecretString::from))
            .build()
    }
}

/// An HTTP session against one Marquee host.
///
/// Cheap to clone; every clone shares the same connection pool.
#[derive(Clone, Debug)]
pub struct Session {
    host: Url,
    api_version: String,
    client: ReqwestClient,
}

impl Session {
    /// Creates a session against an explicit host such as `https://api.marquee.gs.com`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, a configured header value is not a valid
    /// header, or the HTTP client cannot be created.
    pub fn new(host: &str, config: Config) -> Result<Session> {
        let mut headers = HeaderMap::new();

        headers.insert(header::USER_AGENT, HeaderValue::from_static("marquee-client-sdk-rs"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("X-Application", HeaderValue::from_str(&config.application)?);

        if let Some(token) = &config.access_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            host: Url::parse(host)?,
            api_version: config.api_version,
            client,
        })
    }

    /// Creates a session against the API gateway of `environment`.
    ///
    /// # Errors
    ///
    /// See [`Session::new`].
    pub fn for_environment(environment: Environment, config: Config) -> Result<Session> {
        Session::new(environment.api_url(), config)
    }

    /// Creates a session from `MARQUEE_HOST` or, failing that, `MARQUEE_ENVIRONMENT`
    /// (defaulting to production), with the [`Config::from_env`] configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment name is unknown or the session cannot be built.
    pub fn from_env() -> Result<Session> {
        let config = Config::from_env();

        if let Ok(host) = std::env::var(HOST_VAR) {
            return Session::new(&host, config);
        }

        let environment = match std::env::var(ENVIRONMENT_VAR) {
            Ok(name) => name.parse()?,
            Err(_) => Environment::default(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(%environment, "creating Marquee session from environment");

        Session::for_environment(environment, config)
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Returns the version segment prefixed to request paths.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    fn url(&self, path: &str) -> String {
        let host = self.host.as_str().trim_end_matches('/');
        let separator = if path.starts_with('/') { "" } else { "/" };

        format!("{host}/{}{separator}{path}", self.api_version)
    }

    /// Issues `GET {path}` with `query` form-encoded into the URL.
    ///
    /// # Errors
    ///
    /// Returns a [`Status`](crate::error::Kind::Status) error on a non-2xx answer and an
    /// internal error when the body cannot be decoded into `Res`.
    pub async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        path: &str,
        query: &Req,
    ) -> Result<Res> {
        let url = format!("{}{}", self.url(path), query.query_params());
        let request = self.client.request(Method::GET, url).build()?;

        crate::request(&self.client, request).await
    }

    /// Issues `POST {path}` with `body` as JSON.
    ///
    /// # Errors
    ///
    /// See [`Session::get`].
    pub async fn post<Body: Serialize + ?Sized, Res: DeserializeOwned>(
        &self,
        path: &str,
        body: &Body,
    ) -> Result<Res> {
        let request = self
            .client
            .request(Method::POST, self.url(path))
            .json(body)
            .build()?;

        crate::request(&self.client, request).await
    }

    /// Issues `PUT {path}` with `body` as JSON.
    ///
    /// # Errors
    ///
    /// See [`Session::get`].
    pub async fn put<Body: Serialize + ?Sized, Res: DeserializeOwned>(
        &self,
        path: &str,
        body: &Body,
    ) -> Result<Res> {
        let request = self
            .client
            .request(Method::PUT, self.url(path))
            .json(body)
            .build()?;

        crate::request(&self.client, request).await
    }

    /// Issues `DELETE {path}`. An empty answer decodes as an empty JSON object.
    ///
    /// # Errors
    ///
    /// See [`Session::get`].
    pub async fn delete<Res: DeserializeOwned>(&self, path: &str) -> Result<Res> {
        let request = self.client.request(Method::DELETE, self.url(path)).build()?;

        crate::request(&self.client, request).await
    }
}

/// The path of the resource `id` within `collection`, e.g. `/plots/{id}`.
///
/// `id` is percent-encoded as a single path segment, so ids containing `/`, `?` or `#`
/// still address that one resource.
pub(crate) fn resource_path(collection: &str, id: &str) -> Result<String> {
    let mut url = Url::parse("marquee:/")?;
    url.path_segments_mut()
        .map_err(|()| Error::validation(format!("cannot build a path below {collection}")))?
        .extend(collection.split('/').filter(|segment| !segment.is_empty()))
        .push(id);

    Ok(url.path().to_owned())
}
