#![cfg_attr(doc, doc = include_str!("../README.md"))]

#[macro_use]
mod macros;

pub mod base;
pub mod common;
#[cfg(feature = "countries")]
pub mod countries;
pub mod error;
#[cfg(feature = "plots")]
pub mod plots;
pub mod serde_helpers;
pub mod session;
pub mod types;
#[cfg(feature = "workspaces")]
pub mod workspaces;

use reqwest::{Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::Error;
pub use crate::session::{Config, Environment, Session};

pub type Result<T> = std::result::Result<T, Error>;

/// Environment variable holding an explicit API host, e.g. `https://api.marquee.gs.com`.
pub const HOST_VAR: &str = "MARQUEE_HOST";

/// Environment variable naming the Marquee environment (`PROD`, `QA` or `DEV`).
pub const ENVIRONMENT_VAR: &str = "MARQUEE_ENVIRONMENT";

/// Environment variable holding a pre-issued OAuth access token.
pub const ACCESS_TOKEN_VAR: &str = "MARQUEE_ACCESS_TOKEN";

/// Environment variable overriding the application name sent with every request.
pub const APPLICATION_VAR: &str = "MARQUEE_APPLICATION";

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
/// Arrays are serialized as repeated keys (`key=val1&key=val2`), which is how Marquee
/// expects multi-valued filters such as `id=A&id=B`.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
pub(crate) async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    request: Request,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    let body = response.bytes().await?;
    // DELETE calls may answer with an empty body, which reads as an empty record
    let json_value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice::<Value>(&body)?
    };
    let response_data: Option<Response> = serde_helpers::deserialize_with_warnings(json_value)?;

    if let Some(response) = response_data {
        Ok(response)
    } else {
        #[cfg(feature = "tracing")]
        tracing::warn!(method = %method, path = %path, "API resource not found");
        Err(Error::status(
            StatusCode::NOT_FOUND,
            method,
            path,
            "Unable to find requested resource",
        ))
    }
}
