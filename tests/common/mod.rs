#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Not every test binary uses every helper"
)]

use httpmock::MockServer;
use marquee_client_sdk::types::SecretString;
use marquee_client_sdk::{Config, Session};

pub const APPLICATION: &str = "integration-tests";
pub const ACCESS_TOKEN: &str = "test-access-token";

/// A session against `server` authenticated with [`ACCESS_TOKEN`].
#[must_use]
pub fn session(server: &MockServer) -> Session {
    let config = Config::builder()
        .application(APPLICATION)
        .access_token(SecretString::from(ACCESS_TOKEN.to_owned()))
        .build();

    Session::new(&server.base_url(), config).unwrap()
}
