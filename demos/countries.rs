//! Countries reference data explorer.
//!
//! Lists a page of countries, walks the full list page by page, then looks one country up by
//! id and prints its subdivisions.
//!
//! Point it at an environment and a token first:
//! ```sh
//! MARQUEE_ENVIRONMENT=QA MARQUEE_ACCESS_TOKEN=... \
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off \
//! cargo run --example countries --features countries,tracing
//! ```

use futures::StreamExt as _;
use marquee_client_sdk::Session;
use marquee_client_sdk::countries::Client;
use marquee_client_sdk::countries::types::request::SubdivisionsRequest;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let session = Session::from_env()?;
    info!(host = %session.host(), "connected");
    let client = Client::new(session);

    match client.get_many_countries(10).await {
        Ok(countries) => {
            for country in countries {
                info!(
                    id = ?country.id,
                    name = %country.name,
                    region = ?country.region,
                    "country"
                );
            }
        }
        Err(e) => error!(endpoint = "countries", error = %e),
    }

    let stream = client.stream_countries(100);
    futures::pin_mut!(stream);
    let mut total = 0_usize;
    while let Some(country) = stream.next().await {
        match country {
            Ok(_) => total += 1,
            Err(e) => {
                error!(endpoint = "countries", offset = total, error = %e);
                break;
            }
        }
    }
    info!(total, "streamed every country");

    let uk = client.get_country("GB").await?;
    info!(name = %uk.name, xref = ?uk.xref, "looked up by id");

    let request = SubdivisionsRequest::builder()
        .country_id(vec!["GB".to_owned()])
        .build();
    for subdivision in client.subdivisions(&request).await? {
        info!(id = ?subdivision.id, name = %subdivision.name, "subdivision");
    }

    Ok(())
}
