use async_stream::try_stream;
use futures::Stream;
#[cfg(feature = "tracing")]
use tracing::warn;

use super::types::request::{CountriesRequest, SubdivisionsRequest};
use super::types::{Country, Subdivision};
use crate::Result;
use crate::common::{DeleteResponse, Results};
use crate::error::Error;
use crate::session::{Session, resource_path};

/// Largest page the countries service answers in one call.
const MAX_LIMIT: u32 = 1000;

/// HTTP client for the Marquee countries service (`/countries`).
///
/// ```no_run
/// use marquee_client_sdk::{Environment, Session, Config};
/// use marquee_client_sdk::countries::Client;
///
/// # async fn example() -> marquee_client_sdk::Result<()> {
/// let session = Session::for_environment(Environment::Prod, Config::from_env())?;
/// let client = Client::new(session);
///
/// let uk = client.get_country("GB").await?;
/// println!("{} is in {:?}", uk.name, uk.region);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    session: Session,
}

impl Client {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetches up to `limit` countries.
    pub async fn get_many_countries(&self, limit: u32) -> Result<Vec<Country>> {
        let request = CountriesRequest::builder().limit(limit).build();
        self.countries(&request).await
    }

    /// Fetches the countries matching `request`.
    pub async fn countries(&self, request: &CountriesRequest) -> Result<Vec<Country>> {
        let page: Results<Country> = self.session.get("/countries", request).await?;
        Ok(page.into_results())
    }

    pub async fn get_country(&self, country_id: &str) -> Result<Country> {
        self.session
            .get(&resource_path("/countries", country_id)?, &())
            .await
    }

    pub async fn create_country(&self, country: &Country) -> Result<Country> {
        self.session.post("/countries", country).await
    }

    /// Replaces the stored country with `country`, addressed by its id.
    ///
    /// # Errors
    ///
    /// Returns a validation error without calling the API if `country` has no id.
    pub async fn update_country(&self, country: &Country) -> Result<Country> {
        let id = country
            .id
            .as_deref()
            .ok_or_else(|| Error::validation("country id is required to update a country"))?;

        self.session.put(&resource_path("/countries", id)?, country).await
    }

    pub async fn delete_country(&self, country_id: &str) -> Result<DeleteResponse> {
        self.session
            .delete(&resource_path("/countries", country_id)?)
            .await
    }

    /// Fetches up to `limit` subdivisions.
    pub async fn get_many_subdivisions(&self, limit: u32) -> Result<Vec<Subdivision>> {
        let request = SubdivisionsRequest::builder().limit(limit).build();
        self.subdivisions(&request).await
    }

    /// Fetches the subdivisions matching `request`.
    pub async fn subdivisions(&self, request: &SubdivisionsRequest) -> Result<Vec<Subdivision>> {
        let page: Results<Subdivision> =
            self.session.get("/countries/subdivisions", request).await?;
        Ok(page.into_results())
    }

    pub async fn get_subdivision(&self, subdivision_id: &str) -> Result<Subdivision> {
        self.session
            .get(&resource_path("/countries/subdivisions", subdivision_id)?, &())
            .await
    }

    pub async fn create_subdivision(&self, subdivision: &Subdivision) -> Result<Subdivision> {
        self.session
            .post("/countries/subdivisions", subdivision)
            .await
    }

    /// Replaces the stored subdivision with `subdivision`, addressed by its id.
    ///
    /// # Errors
    ///
    /// Returns a validation error without calling the API if `subdivision` has no id.
    pub async fn update_subdivision(&self, subdivision: &Subdivision) -> Result<Subdivision> {
        let id = subdivision.id.as_deref().ok_or_else(|| {
            Error::validation("subdivision id is required to update a subdivision")
        })?;

        self.session
            .put(&resource_path("/countries/subdivisions", id)?, subdivision)
            .await
    }

    pub async fn delete_subdivision(&self, subdivision_id: &str) -> Result<DeleteResponse> {
        self.session
            .delete(&resource_path("/countries/subdivisions", subdivision_id)?)
            .await
    }

    /// Streams every country, fetching `page_size` records per call.
    ///
    /// Pages are requested with increasing offsets until a short page comes back. Pages larger
    /// than the service maximum are clamped to it.
    ///
    /// ```no_run
    /// use futures::StreamExt as _;
    /// use marquee_client_sdk::Session;
    /// use marquee_client_sdk::countries::Client;
    ///
    /// # async fn example() -> marquee_client_sdk::Result<()> {
    /// let client = Client::new(Session::from_env()?);
    /// let stream = client.stream_countries(200);
    /// futures::pin_mut!(stream);
    ///
    /// while let Some(country) = stream.next().await {
    ///     println!("{}", country?.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn stream_countries(&self, page_size: u32) -> impl Stream<Item = Result<Country>> + '_ {
        let limit = if page_size > MAX_LIMIT {
            #[cfg(feature = "tracing")]
            warn!(
                "Supplied {page_size} page size, the countries service only allows for maximum {MAX_LIMIT} responses per call, defaulting to {MAX_LIMIT}"
            );

            MAX_LIMIT
        } else {
            page_size.max(1)
        };

        try_stream! {
            let mut offset = 0;

            loop {
                let request = CountriesRequest::builder()
                    .limit(limit)
                    .offset(offset)
                    .build();
                let data = self.countries(&request).await?;

                let count = u32::try_from(data.len()).unwrap_or(u32::MAX);

                for item in data {
                    yield item;
                }

                // Stop if we received fewer items than requested (last page)
                if count < limit {
                    break;
                }

                offset += count;
            }
        }
    }
}
