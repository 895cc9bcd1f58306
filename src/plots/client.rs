use super::types::Plot;
use super::types::request::PlotsRequest;
use crate::Result;
use crate::common::{DeleteResponse, Results};
use crate::error::Error;
use crate::session::{Session, resource_path};

/// HTTP client for the Marquee plots service (`/plots`).
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

    /// Fetches up to `limit` plots visible to the caller.
    pub async fn get_many_plots(&self, limit: u32) -> Result<Vec<Plot>> {
        let request = PlotsRequest::builder().limit(limit).build();
        self.plots(&request).await
    }

    /// Fetches the plots matching `request`.
    pub async fn plots(&self, request: &PlotsRequest) -> Result<Vec<Plot>> {
        let page: Results<Plot> = self.session.get("/plots", request).await?;
        Ok(page.into_results())
    }

    pub async fn get_plot(&self, plot_id: &str) -> Result<Plot> {
        self.session.get(&resource_path("/plots", plot_id)?, &()).await
    }

    pub async fn create_plot(&self, plot: &Plot) -> Result<Plot> {
        self.session.post("/plots", plot).await
    }

    /// Replaces the stored plot with `plot`, addressed by its id.
    ///
    /// # Errors
    ///
    /// Returns a validation error without calling the API if `plot` has no id.
    pub async fn update_plot(&self, plot: &Plot) -> Result<Plot> {
        let id = plot
            .id
            .as_deref()
            .ok_or_else(|| Error::validation("plot id is required to update a plot"))?;

        self.session.put(&resource_path("/plots", id)?, plot).await
    }

    pub async fn delete_plot(&self, plot_id: &str) -> Result<DeleteResponse> {
        self.session.delete(&resource_path("/plots", plot_id)?).await
    }
}
