use reqwest::{Method, StatusCode};

use super::types::Workspace;
use super::types::request::WorkspacesRequest;
use crate::Result;
use crate::common::{DeleteResponse, Results};
use crate::error::Error;
use crate::session::{Session, resource_path};

const WORKSPACES_PATH: &str = "/workspaces/markets";

/// HTTP client for the Marquee markets workspaces service (`/workspaces/markets`).
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

    /// Fetches the workspaces matching `request`.
    pub async fn get_workspaces(&self, request: &WorkspacesRequest) -> Result<Vec<Workspace>> {
        let page: Results<Workspace> = self.session.get(WORKSPACES_PATH, request).await?;
        Ok(page.into_results())
    }

    pub async fn get_workspace(&self, workspace_id: &str) -> Result<Workspace> {
        self.session
            .get(&resource_path(WORKSPACES_PATH, workspace_id)?, &())
            .await
    }

    /// Fetches the workspace registered under `alias`.
    ///
    /// # Errors
    ///
    /// Returns a `404 Not Found` status error if no workspace has that alias.
    pub async fn get_workspace_by_alias(&self, alias: &str) -> Result<Workspace> {
        let request = WorkspacesRequest::builder()
            .alias(vec![alias.to_owned()])
            .build();

        self.get_workspaces(&request)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                Error::status(
                    StatusCode::NOT_FOUND,
                    Method::GET,
                    format!("/{}{WORKSPACES_PATH}", self.session.api_version()),
                    format!("no workspace with alias {alias}"),
                )
            })
    }

    /// Creates `workspace` after checking its layout.
    ///
    /// # Errors
    ///
    /// Returns a validation error without calling the API if the layout is invalid.
    pub async fn create_workspace(&self, workspace: &Workspace) -> Result<Workspace> {
        workspace.parameters.validate()?;

        self.session.post(WORKSPACES_PATH, workspace).await
    }

    /// Replaces the stored workspace with `workspace`, addressed by its id.
    ///
    /// # Errors
    ///
    /// Returns a validation error without calling the API if `workspace` has no id or its
    /// layout is invalid.
    pub async fn update_workspace(&self, workspace: &Workspace) -> Result<Workspace> {
        let id = workspace
            .id
            .as_deref()
            .ok_or_else(|| Error::validation("workspace id is required to update a workspace"))?;
        workspace.parameters.validate()?;

        self.session
            .put(&resource_path(WORKSPACES_PATH, id)?, workspace)
            .await
    }

    pub async fn delete_workspace(&self, workspace_id: &str) -> Result<DeleteResponse> {
        self.session
            .delete(&resource_path(WORKSPACES_PATH, workspace_id)?)
            .await
    }
}
