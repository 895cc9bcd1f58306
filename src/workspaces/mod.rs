//! Marquee markets workspaces.
//!
//! **Feature flag:** `workspaces` (on by default)
//!
//! A workspace is a page of [`WorkspaceComponent`](types::WorkspaceComponent)s arranged by a
//! layout string; the [`layout`] module parses, renders and validates those strings. The
//! client validates layouts locally before creating or updating a workspace.
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET /workspaces/markets` | List workspaces |
//! | `GET /workspaces/markets/{id}` | Get workspace by id |
//! | `POST /workspaces/markets` | Create a workspace |
//! | `PUT /workspaces/markets/{id}` | Update a workspace |
//! | `DELETE /workspaces/markets/{id}` | Delete a workspace |
//!
//! # Example
//!
//! ```no_run
//! use marquee_client_sdk::Session;
//! use marquee_client_sdk::workspaces::Client;
//! use marquee_client_sdk::workspaces::types::{
//!     ComponentType, Workspace, WorkspaceComponent, WorkspaceParameters,
//! };
//!
//! # async fn example() -> marquee_client_sdk::Result<()> {
//! let client = Client::new(Session::from_env()?);
//!
//! let plots = ["PLOT1", "PLOT2", "PLOT3", "PLOT4"]
//!     .into_iter()
//!     .map(|id| WorkspaceComponent::builder().id(id).type_(ComponentType::Plot).build())
//!     .collect();
//! let workspace = Workspace::builder()
//!     .name("Macro dashboard")
//!     .alias("macro-dashboard")
//!     .parameters(WorkspaceParameters::grid(plots, 2)?)
//!     .build();
//!
//! let created = client.create_workspace(&workspace).await?;
//! println!("created {:?}", created.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod layout;
pub mod types;

pub use client::Client;
