//! Workspace layout playground.
//!
//! Parses and validates a few layout strings offline, then builds a workspace on an even grid
//! and, when a session is configured, creates it.
//!
//! ```sh
//! RUST_LOG=info cargo run --example workspace_layout --features workspaces,tracing
//! ```

use marquee_client_sdk::Session;
use marquee_client_sdk::workspaces::Client;
use marquee_client_sdk::workspaces::layout::Layout;
use marquee_client_sdk::workspaces::types::{
    ComponentType, Workspace, WorkspaceComponent, WorkspaceParameters,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    for source in [
        "r(c12($0))r(c6($1)c6($2))",
        "r(c8($0)c4(r(c6($1)c6($2))$3))",
        "r(c8($0)c8($1))",
        "r(c6($0)",
    ] {
        match Layout::parse(source).and_then(|layout| {
            layout.validate(4)?;
            Ok(layout)
        }) {
            Ok(layout) => info!(%layout, components = ?layout.components(), "valid layout"),
            Err(e) => warn!(source, error = %e, "rejected layout"),
        }
    }

    let components = ["PLOT1", "PLOT2", "PLOT3", "PLOT4", "PLOT5"]
        .into_iter()
        .map(|id| {
            WorkspaceComponent::builder()
                .id(id)
                .type_(ComponentType::Plot)
                .build()
        })
        .collect();
    let workspace = Workspace::builder()
        .name("Layout playground")
        .parameters(WorkspaceParameters::grid(components, 2)?)
        .build();
    info!(layout = %workspace.parameters.layout, "grid layout");

    if std::env::var(marquee_client_sdk::ACCESS_TOKEN_VAR).is_err() {
        info!("no access token configured, not creating the workspace");
        return Ok(());
    }

    let client = Client::new(Session::from_env()?);
    let created = client.create_workspace(&workspace).await?;
    info!(id = ?created.id, "created workspace");

    Ok(())
}
