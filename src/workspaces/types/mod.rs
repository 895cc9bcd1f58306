//! Types for the Marquee markets workspaces service.

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

use super::layout::Layout;
use crate::Result;
use crate::base::Properties;
use crate::common::Entitlements;
use crate::serde_helpers::FlexibleDateTime;

pub mod request;

wire_enum! {
    /// Kinds of content a workspace can hold.
    pub enum ComponentType {
        Article => "article",
        Commentary => "commentary",
        Container => "container",
        Datagrid => "datagrid",
        Legend => "legend",
        Market => "market",
        Monitor => "monitor",
        Plot => "plot",
        Promo => "promo",
        RelatedLink => "relatedLink",
        Screen => "screen",
        Stress => "stress",
        Treemap => "treemap",
    }
}

/// A piece of content placed by the workspace layout.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkspaceComponent {
    /// Id of the underlying entity, e.g. a plot id for [`ComponentType::Plot`].
    #[builder(into)]
    pub id: String,
    #[serde(rename = "type")]
    pub type_: ComponentType,
    /// Component specific settings such as `height` or `hideTitle`.
    pub parameters: Option<Properties>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub tags: Vec<String>,
}

/// A link to another workspace, shown as a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkspaceTab {
    /// Id of the linked workspace.
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub name: String,
}

/// Content and arrangement of a workspace.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkspaceParameters {
    /// Layout string, see [`layout`](super::layout).
    #[serde(default)]
    #[builder(into, default)]
    pub layout: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub components: Vec<WorkspaceComponent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub tabs: Vec<WorkspaceTab>,
    #[builder(into)]
    pub disclaimer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub maintainers: Vec<String>,
    pub can_share: Option<bool>,
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Properties,
}

impl WorkspaceParameters {
    /// Parameters placing `components` on an evenly split grid, `per_row` to a row.
    ///
    /// # Errors
    ///
    /// See [`Layout::from_grid`].
    pub fn grid(components: Vec<WorkspaceComponent>, per_row: usize) -> Result<Self> {
        let layout = Layout::from_grid(per_row, components.len())?;
        Ok(WorkspaceParameters::builder()
            .layout(layout.to_string())
            .components(components)
            .build())
    }

    /// The parsed layout.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the layout string is malformed.
    pub fn parsed_layout(&self) -> Result<Layout> {
        Layout::parse(&self.layout)
    }

    /// Checks that the layout is well formed and places each component at most once.
    ///
    /// # Errors
    ///
    /// See [`Layout::parse`] and [`Layout::validate`].
    pub fn validate(&self) -> Result<()> {
        self.parsed_layout()?.validate(self.components.len())
    }

    /// Components in the order the layout places them.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the layout string is malformed.
    pub fn placed_components(&self) -> Result<Vec<&WorkspaceComponent>> {
        Ok(self
            .parsed_layout()?
            .components()
            .into_iter()
            .filter_map(|index| self.components.get(index))
            .collect())
    }
}

/// A markets workspace.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Workspace {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub id: Option<String>,
    /// Short unique name used in workspace URLs.
    #[builder(into)]
    pub alias: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub parameters: WorkspaceParameters,
    #[builder(into)]
    pub folder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub tags: Vec<String>,
    pub entitlements: Option<Entitlements>,
    #[builder(into)]
    pub owner_id: Option<String>,
    #[serde_as(as = "Option<FlexibleDateTime>")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<FlexibleDateTime>")]
    pub last_updated_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Properties,
}
