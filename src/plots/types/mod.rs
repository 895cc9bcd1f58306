//! Types for the Marquee plots service.
//!
//! A [`Plot`] holds one or more charts, each described by [`ChartProperties`]: a chart type,
//! its [`PlotSeries`] and the [`AxisProperties`] they are drawn against.

use bon::Builder;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

use crate::base::Properties;
use crate::common::Entitlements;
use crate::serde_helpers::{FlexibleDate, FlexibleDateTime, FloatFromAny};

pub mod request;

wire_enum! {
    /// How a chart draws its series.
    pub enum PlotType {
        Line => "line",
        Bar => "bar",
        Column => "column",
        Area => "area",
        Scatter => "scatter",
        Pie => "pie",
        Table => "table",
    }
}

/// Scale and labelling of one chart axis.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AxisProperties {
    #[builder(into)]
    pub label: Option<String>,
    #[serde_as(as = "Option<FloatFromAny>")]
    pub min: Option<f64>,
    #[serde_as(as = "Option<FloatFromAny>")]
    pub max: Option<f64>,
    /// Number format of tick labels, e.g. `0.00%`.
    #[builder(into)]
    pub format: Option<String>,
    pub log_scale: Option<bool>,
    pub inverted: Option<bool>,
}

/// One plotted expression.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PlotSeries {
    /// Plot tool expression, e.g. `SPX.spot()`.
    #[builder(into)]
    pub expression: String,
    #[builder(into)]
    pub label: Option<String>,
    /// CSS colour, e.g. `#1f77b4`.
    #[builder(into)]
    pub color: Option<String>,
    /// Index into [`ChartProperties::y_axes`].
    pub axis_index: Option<u32>,
    pub visible: Option<bool>,
}

/// Layout of a single chart within a plot.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChartProperties {
    #[serde(rename = "type")]
    pub type_: Option<PlotType>,
    #[builder(into)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub series: Vec<PlotSeries>,
    pub x_axis: Option<AxisProperties>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub y_axes: Vec<AxisProperties>,
    pub show_legend: Option<bool>,
}

/// A saved plot.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Plot {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub id: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    #[builder(into)]
    pub folder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub chart_properties: Vec<ChartProperties>,
    #[serde_as(as = "Option<FlexibleDate>")]
    pub start_date: Option<NaiveDate>,
    #[serde_as(as = "Option<FlexibleDate>")]
    pub end_date: Option<NaiveDate>,
    /// Rolling start relative to today, e.g. `-1y`. Takes precedence over `start_date`.
    #[builder(into)]
    pub relative_start_date: Option<String>,
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

impl Plot {
    /// Every plotted expression, across all charts.
    pub fn expressions(&self) -> impl Iterator<Item = &str> {
        self.chart_properties
            .iter()
            .flat_map(|chart| chart.series.iter())
            .map(|series| series.expression.as_str())
    }
}
