#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Query filters for `GET /workspaces/markets`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkspacesRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub alias: Vec<String>,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToQueryParams as _;

    #[test]
    fn workspaces_request_encodes_filters() {
        let request = WorkspacesRequest::builder()
            .alias(vec!["rates".to_owned()])
            .owner_id("guid:abc")
            .build();

        assert_eq!(request.query_params(), "?alias=rates&ownerId=guid%3Aabc");
        assert_eq!(WorkspacesRequest::default().query_params(), "");
    }
}
