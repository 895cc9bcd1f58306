#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Query filters for `GET /plots`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PlotsRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub id: Vec<String>,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub folder_name: Option<String>,
    #[builder(into)]
    pub owner_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToQueryParams as _;

    #[test]
    fn plots_request_encodes_filters() {
        let request = PlotsRequest::builder()
            .limit(5)
            .folder_name("Rates desk")
            .id(vec!["P1".to_owned(), "P2".to_owned()])
            .build();

        assert_eq!(
            request.query_params(),
            "?limit=5&id=P1&id=P2&folderName=Rates+desk"
        );
    }
}
