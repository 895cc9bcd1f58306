#![cfg(feature = "countries")]
#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]

//! Integration tests for the countries client.
//!
//! These tests use `httpmock` to mock HTTP responses, ensuring deterministic
//! and fast test execution without requiring network access.

pub mod common;

mod countries {
    use futures::StreamExt as _;
    use httpmock::Method::{DELETE, GET, POST, PUT};
    use httpmock::MockServer;
    use marquee_client_sdk::common::Region;
    use marquee_client_sdk::countries::Client;
    use marquee_client_sdk::countries::types::Country;
    use marquee_client_sdk::countries::types::request::CountriesRequest;
    use marquee_client_sdk::error::Kind;
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common;

    #[tokio::test]
    async fn get_many_countries_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/countries")
                .query_param("limit", "100");
            then.status(StatusCode::OK).json_body(json!({
                "totalResults": 2,
                "results": [
                    {
                        "id": "GB",
                        "name": "United Kingdom",
                        "region": "Europe",
                        "xref": {"alpha3": "GBR", "countryCode": "826"}
                    },
                    {
                        "id": "JP",
                        "name": "Japan",
                        "region": "Asia",
                        "xref": {"alpha3": "JPN", "countryCode": 392}
                    }
                ]
            }));
        });

        let countries = client.get_many_countries(100).await?;

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].id, Some("GB".to_owned()));
        assert_eq!(countries[1].region, Some(Region::Asia));
        assert_eq!(
            countries[1].xref.as_ref().unwrap().country_code,
            Some("392".to_owned())
        );
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn countries_should_send_filters() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/countries")
                .query_param("region", "Europe")
                .query_param("id", "GB")
                .query_param("id", "FR");
            then.status(StatusCode::OK)
                .json_body(json!({"results": [{"id": "GB", "name": "United Kingdom"}]}));
        });

        let request = CountriesRequest::builder()
            .region(vec![Region::Europe])
            .id(vec!["GB".to_owned(), "FR".to_owned()])
            .build();
        let countries = client.countries(&request).await?;

        assert_eq!(countries.len(), 1);
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn get_country_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/countries/GB");
            then.status(StatusCode::OK).json_body(json!({
                "id": "GB",
                "name": "United Kingdom",
                "lastUpdatedTime": "2024-03-01T12:00:00.000Z",
                "entitlements": {"view": ["guid:abc"]}
            }));
        });

        let country = client.get_country("GB").await?;

        assert_eq!(country.name, "United Kingdom");
        assert_eq!(country.entitlements.unwrap().view, ["guid:abc"]);
        assert!(country.last_updated_time.is_some());
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn get_country_should_fail_when_missing() {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        server.mock(|when, then| {
            when.method(GET).path("/v1/countries/XX");
            then.status(StatusCode::NOT_FOUND)
                .json_body(json!({"error": "not found"}));
        });

        let err = client.get_country("XX").await.unwrap_err();

        assert_eq!(err.status_code(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn create_country_should_send_wire_form() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        let mock = server.mock(|when, then| {
            when.method(POST).path("/v1/countries").json_body(json!({
                "id": "FR",
                "name": "France",
                "region": "Europe",
                "subRegion": "Western Europe"
            }));
            then.status(StatusCode::CREATED).json_body(json!({
                "id": "FR",
                "name": "France",
                "region": "Europe",
                "subRegion": "Western Europe",
                "ownerId": "guid:abc"
            }));
        });

        let country = Country::builder()
            .id("FR")
            .name("France")
            .region(Region::Europe)
            .sub_region("Western Europe")
            .build();
        let created = client.create_country(&country).await?;

        assert_eq!(created.owner_id, Some("guid:abc".to_owned()));
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn update_country_should_put_on_id() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        let mock = server.mock(|when, then| {
            when.method(PUT).path("/v1/countries/FR");
            then.status(StatusCode::OK)
                .json_body(json!({"id": "FR", "name": "French Republic"}));
        });

        let country = Country::builder().id("FR").name("French Republic").build();
        let updated = client.update_country(&country).await?;

        assert_eq!(updated.name, "French Republic");
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn update_country_without_id_should_fail_locally() {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        let mock = server.mock(|when, then| {
            when.method(PUT);
            then.status(StatusCode::OK).json_body(json!({}));
        });

        let country = Country::builder().name("Nowhere").build();
        let err = client.update_country(&country).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        mock.assert_calls(0);
    }

    #[tokio::test]
    async fn delete_country_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        let mock = server.mock(|when, then| {
            when.method(DELETE).path("/v1/countries/FR");
            then.status(StatusCode::OK).json_body(json!({"id": "FR"}));
        });

        let response = client.delete_country("FR").await?;

        assert_eq!(response.get("id"), Some(&json!("FR")));
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn stream_countries_should_page_until_short_page() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        let first = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/countries")
                .query_param("limit", "2")
                .query_param("offset", "0");
            then.status(StatusCode::OK).json_body(json!({"results": [
                {"id": "DE", "name": "Germany"},
                {"id": "FR", "name": "France"}
            ]}));
        });
        let second = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/countries")
                .query_param("limit", "2")
                .query_param("offset", "2");
            then.status(StatusCode::OK)
                .json_body(json!({"results": [{"id": "GB", "name": "United Kingdom"}]}));
        });

        let names: Vec<String> = client
            .stream_countries(2)
            .map(|country| country.map(|c| c.name))
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_, _>>()?;

        assert_eq!(names, ["Germany", "France", "United Kingdom"]);
        first.assert();
        second.assert();
        Ok(())
    }
}

mod subdivisions {
    use httpmock::Method::{DELETE, GET, POST, PUT};
    use httpmock::MockServer;
    use marquee_client_sdk::countries::Client;
    use marquee_client_sdk::countries::types::Subdivision;
    use marquee_client_sdk::error::Kind;
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common;

    #[tokio::test]
    async fn get_many_subdivisions_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/countries/subdivisions")
                .query_param("limit", "10");
            then.status(StatusCode::OK).json_body(json!({"results": [
                {"id": "GB-SCT", "name": "Scotland", "countryId": "GB"},
                {"id": "GB-WLS", "name": "Wales", "countryId": "GB"}
            ]}));
        });

        let subdivisions = client.get_many_subdivisions(10).await?;

        assert_eq!(subdivisions.len(), 2);
        assert_eq!(subdivisions[1].name, "Wales");
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn subdivision_crud_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        let body = json!({"id": "GB-SCT", "name": "Scotland", "countryId": "GB"});
        let get = server.mock(|when, then| {
            when.method(GET).path("/v1/countries/subdivisions/GB-SCT");
            then.status(StatusCode::OK).json_body(body.clone());
        });
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/countries/subdivisions")
                .json_body(body.clone());
            then.status(StatusCode::CREATED).json_body(body.clone());
        });
        let update = server.mock(|when, then| {
            when.method(PUT).path("/v1/countries/subdivisions/GB-SCT");
            then.status(StatusCode::OK).json_body(body.clone());
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE).path("/v1/countries/subdivisions/GB-SCT");
            then.status(StatusCode::NO_CONTENT);
        });

        let subdivision = client.get_subdivision("GB-SCT").await?;
        assert_eq!(subdivision.country_id, Some("GB".to_owned()));

        let created = client.create_subdivision(&subdivision).await?;
        let updated = client.update_subdivision(&created).await?;
        assert_eq!(updated, subdivision);

        let deleted = client.delete_subdivision("GB-SCT").await?;
        assert!(deleted.is_empty());

        get.assert();
        create.assert();
        update.assert();
        delete.assert();
        Ok(())
    }

    #[tokio::test]
    async fn update_subdivision_without_id_should_fail_locally() {
        let server = MockServer::start();
        let client = Client::new(common::session(&server));

        let subdivision = Subdivision::builder().name("Atlantis").build();
        let err = client.update_subdivision(&subdivision).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
    }
}
