use httpmock::prelude::*;
use serde_json::json;
use tickstat_core::{PriceSource, TickstatError};
use tickstat_rest::RestSource;
use url::Url;

#[tokio::test]
async fn universe_decodes_the_name_to_symbol_map() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/stocks");
            then.status(200).json_body(json!({
                "stocks": {
                    "Apple Inc.": "AAPL",
                    "Microsoft Corporation": "MSFT"
                }
            }));
        })
        .await;

    let source = RestSource::builder(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap();
    let universe = source.universe().await.unwrap();

    mock.assert_async().await;
    assert_eq!(universe.len(), 2);
    assert_eq!(universe.symbol("Apple Inc."), Some("AAPL"));
}

#[tokio::test]
async fn universe_failures_propagate_instead_of_degrading() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/stocks");
            then.status(503);
        })
        .await;

    let source = RestSource::builder(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap();
    let err = source.universe().await.unwrap_err();
    assert!(matches!(err, TickstatError::Upstream { .. }));
}
