//! Connector and option provider tests against a local mock WMS.

use std::sync::Arc;
use std::time::Duration;

use leaflet_app::error::{INVALID_URL_MESSAGE, NOT_WMS_MESSAGE};
use leaflet_app::metrics::MetricsCollector;
use leaflet_app::options::{layer_options, LAYER_PLACEHOLDER};
use leaflet_app::session_cache::SessionCache;
use leaflet_app::{AppError, ConnectOutcome, FormParams, HttpFetcher, WmsConnector};
use test_utils::{fixtures, unreachable_url, MockResponse, MockWmsServer};
use wms_common::{WmsError, WmsVersion};

fn fetcher(max_body_bytes: usize) -> HttpFetcher {
    HttpFetcher::new(Duration::from_secs(5), Duration::from_secs(2), max_body_bytes).unwrap()
}

fn connector() -> WmsConnector {
    let fetcher = fetcher(1024 * 1024);
    WmsConnector::new(
        Arc::new(fetcher),
        SessionCache::disabled(),
        Arc::new(MetricsCollector::new()),
    )
}

fn params(url: &str, version: WmsVersion) -> FormParams {
    let mut params = FormParams::default();
    params.wms_details.wms_input = Some(url.to_string());
    params.wms_details.wms_version = version;
    params
}

// ============================================================================
// Connection outcomes
// ============================================================================

#[tokio::test]
async fn test_connect_1_3_0() {
    let server = MockWmsServer::capabilities(fixtures::CAPABILITIES_1_3_0).await;

    let session = connector()
        .connect(&server.url(), WmsVersion::V1_3_0)
        .await
        .into_session()
        .unwrap();

    let details = session.details();
    assert_eq!(details.title, fixtures::HIKING_TITLE);
    assert_eq!(details.layers, fixtures::HIKING_LAYERS);
    assert_eq!(details.base_url, server.url());
    assert_eq!(
        server.queries(),
        vec!["SERVICE=WMS&REQUEST=GetCapabilities&VERSION=1.3.0"]
    );
}

#[tokio::test]
async fn test_connect_1_1_1() {
    let server = MockWmsServer::capabilities(fixtures::CAPABILITIES_1_1_1).await;

    let outcome = connector().connect(&server.url(), WmsVersion::V1_1_1).await;
    assert!(outcome.is_connected());
    assert_eq!(outcome.session().unwrap().details().title, fixtures::HIKING_TITLE);
    assert!(server.queries()[0].ends_with("VERSION=1.1.1"));
}

#[tokio::test]
async fn test_user_query_params_are_replaced() {
    let server = MockWmsServer::capabilities(fixtures::CAPABILITIES_1_3_0).await;
    let url = format!(
        "{}?version=1.1.1&request=getcapabilities&service=wms&map=hiking",
        server.url()
    );

    let session = connector()
        .connect(&url, WmsVersion::V1_3_0)
        .await
        .into_session()
        .unwrap();

    assert_eq!(session.base_url, format!("{}?map=hiking", server.url()));
    assert_eq!(
        server.queries(),
        vec!["map=hiking&SERVICE=WMS&REQUEST=GetCapabilities&VERSION=1.3.0"]
    );
}

#[tokio::test]
async fn test_unreachable_host() {
    let outcome = connector().connect(&unreachable_url(), WmsVersion::V1_3_0).await;
    assert!(matches!(outcome, ConnectOutcome::Unreachable(_)));
    assert_eq!(outcome.into_session().unwrap_err().to_string(), INVALID_URL_MESSAGE);
}

#[tokio::test]
async fn test_http_error_status_is_unreachable() {
    let server = MockWmsServer::start(MockResponse::status(404)).await;
    let outcome = connector().connect(&server.url(), WmsVersion::V1_3_0).await;
    assert_eq!(outcome.label(), "unreachable");
}

#[tokio::test]
async fn test_oversized_capabilities_are_unreachable() {
    let server = MockWmsServer::capabilities(fixtures::CAPABILITIES_1_3_0).await;
    let connector = WmsConnector::new(
        Arc::new(fetcher(64)),
        SessionCache::disabled(),
        Arc::new(MetricsCollector::new()),
    );

    let outcome = connector.connect(&server.url(), WmsVersion::V1_3_0).await;
    assert!(matches!(
        outcome,
        ConnectOutcome::Unreachable(WmsError::ResponseTooLarge { limit: 64, .. })
    ));
    assert_eq!(outcome.into_session().unwrap_err().to_string(), INVALID_URL_MESSAGE);
}

#[tokio::test]
async fn test_non_wms_documents() {
    for body in [fixtures::HTML_PAGE, fixtures::ATOM_FEED, fixtures::PLAIN_TEXT] {
        let server = MockWmsServer::start(MockResponse::xml(body)).await;
        let outcome = connector().connect(&server.url(), WmsVersion::V1_3_0).await;
        assert!(
            matches!(outcome, ConnectOutcome::NotWms(_)),
            "expected not_wms for {:?}, got {}",
            body,
            outcome.label()
        );
        assert_eq!(outcome.into_session().unwrap_err().to_string(), NOT_WMS_MESSAGE);
    }
}

#[tokio::test]
async fn test_service_exception_is_rejected() {
    let server = MockWmsServer::capabilities(fixtures::SERVICE_EXCEPTION).await;
    let outcome = connector().connect(&server.url(), WmsVersion::V1_3_0).await;
    assert_eq!(outcome.label(), "rejected");
    assert!(matches!(outcome.into_session(), Err(AppError::Upstream(_))));
}

#[tokio::test]
async fn test_metrics_count_outcomes() {
    let server = MockWmsServer::capabilities(fixtures::CAPABILITIES_1_3_0).await;
    let metrics = Arc::new(MetricsCollector::new());
    let connector = WmsConnector::new(
        Arc::new(fetcher(1024 * 1024)),
        SessionCache::disabled(),
        metrics.clone(),
    );

    connector.connect(&server.url(), WmsVersion::V1_3_0).await;
    connector.connect("ftp://example.com/wms", WmsVersion::V1_3_0).await;

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.connects_ok, 1);
    assert_eq!(snapshot.connects_unreachable, 1);
}

// ============================================================================
// Layer options
// ============================================================================

#[tokio::test]
async fn test_options_match_inspector_layers() {
    let server = MockWmsServer::capabilities(fixtures::CAPABILITIES_1_3_0).await;
    let connector = connector();

    let options = layer_options(&connector, &params(&server.url(), WmsVersion::V1_3_0)).await;
    let details = connector
        .connect(&server.url(), WmsVersion::V1_3_0)
        .await
        .into_session()
        .unwrap()
        .details();
    assert_eq!(options, details.layers);
}

#[tokio::test]
async fn test_options_empty_url_does_not_connect() {
    let server = MockWmsServer::capabilities(fixtures::CAPABILITIES_1_3_0).await;

    let options = layer_options(&connector(), &FormParams::default()).await;
    assert_eq!(options, vec![LAYER_PLACEHOLDER]);
    assert_eq!(server.request_count(), 0);
}

#[tokio::test]
async fn test_options_never_fail() {
    let not_wms = MockWmsServer::start(MockResponse::html(fixtures::HTML_PAGE)).await;
    let rejected = MockWmsServer::capabilities(fixtures::SERVICE_EXCEPTION).await;
    let empty = MockWmsServer::capabilities(fixtures::CAPABILITIES_NO_LAYERS).await;
    let connector = connector();

    for url in [
        unreachable_url(),
        "not a url".to_string(),
        not_wms.url(),
        rejected.url(),
        empty.url(),
    ] {
        let options = layer_options(&connector, &params(&url, WmsVersion::V1_3_0)).await;
        assert_eq!(options, vec![LAYER_PLACEHOLDER], "url: {}", url);
    }
}
