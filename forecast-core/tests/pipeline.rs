use nws_forecast_core::{
    ClientConfig, Endpoints, LookupFailure, NwsProvider, WeatherError, WeatherProvider,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUGGEST: &str = "/arcgis/rest/services/World/GeocodeServer/suggest";
const FIND: &str = "/arcgis/rest/services/World/GeocodeServer/find";
const FORECAST: &str = "/MapClick.php";

const PAGE: &str = include_str!("fixtures/mapclick.html");

fn provider_for(server: &MockServer) -> NwsProvider {
    NwsProvider::new(ClientConfig {
        user_agent: "pipeline-test/1.0".into(),
        timeout: Some(std::time::Duration::from_secs(5)),
        endpoints: Endpoints::with_base_url(&server.uri()),
    })
    .unwrap()
}

async fn mount_suggest(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(SUGGEST))
        .and(query_param("text", "53226"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_find(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(FIND))
        .and(query_param("text", "53226, Milwaukee, WI, USA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn one_location() -> serde_json::Value {
    json!({
        "locations": [{
            "name": "53226, Milwaukee, Wisconsin",
            "extent": {"xmin": -87.9, "ymin": 43.0, "xmax": -87.8, "ymax": 43.1}
        }]
    })
}

#[tokio::test]
async fn full_lookup_returns_periods_and_advisories() {
    let server = MockServer::start().await;

    mount_suggest(&server, json!({"suggestions": [{"text": "53226, Milwaukee, WI, USA"}]})).await;
    mount_find(&server, one_location()).await;
    Mock::given(method("GET"))
        .and(path(FORECAST))
        .and(query_param("lat", "43"))
        .and(query_param("lon", "-87.9"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let result = provider_for(&server).get_forecast("53226").await.unwrap();

    let labels: Vec<_> = result.periods.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["Today", "Tonight", "Saturday"]);

    assert_eq!(result.periods[0].temperature, "High: 33 °F");
    assert_eq!(result.periods[0].short_description, "Snow");
    assert!(result.periods[0].long_description.starts_with("Snow. High near 33."));
    assert!(result.periods[1].long_description.starts_with("Snow likely"));
    assert_eq!(result.periods[2].long_description, "");

    assert_eq!(result.advisories.len(), 1);
    assert_eq!(
        result.advisories[0].description,
        "Winter Storm Warning until January 10, 06:00pm"
    );
}

#[tokio::test]
async fn ambiguous_city_stops_the_pipeline() {
    let server = MockServer::start().await;

    mount_suggest(&server, json!({"suggestions": [{"text": "a"}, {"text": "b"}]})).await;
    Mock::given(path(FIND)).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;
    Mock::given(path(FORECAST))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = provider_for(&server).get_forecast("53226").await.unwrap_err();

    assert!(matches!(
        err,
        WeatherError::InvalidCityResult(LookupFailure::MatchCount(2))
    ));
}

#[tokio::test]
async fn unknown_location_keeps_lat_long_error_kind() {
    let server = MockServer::start().await;

    mount_suggest(&server, json!({"suggestions": [{"text": "53226, Milwaukee, WI, USA"}]})).await;
    mount_find(&server, json!({"locations": []})).await;
    Mock::given(path(FORECAST))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = provider_for(&server).get_forecast("53226").await.unwrap_err();

    assert!(matches!(
        err,
        WeatherError::InvalidLatLongResult(LookupFailure::MatchCount(0))
    ));
}

#[tokio::test]
async fn forecast_failure_keeps_parse_error_kind() {
    let server = MockServer::start().await;

    mount_suggest(&server, json!({"suggestions": [{"text": "53226, Milwaukee, WI, USA"}]})).await;
    mount_find(&server, one_location()).await;
    Mock::given(path(FORECAST))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let err = provider_for(&server).get_forecast("53226").await.unwrap_err();

    assert!(matches!(err, WeatherError::WeatherParse(LookupFailure::Status { .. })));
}

#[tokio::test]
async fn page_without_forecast_markup_is_an_empty_result() {
    let server = MockServer::start().await;

    mount_suggest(&server, json!({"suggestions": [{"text": "53226, Milwaukee, WI, USA"}]})).await;
    mount_find(&server, one_location()).await;
    Mock::given(path(FORECAST))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>Maintenance</body></html>"))
        .mount(&server)
        .await;

    let result = provider_for(&server).get_forecast("53226").await.unwrap();

    assert!(result.is_empty());
}
