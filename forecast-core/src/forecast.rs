use crate::{
    client::{RequestOrigin, WeatherClient},
    document::ForecastPage,
    error::WeatherError,
    model::Coordinate,
};

impl WeatherClient {
    /// Download the forecast.weather.gov page for `coord`.
    ///
    /// Sent as a browser navigation rather than a script fetch.
    pub async fn fetch_forecast_page(
        &self,
        coord: Option<&Coordinate>,
    ) -> Result<ForecastPage, WeatherError> {
        let Some(coord) = coord else {
            tracing::error!("forecast requested without a latitude/longitude");
            return Err(WeatherError::missing("coordinate"));
        };

        let lat = coord.lat.to_string();
        let lon = coord.long.to_string();

        let body = self
            .get_text(
                &self.endpoints().forecast,
                &[("lat", lat.as_str()), ("lon", lon.as_str())],
                RequestOrigin::Document,
            )
            .await
            .map_err(|e| {
                tracing::error!(%lat, %lon, error = %e, "forecast request failed");
                WeatherError::WeatherParse(e)
            })?;

        tracing::debug!(bytes = body.len(), "received forecast page");

        Ok(ForecastPage::parse(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::{ClientConfig, Endpoints},
        document::DocumentQuery,
        error::LookupFailure,
    };
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WeatherClient {
        WeatherClient::new(ClientConfig {
            user_agent: "test-agent/1.0".into(),
            timeout: None,
            endpoints: Endpoints::with_base_url(&server.uri()),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn missing_coordinate_is_rejected_before_any_request() {
        let server = MockServer::start().await;

        let err = client_for(&server).fetch_forecast_page(None).await.unwrap_err();

        assert!(matches!(err, WeatherError::InvalidParameter(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetches_page_as_navigation() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/MapClick.php"))
            .and(query_param("lat", "43"))
            .and(query_param("lon", "-87.9"))
            .and(header("sec-fetch-dest", "document"))
            .and(header("sec-fetch-mode", "navigate"))
            .and(header("sec-fetch-user", "?1"))
            .and(header("cache-control", "no-cache"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body><p id=\"x\">hello</p></body></html>"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let coord = Coordinate { lat: 43.0, long: -87.9 };
        let page = client_for(&server).fetch_forecast_page(Some(&coord)).await.unwrap();

        assert_eq!(page.first_text("#x"), "hello");

        // header matchers split on commas, so check the raw value here
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].headers.get("priority").unwrap(), "u=0, i");
    }

    #[tokio::test]
    async fn server_error_is_a_parse_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let coord = Coordinate { lat: 43.0, long: -87.9 };
        let err = client_for(&server).fetch_forecast_page(Some(&coord)).await.unwrap_err();

        assert!(matches!(err, WeatherError::WeatherParse(LookupFailure::Status { .. })));
    }
}
