use crate::{
    client::WeatherClient, error::WeatherError, extract::extract_forecast, model::ForecastResult,
};

/// Look up the forecast for a zip code or place name.
///
/// Runs city lookup, lat/long lookup, page fetch and extraction in order.
/// The first failing stage ends the run and its error is returned as is.
pub async fn run(client: &WeatherClient, query: &str) -> Result<ForecastResult, WeatherError> {
    let city = client.resolve_city(query).await?;
    tracing::info!(%city, "resolved location");

    let coord = client.resolve_coordinate(&city).await?;
    tracing::info!(lat = coord.lat, long = coord.long, "resolved coordinate");

    let page = client.fetch_forecast_page(Some(&coord)).await?;
    extract_forecast(Some(&page))
}
