use crate::{ClientConfig, ForecastResult, WeatherClient, WeatherError, pipeline};
use async_trait::async_trait;
use std::fmt::Debug;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_forecast(&self, query: &str) -> Result<ForecastResult, WeatherError>;
}

/// Forecasts scraped from forecast.weather.gov, located through ArcGIS.
#[derive(Debug, Clone)]
pub struct NwsProvider {
    client: WeatherClient,
}

impl NwsProvider {
    pub fn new(config: ClientConfig) -> Result<Self, WeatherError> {
        Ok(Self { client: WeatherClient::new(config)? })
    }

    pub fn client(&self) -> &WeatherClient {
        &self.client
    }
}

#[async_trait]
impl WeatherProvider for NwsProvider {
    async fn get_forecast(&self, query: &str) -> Result<ForecastResult, WeatherError> {
        pipeline::run(&self.client, query).await
    }
}
