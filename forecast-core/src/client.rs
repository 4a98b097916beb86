use reqwest::{
    Client,
    header::{self, HeaderMap, HeaderName, HeaderValue},
};
use std::time::Duration;

use crate::error::{LookupFailure, WeatherError};

pub const DEFAULT_SUGGEST_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer/suggest";
pub const DEFAULT_FIND_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer/find";
pub const DEFAULT_FORECAST_URL: &str = "https://forecast.weather.gov/MapClick.php";

/// Firefox 130 on Windows 10.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; rv:130.0) Gecko/20100101 Firefox/130.0";

/// Upstream URLs used by the three network stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub suggest: String,
    pub find: String,
    pub forecast: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            suggest: DEFAULT_SUGGEST_URL.to_string(),
            find: DEFAULT_FIND_URL.to_string(),
            forecast: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// All three endpoints rooted at `base`, using the upstream paths.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            suggest: format!("{base}/arcgis/rest/services/World/GeocodeServer/suggest"),
            find: format!("{base}/arcgis/rest/services/World/GeocodeServer/find"),
            forecast: format!("{base}/MapClick.php"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub user_agent: String,
    /// `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    pub endpoints: Endpoints,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            endpoints: Endpoints::default(),
        }
    }
}

/// Who the request claims to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOrigin {
    /// Background fetch issued by page script.
    Script,
    /// Top-level navigation started by the user.
    Document,
}

/// Privacy and cache-busting headers sent with every request. Document
/// requests also carry the fetch metadata a browser adds on navigation.
pub fn request_headers(user_agent: &HeaderValue, origin: RequestOrigin) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::DNT, HeaderValue::from_static("1"));
    headers.insert(HeaderName::from_static("sec-gpc"), HeaderValue::from_static("1"));
    headers.insert(header::USER_AGENT, user_agent.clone());
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    if origin == RequestOrigin::Document {
        headers.insert(
            HeaderName::from_static("sec-fetch-dest"),
            HeaderValue::from_static("document"),
        );
        headers.insert(
            HeaderName::from_static("sec-fetch-mode"),
            HeaderValue::from_static("navigate"),
        );
        headers.insert(
            HeaderName::from_static("sec-fetch-site"),
            HeaderValue::from_static("same-site"),
        );
        headers.insert(HeaderName::from_static("sec-fetch-user"), HeaderValue::from_static("?1"));
        // RFC 9218, set by browsers on normal navigation
        headers.insert(HeaderName::from_static("priority"), HeaderValue::from_static("u=0, i"));
    }

    headers
}

/// HTTP transport plus the immutable configuration shared by every stage.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    user_agent: HeaderValue,
    endpoints: Endpoints,
}

impl WeatherClient {
    pub fn new(config: ClientConfig) -> Result<Self, WeatherError> {
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            WeatherError::InvalidParameter(format!(
                "user agent {:?} is not a valid header value",
                config.user_agent
            ))
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(WeatherError::Client)?;

        Ok(Self { http, user_agent, endpoints: config.endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET `url` and return the body text of a successful response.
    pub(crate) async fn get_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
        origin: RequestOrigin,
    ) -> Result<String, LookupFailure> {
        let res = self
            .http
            .get(url)
            .query(query)
            .headers(request_headers(&self.user_agent, origin))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(LookupFailure::Status { status, body: truncate_body(&body) });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
