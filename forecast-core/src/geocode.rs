//! Location lookups against the ArcGIS World geocoding service.
//!
//! Two requests are involved: `suggest` turns free text (usually a zip code)
//! into a canonical `"zip, city, state, country"` string, and `find` turns
//! that string into a bounding extent.

use serde::Deserialize;

use crate::{
    client::{RequestOrigin, WeatherClient},
    error::{LookupFailure, WeatherError},
    model::{CanonicalLocation, Coordinate},
};

/// US states plus Puerto Rico, US Virgin Islands, Guam and American Samoa.
const COUNTRY_CODES: &str = "USA,PRI,VIR,GUM,ASM";

/// Anything with an address a forecast makes sense for.
const CATEGORIES: &str = "Land Features,Bay,Channel,Cove,Dam,Delta,Gulf,Lagoon,Lake,Ocean,Reef,\
Reservoir,Sea,Sound,Strait,Waterfall,Wharf,Amusement Park,Historical Monument,Landmark,\
Tourist Attraction,Zoo,College,Beach,Campground,Golf Course,Harbor,Nature Reserve,\
Other Parks and Outdoors,Park,Racetrack,Scenic Overlook,Ski Resort,Sports Center,Sports Field,\
Wildlife Reserve,Airport,Ferry,Marina,Pier,Port,Resort,Postal,Populated Place";

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    #[serde(default)]
    suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
struct Suggestion {
    text: String,
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    #[serde(default)]
    locations: Vec<FoundLocation>,
}

#[derive(Debug, Deserialize)]
struct FoundLocation {
    #[serde(default)]
    name: String,
    extent: Extent,
}

/// Only the minimum corner is used; `xmax`/`ymax` are ignored on decode.
#[derive(Debug, Deserialize)]
struct Extent {
    xmin: f64,
    ymin: f64,
}

/// Decode a `suggest` response body that must hold exactly one suggestion.
pub fn decode_city(body: &str) -> Result<CanonicalLocation, WeatherError> {
    let parsed: SuggestResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::InvalidCityResult(e.into()))?;

    match <[Suggestion; 1]>::try_from(parsed.suggestions) {
        Ok([only]) => Ok(CanonicalLocation::new(only.text)),
        Err(all) => Err(WeatherError::InvalidCityResult(LookupFailure::MatchCount(all.len()))),
    }
}

/// Decode a `find` response body that must hold exactly one location.
///
/// The minimum corner of the extent is used as the point, not its centre.
pub fn decode_coordinate(body: &str) -> Result<Coordinate, WeatherError> {
    let parsed: FindResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::InvalidLatLongResult(e.into()))?;

    match <[FoundLocation; 1]>::try_from(parsed.locations) {
        Ok([only]) => {
            tracing::debug!(
                name = %only.name,
                xmin = only.extent.xmin,
                ymin = only.extent.ymin,
                "found location"
            );
            Ok(Coordinate { lat: only.extent.ymin, long: only.extent.xmin })
        }
        Err(all) => Err(WeatherError::InvalidLatLongResult(LookupFailure::MatchCount(all.len()))),
    }
}

impl WeatherClient {
    /// Resolve a zip code or place name to the canonical location string.
    pub async fn resolve_city(&self, query: &str) -> Result<CanonicalLocation, WeatherError> {
        let body = self
            .get_text(
                &self.endpoints().suggest,
                &[
                    ("f", "json"),
                    ("maxSuggestions", "1"),
                    ("text", query),
                    ("countryCode", COUNTRY_CODES),
                    ("category", CATEGORIES),
                ],
                RequestOrigin::Script,
            )
            .await
            .map_err(|e| {
                tracing::error!(query, error = %e, "city lookup request failed");
                WeatherError::InvalidCityResult(e)
            })?;

        tracing::debug!(response = %body, "received suggest response");

        decode_city(&body).inspect_err(|e| {
            tracing::error!(query, error = %source_text(e), "unusable city lookup result");
        })
    }

    /// Resolve a canonical location string to a single coordinate.
    pub async fn resolve_coordinate(
        &self,
        location: &CanonicalLocation,
    ) -> Result<Coordinate, WeatherError> {
        let body = self
            .get_text(
                &self.endpoints().find,
                &[("f", "json"), ("text", location.as_str())],
                RequestOrigin::Script,
            )
            .await
            .map_err(|e| {
                tracing::error!(%location, error = %e, "lat/long request failed");
                WeatherError::InvalidLatLongResult(e)
            })?;

        tracing::debug!(response = %body, "received find response");

        decode_coordinate(&body).inspect_err(|e| {
            tracing::error!(%location, error = %source_text(e), "unusable lat/long result");
        })
    }
}

fn source_text(err: &WeatherError) -> String {
    err.lookup_failure().map_or_else(|| err.to_string(), ToString::to_string)
}
