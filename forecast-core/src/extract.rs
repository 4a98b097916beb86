//! Pulls forecast periods and advisories out of a forecast.weather.gov page.
//!
//! The page has no schema; everything here is addressed by CSS selectors
//! that track the site's current markup.

use crate::{
    document::DocumentQuery,
    error::WeatherError,
    model::{Advisory, ForecastPeriod, ForecastResult},
};

/// One tombstone per period in the seven-day strip. Without the
/// `.forecast-tombstone` part only the list itself matches.
const SHORT_FORECAST: &str = "#seven-day-forecast-list .forecast-tombstone";
const PERIOD_NAME: &str = ".period-name";
const TEMPERATURE: &str = ".temp";
const SHORT_DESCRIPTION: &str = ".short-desc";
const DETAILED_FORECAST: &str = "#detailed-forecast-body .row-forecast .forecast-text";
const ADVISORIES: &str = ".panel-danger .panel-body ul li";

/// Build a [`ForecastResult`] from a parsed page.
///
/// Missing sections are not errors: a page with none of the expected markup
/// yields an empty result. Only an absent document is rejected.
pub fn extract_forecast<D: DocumentQuery>(doc: Option<&D>) -> Result<ForecastResult, WeatherError> {
    let Some(doc) = doc else {
        tracing::error!("forecast extraction called without a document");
        return Err(WeatherError::missing("document"));
    };

    let mut result = ForecastResult {
        periods: short_forecast(doc),
        advisories: Vec::new(),
    };
    fill_long_descriptions(doc, &mut result.periods);
    result.advisories = advisories(doc);

    tracing::debug!(
        periods = result.periods.len(),
        advisories = result.advisories.len(),
        "extracted forecast"
    );

    Ok(result)
}

fn short_forecast<D: DocumentQuery>(doc: &D) -> Vec<ForecastPeriod> {
    doc.find_all(SHORT_FORECAST)
        .iter()
        .map(|tombstone| ForecastPeriod {
            label: tombstone.first_text(PERIOD_NAME).trim().to_string(),
            temperature: tombstone.first_text(TEMPERATURE).trim().to_string(),
            short_description: tombstone.first_text(SHORT_DESCRIPTION).trim().to_string(),
            long_description: String::new(),
        })
        .collect()
}

// Detailed entries are paired with tombstones by position only. The page
// carries no shared key between the two sections, so if the site ever drops
// or reorders entries on one side the descriptions land on the wrong periods.
fn fill_long_descriptions<D: DocumentQuery>(doc: &D, periods: &mut [ForecastPeriod]) {
    let detailed = doc.find_all(DETAILED_FORECAST);

    if detailed.len() != periods.len() {
        tracing::debug!(
            short = periods.len(),
            detailed = detailed.len(),
            "short and detailed forecast lengths differ"
        );
    }

    for (period, text) in periods.iter_mut().zip(detailed.iter()) {
        period.long_description = text.text().trim().to_string();
    }
}

fn advisories<D: DocumentQuery>(doc: &D) -> Vec<Advisory> {
    doc.find_all(ADVISORIES)
        .iter()
        .map(|item| Advisory { description: item.text().trim().to_string() })
        .collect()
}
