//! Extraction of the first earthquake event from a USGS GeoJSON response.
//!
//! The feed returns a feature collection; this system only ever displays the
//! first entry. Everything beyond the first element of `features` is ignored
//! on purpose, including entries that would not even deserialize.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ExtractError, Result};
use crate::event::Event;

/// Top-level envelope of the USGS response. The features stay untyped here so
/// that only the first one is ever decoded.
#[derive(Deserialize, Debug)]
struct FeatureCollection {
    features: Vec<Value>,
}

#[derive(Deserialize, Debug)]
struct Feature {
    properties: Properties,
}

#[derive(Deserialize, Debug)]
struct Properties {
    title: String,
    time: i64,
    tsunami: i64,
}

/// Extracts at most one [`Event`] from a response body.
///
/// - An empty body yields `Ok(None)` without attempting to parse.
/// - A body that is not a well-formed feature collection yields
///   [`ExtractError::Document`].
/// - An empty `features` array yields `Ok(None)`.
/// - A first feature with missing or mistyped `title`/`time`/`tsunami`
///   yields [`ExtractError::Feature`].
pub fn extract_first_event(body: &str) -> Result<Option<Event>> {
    if body.is_empty() {
        return Ok(None);
    }

    let collection: FeatureCollection = serde_json::from_str(body).map_err(|err| {
        #[cfg(feature = "telemetry")]
        tracing::warn!("response body is not a GeoJSON feature collection: {err}");
        ExtractError::Document(err)
    })?;

    let Some(first) = collection.features.into_iter().next() else {
        return Ok(None);
    };

    let feature: Feature = serde_json::from_value(first).map_err(|err| {
        #[cfg(feature = "telemetry")]
        tracing::warn!("first feature entry is malformed: {err}");
        ExtractError::Feature(err)
    })?;

    Ok(Some(Event {
        title: feature.properties.title,
        occurred_at: feature.properties.time,
        tsunami_alert: feature.properties.tsunami,
    }))
}
