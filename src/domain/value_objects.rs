//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are validated on construction and can be freely shared.

use crate::domain::errors::GeocodeError;
use serde::{Deserialize, Serialize};

/// Number of results asked from a provider when the caller does not say.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees, within [-90, 90]
    pub lat: f64,
    /// Longitude in decimal degrees, within [-180, 180]
    pub lon: f64,
}

impl Coordinates {
    /// Build a coordinate pair, rejecting non-finite or out-of-range values.
    ///
    /// # Examples
    /// ```
    /// use arcgis_geocoder::Coordinates;
    ///
    /// assert!(Coordinates::new(48.8633, 2.3890).is_ok());
    /// assert!(Coordinates::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeocodeError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeocodeError::InvalidArgument(format!(
                "latitude {} is outside [-90, 90]",
                lat
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(GeocodeError::InvalidArgument(format!(
                "longitude {} is outside [-180, 180]",
                lon
            )));
        }
        Ok(Self { lat, lon })
    }
}

/// A forward geocoding request: free text to coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeQuery {
    text: String,
    limit: usize,
}

impl GeocodeQuery {
    /// Create a query for the given text with the default limit.
    ///
    /// The text is not validated here; providers decide what they accept.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Set the maximum number of results to ask for.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// A reverse geocoding request: coordinates to address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverseQuery {
    coordinates: Coordinates,
    limit: usize,
}

impl ReverseQuery {
    /// Create a reverse query from already validated coordinates.
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Validate a raw latitude/longitude pair and wrap it into a query.
    pub fn from_coordinates(lat: f64, lon: f64) -> Result<Self, GeocodeError> {
        Ok(Self::new(Coordinates::new(lat, lon)?))
    }

    /// Set the maximum number of results to ask for.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
