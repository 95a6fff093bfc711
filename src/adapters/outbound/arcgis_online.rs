//! ArcGIS Online Geocoder
//!
//! Implements Geocoder on top of the ArcGIS World Geocoding Service.
//! Forward lookups use `findAddressCandidates`, reverse lookups use
//! `reverseGeocode`; both are plain GETs answered with JSON.
//!
//! See: https://developers.arcgis.com/rest/geocode/api-reference/overview-world-geocoding-service.htm

use crate::domain::entities::{AddressCollection, AddressRecord, AdminLevel, AdminLevelCollection, Country};
use crate::domain::errors::GeocodeError;
use crate::domain::ports::{Geocoder, HttpTransport};
use crate::domain::services::is_ip_literal;
use crate::domain::value_objects::{Coordinates, GeocodeQuery, ReverseQuery};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

/// Provider name reported on every record.
pub const PROVIDER_NAME: &str = "arcgis_online";

/// Public host of the World Geocoding Service.
pub const DEFAULT_HOST: &str = "geocode.arcgis.com";

const FIND_PATH: &str = "/arcgis/rest/services/World/GeocodeServer/findAddressCandidates";
const REVERSE_PATH: &str = "/arcgis/rest/services/World/GeocodeServer/reverseGeocode";

const UNSUPPORTED_IP_MESSAGE: &str =
    "The ArcGISOnline provider does not support IP addresses, only street addresses.";

/// Settings for [`ArcGisOnline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcGisOnlineConfig {
    /// Restrict forward lookups to one country (`sourceCountry`), e.g. "FRA"
    pub source_country: Option<String>,
    /// Use `https` instead of `http`
    pub use_ssl: bool,
    /// Endpoint authority, `host[:port]`
    pub host: String,
}

impl Default for ArcGisOnlineConfig {
    fn default() -> Self {
        Self {
            source_country: None,
            use_ssl: false,
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl ArcGisOnlineConfig {
    fn scheme(&self) -> &'static str {
        if self.use_ssl {
            "https"
        } else {
            "http"
        }
    }
}

// ===== Wire format =====

/// Error object ArcGIS returns with a 200 status.
#[derive(Debug, Deserialize)]
struct ApiError {
    code: Option<i64>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Location {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default, deserialize_with = "lenient_string")]
    address: Option<String>,
    location: Option<Location>,
    #[serde(default, deserialize_with = "null_as_default")]
    attributes: CandidateAttributes,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateAttributes {
    #[serde(rename = "AddNum", default, deserialize_with = "lenient_string")]
    add_num: Option<String>,
    #[serde(rename = "City", default, deserialize_with = "lenient_string")]
    city: Option<String>,
    #[serde(rename = "Region", default, deserialize_with = "lenient_string")]
    region: Option<String>,
    #[serde(rename = "Subregion", default, deserialize_with = "lenient_string")]
    subregion: Option<String>,
    #[serde(rename = "Postal", default, deserialize_with = "lenient_string")]
    postal: Option<String>,
    #[serde(rename = "Country", default, deserialize_with = "lenient_string")]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<ReverseAddress>,
    location: Option<Location>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ReverseAddress {
    #[serde(rename = "Address", default, deserialize_with = "lenient_string")]
    address: Option<String>,
    #[serde(rename = "City", default, deserialize_with = "lenient_string")]
    city: Option<String>,
    #[serde(rename = "Postal", default, deserialize_with = "lenient_string")]
    postal: Option<String>,
    #[serde(rename = "CountryCode", default, deserialize_with = "lenient_string")]
    country_code: Option<String>,
}

/// Accept a string, a number or null for fields ArcGIS is loose about.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Treat an explicit `null` like a missing object.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Blank upstream strings mean "absent".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Region is level 1, Subregion level 2; blank tiers are skipped without
/// renumbering the others.
fn admin_levels(tiers: [Option<String>; 2]) -> AdminLevelCollection {
    let levels = tiers
        .into_iter()
        .zip(1u8..)
        .filter_map(|(name, level)| non_empty(name).map(|n| AdminLevel::new(level, n, None)))
        .collect();
    AdminLevelCollection::new(levels).unwrap_or_default()
}

/// ArcGIS Online geocoding provider.
///
/// Holds only immutable settings and a shared transport, so one instance
/// can serve any number of concurrent callers.
pub struct ArcGisOnline {
    transport: Arc<dyn HttpTransport>,
    config: ArcGisOnlineConfig,
    find_endpoint: Url,
    reverse_endpoint: Url,
}

impl ArcGisOnline {
    /// Create a provider with the given transport and settings.
    ///
    /// Fails if `config.host` does not form a valid URL.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        config: ArcGisOnlineConfig,
    ) -> Result<Self, GeocodeError> {
        let endpoint = |path: &str| {
            let raw = format!("{}://{}{}", config.scheme(), config.host, path);
            Url::parse(&raw).map_err(|e| {
                GeocodeError::InvalidArgument(format!("invalid endpoint {}: {}", raw, e))
            })
        };
        let find_endpoint = endpoint(FIND_PATH)?;
        let reverse_endpoint = endpoint(REVERSE_PATH)?;

        Ok(Self {
            transport,
            config,
            find_endpoint,
            reverse_endpoint,
        })
    }

    /// Create a provider against the public endpoint with default settings.
    pub fn with_defaults(transport: Arc<dyn HttpTransport>) -> Result<Self, GeocodeError> {
        Self::new(transport, ArcGisOnlineConfig::default())
    }

    pub fn config(&self) -> &ArcGisOnlineConfig {
        &self.config
    }

    fn geocode_url(&self, text: &str, limit: usize) -> Url {
        let mut url = self.find_endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("SingleLine", text);
            if let Some(country) = &self.config.source_country {
                pairs.append_pair("sourceCountry", country);
            }
            pairs
                .append_pair("maxLocations", &limit.to_string())
                .append_pair("f", "json")
                .append_pair("outFields", "*");
        }
        url
    }

    fn reverse_url(&self, coordinates: Coordinates) -> Url {
        let mut url = self.reverse_endpoint.clone();
        url.query_pairs_mut()
            .append_pair(
                "location",
                &format!("{},{}", coordinates.lon, coordinates.lat),
            )
            .append_pair("f", "json");
        url
    }

    /// Fetch a body; transport failures and blank bodies both mean no results.
    async fn fetch(&self, url: &Url) -> Result<String, GeocodeError> {
        tracing::debug!("arcgis request {}", url);

        match self.transport.get(url).await {
            Ok(body) if !body.trim().is_empty() => Ok(body),
            Ok(_) => {
                tracing::warn!("arcgis returned an empty body for {}", url.path());
                Err(zero_results(url))
            }
            Err(e) => {
                tracing::warn!("arcgis transport error: {}", e);
                Err(zero_results(url))
            }
        }
    }

    /// Candidates without a location or a country code are not usable.
    fn map_candidate(candidate: Candidate) -> Option<AddressRecord> {
        let location = candidate.location?;
        let coordinates = Coordinates::new(location.y, location.x).ok()?;
        let attrs = candidate.attributes;
        let country = non_empty(attrs.country)?;

        Some(
            AddressRecord::builder(PROVIDER_NAME, coordinates)
                .street_number(non_empty(attrs.add_num))
                .street_name(non_empty(candidate.address))
                .postal_code(non_empty(attrs.postal))
                .locality(non_empty(attrs.city))
                .admin_levels(admin_levels([attrs.region, attrs.subregion]))
                .country(Some(Country::new(country, None)))
                .build(),
        )
    }
}

fn zero_results(url: &Url) -> GeocodeError {
    GeocodeError::ZeroResults(format!("Could not execute query \"{}\".", url))
}

fn parse_body<T: DeserializeOwned>(body: &str, url: &Url) -> Result<T, GeocodeError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!("arcgis response is not valid JSON: {}", e);
        zero_results(url)
    })
}

fn reject_api_error(error: Option<ApiError>, url: &Url) -> Result<(), GeocodeError> {
    match error {
        Some(err) => {
            tracing::warn!(
                "arcgis error code={:?} message={}",
                err.code,
                err.message.as_deref().unwrap_or("")
            );
            Err(zero_results(url))
        }
        None => Ok(()),
    }
}

#[async_trait]
impl Geocoder for ArcGisOnline {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn geocode(&self, query: &GeocodeQuery) -> Result<AddressCollection, GeocodeError> {
        let text = query.text();

        if is_ip_literal(text) {
            return Err(GeocodeError::UnsupportedOperation(
                UNSUPPORTED_IP_MESSAGE.to_string(),
            ));
        }
        if text.trim().is_empty() {
            return Err(GeocodeError::InvalidArgument(
                "Address cannot be empty.".to_string(),
            ));
        }

        let url = self.geocode_url(text, query.limit());
        let body = self.fetch(&url).await?;
        let response: FindResponse = parse_body(&body, &url)?;
        reject_api_error(response.error, &url)?;

        let candidates = response.candidates.unwrap_or_default();
        if candidates.is_empty() {
            return Err(zero_results(&url));
        }

        let total = candidates.len();
        let records: Vec<AddressRecord> = candidates
            .into_iter()
            .filter_map(Self::map_candidate)
            .collect();

        if records.len() < total {
            tracing::warn!(
                "skipped {} arcgis candidates without location or country",
                total - records.len()
            );
        }
        if records.is_empty() {
            return Err(zero_results(&url));
        }

        tracing::info!("arcgis geocode returned {} results", records.len());
        Ok(AddressCollection::new(records))
    }

    async fn reverse(&self, query: &ReverseQuery) -> Result<AddressCollection, GeocodeError> {
        let url = self.reverse_url(query.coordinates());
        let body = self.fetch(&url).await?;
        let response: ReverseResponse = parse_body(&body, &url)?;
        reject_api_error(response.error, &url)?;

        let (address, location) = match (response.address, response.location) {
            (Some(address), Some(location)) => (address, location),
            _ => return Err(zero_results(&url)),
        };
        let coordinates =
            Coordinates::new(location.y, location.x).map_err(|_| zero_results(&url))?;
        let country = non_empty(address.country_code).ok_or_else(|| {
            tracing::warn!("arcgis reverse address has no country code");
            zero_results(&url)
        })?;

        let record = AddressRecord::builder(PROVIDER_NAME, coordinates)
            .street_name(non_empty(address.address))
            .postal_code(non_empty(address.postal))
            .locality(non_empty(address.city))
            .country(Some(Country::new(country, None)))
            .build();

        tracing::info!("arcgis reverse returned 1 result");
        Ok(AddressCollection::new(vec![record]))
    }
}
