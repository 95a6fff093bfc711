//! Domain Entities - Core business objects
//!
//! The normalized address model every provider maps its upstream response into.
//! Entities are built once per call and are read-only afterwards.

use crate::domain::errors::GeocodeError;
use crate::domain::value_objects::Coordinates;
use serde::Serialize;

/// One tier of a political hierarchy (region, state, county, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminLevel {
    /// 1-based level, 1 being the broadest tier below the country
    pub level: u8,
    /// Display name of the administrative area
    pub name: String,
    /// Short code of the area, when the upstream provides one
    pub code: Option<String>,
}

impl AdminLevel {
    pub fn new(level: u8, name: impl Into<String>, code: Option<String>) -> Self {
        Self {
            level,
            name: name.into(),
            code,
        }
    }
}

/// Admin levels of one address, unique per level and sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdminLevelCollection {
    levels: Vec<AdminLevel>,
}

impl AdminLevelCollection {
    /// Build a collection, sorting by level.
    ///
    /// Fails if a level is 0 or appears more than once.
    pub fn new(mut levels: Vec<AdminLevel>) -> Result<Self, GeocodeError> {
        levels.sort_by_key(|l| l.level);
        if levels.first().is_some_and(|l| l.level == 0) {
            return Err(GeocodeError::InvalidArgument(
                "admin levels are 1-based".to_string(),
            ));
        }
        if levels.windows(2).any(|w| w[0].level == w[1].level) {
            return Err(GeocodeError::InvalidArgument(
                "admin level numbers must be unique".to_string(),
            ));
        }
        Ok(Self { levels })
    }

    /// Look up an entry by its level number (not by position).
    pub fn get(&self, level: u8) -> Option<&AdminLevel> {
        self.levels.iter().find(|l| l.level == level)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AdminLevel> {
        self.levels.iter()
    }
}

/// Country of an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Country code as returned upstream (ISO 3166-1 alpha-3 for ArcGIS)
    pub code: String,
    /// Display name, when the upstream provides one
    pub name: Option<String>,
}

impl Country {
    pub fn new(code: impl Into<String>, name: Option<String>) -> Self {
        Self {
            code: code.into(),
            name,
        }
    }
}

/// Bounding box of an address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// A single normalized geocoding result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressRecord {
    provided_by: String,
    coordinates: Coordinates,
    bounds: Option<Bounds>,
    street_number: Option<String>,
    street_name: Option<String>,
    postal_code: Option<String>,
    locality: Option<String>,
    sub_locality: Option<String>,
    admin_levels: AdminLevelCollection,
    country: Option<Country>,
    timezone: Option<String>,
}

impl AddressRecord {
    /// Start building a record; coordinates are the only mandatory field.
    pub fn builder(provided_by: impl Into<String>, coordinates: Coordinates) -> AddressRecordBuilder {
        AddressRecordBuilder {
            record: AddressRecord {
                provided_by: provided_by.into(),
                coordinates,
                bounds: None,
                street_number: None,
                street_name: None,
                postal_code: None,
                locality: None,
                sub_locality: None,
                admin_levels: AdminLevelCollection::default(),
                country: None,
                timezone: None,
            },
        }
    }

    /// Name of the provider that produced this record.
    pub fn provided_by(&self) -> &str {
        &self.provided_by
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn street_number(&self) -> Option<&str> {
        self.street_number.as_deref()
    }

    pub fn street_name(&self) -> Option<&str> {
        self.street_name.as_deref()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    pub fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    pub fn sub_locality(&self) -> Option<&str> {
        self.sub_locality.as_deref()
    }

    pub fn admin_levels(&self) -> &AdminLevelCollection {
        &self.admin_levels
    }

    pub fn country(&self) -> Option<&Country> {
        self.country.as_ref()
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }
}

/// Builder for [`AddressRecord`].
///
/// Setters take `Option`s so upstream fields can be passed straight through.
#[derive(Debug)]
pub struct AddressRecordBuilder {
    record: AddressRecord,
}

impl AddressRecordBuilder {
    pub fn bounds(mut self, bounds: Option<Bounds>) -> Self {
        self.record.bounds = bounds;
        self
    }

    pub fn street_number(mut self, value: Option<String>) -> Self {
        self.record.street_number = value;
        self
    }

    pub fn street_name(mut self, value: Option<String>) -> Self {
        self.record.street_name = value;
        self
    }

    pub fn postal_code(mut self, value: Option<String>) -> Self {
        self.record.postal_code = value;
        self
    }

    pub fn locality(mut self, value: Option<String>) -> Self {
        self.record.locality = value;
        self
    }

    pub fn sub_locality(mut self, value: Option<String>) -> Self {
        self.record.sub_locality = value;
        self
    }

    pub fn admin_levels(mut self, levels: AdminLevelCollection) -> Self {
        self.record.admin_levels = levels;
        self
    }

    pub fn country(mut self, country: Option<Country>) -> Self {
        self.record.country = country;
        self
    }

    pub fn timezone(mut self, value: Option<String>) -> Self {
        self.record.timezone = value;
        self
    }

    pub fn build(self) -> AddressRecord {
        self.record
    }
}

/// Ordered results of one geocoding call, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AddressCollection {
    records: Vec<AddressRecord>,
}

impl AddressCollection {
    pub fn new(records: Vec<AddressRecord>) -> Self {
        Self { records }
    }

    pub fn first(&self) -> Option<&AddressRecord> {
        self.records.first()
    }

    pub fn get(&self, index: usize) -> Option<&AddressRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressRecord> {
        self.records.iter()
    }
}

impl IntoIterator for AddressCollection {
    type Item = AddressRecord;
    type IntoIter = std::vec::IntoIter<AddressRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressCollection {
    type Item = &'a AddressRecord;
    type IntoIter = std::slice::Iter<'a, AddressRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
