use failure::{bail, Error};

use crate::point::{NamedPoint, Point};

/// A named, geolocated record as the surrounding system stores it
/// (`name: text, address: text, latitude: double, longitude: double`).
///
/// Values are immutable after construction; the constructor is the only
/// place coordinate ranges are checked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PointOfInterest {
    name: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

impl PointOfInterest {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<PointOfInterest, Error> {
        let name = name.into();
        if name.is_empty() {
            bail!("name must not be empty");
        }
        if !latitude.is_finite() || latitude < -90. || latitude > 90. {
            bail!("latitude out of range: {}", latitude);
        }
        if !longitude.is_finite() || longitude < -180. || longitude > 180. {
            bail!("longitude out of range: {}", longitude);
        }

        Ok(PointOfInterest {
            name,
            address: address.into(),
            latitude,
            longitude,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Point for PointOfInterest {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl NamedPoint for PointOfInterest {
    fn name(&self) -> &str {
        &self.name
    }
}
