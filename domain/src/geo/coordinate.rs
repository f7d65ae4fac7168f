//! Coordinate value object and the loosely-typed location report it is
//! validated from.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A known geographic position (Value Object)
///
/// A `Coordinate` is always fully specified, finite and in range. An unknown
/// position is modelled as `Option<Coordinate>::None` by the entities that
/// hold one, so distance code never sees a missing axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = DomainError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Create a coordinate, rejecting non-finite or out-of-range axes.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !LATITUDE_RANGE.contains(&latitude) {
            return Err(DomainError::InvalidLocation(format!(
                "latitude {} is outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !LONGITUDE_RANGE.contains(&longitude) {
            return Err(DomainError::InvalidLocation(format!(
                "longitude {} is outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// One axis of a [`LocationReport`] as it arrived at the boundary.
///
/// Clients send numbers, numeric strings, or garbage; all three must
/// deserialize so that garbage becomes `InvalidLocation` instead of a
/// transport-level parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl AxisValue {
    fn to_f64(&self, axis: &str) -> Result<f64, DomainError> {
        match self {
            AxisValue::Number(n) => Ok(*n),
            AxisValue::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                DomainError::InvalidLocation(format!("{} '{}' is not a number", axis, s))
            }),
            AxisValue::Other(v) => Err(DomainError::InvalidLocation(format!(
                "{} {} is not a number",
                axis, v
            ))),
        }
    }
}

impl From<f64> for AxisValue {
    fn from(n: f64) -> Self {
        AxisValue::Number(n)
    }
}

impl From<&str> for AxisValue {
    fn from(s: &str) -> Self {
        AxisValue::Text(s.to_string())
    }
}

/// Unvalidated `{latitude, longitude}` pair received from a caller.
///
/// Both fields are required; [`LocationReport::validate`] is the only way
/// to turn a report into a [`Coordinate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationReport {
    #[serde(default)]
    pub latitude: Option<AxisValue>,
    #[serde(default)]
    pub longitude: Option<AxisValue>,
}

impl LocationReport {
    pub fn new(latitude: impl Into<AxisValue>, longitude: impl Into<AxisValue>) -> Self {
        Self {
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
        }
    }

    /// Validate both axes, producing a [`Coordinate`].
    pub fn validate(&self) -> Result<Coordinate, DomainError> {
        let latitude = self
            .latitude
            .as_ref()
            .ok_or_else(|| DomainError::InvalidLocation("latitude is missing".to_string()))?
            .to_f64("latitude")?;
        let longitude = self
            .longitude
            .as_ref()
            .ok_or_else(|| DomainError::InvalidLocation("longitude is missing".to_string()))?
            .to_f64("longitude")?;
        Coordinate::new(latitude, longitude)
    }
}

impl From<Coordinate> for LocationReport {
    fn from(c: Coordinate) -> Self {
        Self::new(c.latitude(), c.longitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_coordinate_rejects_out_of_range() {
        assert!(Coordinate::new(91.0, 0.0).is_err());
        assert!(Coordinate::new(0.0, -180.5).is_err());
    }

    #[test]
    fn test_coordinate_rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_coordinate_deserialize_validates() {
        let ok: Coordinate = serde_json::from_str(r#"{"latitude": 12.5, "longitude": 77.6}"#)
            .unwrap();
        assert_eq!(ok.latitude(), 12.5);
        let bad = serde_json::from_str::<Coordinate>(r#"{"latitude": 120, "longitude": 0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_report_accepts_numbers_and_numeric_strings() {
        let report: LocationReport =
            serde_json::from_str(r#"{"latitude": "12.5", "longitude": 77.25}"#).unwrap();
        let coord = report.validate().unwrap();
        assert_eq!(coord.latitude(), 12.5);
        assert_eq!(coord.longitude(), 77.25);
    }

    #[test]
    fn test_report_missing_axis_is_invalid() {
        let report: LocationReport = serde_json::from_str(r#"{"latitude": 1.0}"#).unwrap();
        let err = report.validate().unwrap_err();
        assert!(err.is_invalid_location());
        assert!(err.to_string().contains("longitude is missing"));
    }

    #[test]
    fn test_report_garbage_is_invalid_not_parse_error() {
        let report: LocationReport =
            serde_json::from_str(r#"{"latitude": true, "longitude": "east"}"#).unwrap();
        assert!(report.validate().unwrap_err().is_invalid_location());
    }

    #[test]
    fn test_report_out_of_range_is_invalid() {
        let report = LocationReport::new(91.0, 0.0);
        assert!(report.validate().unwrap_err().is_invalid_location());
    }

    #[test]
    fn test_report_nan_string_is_invalid() {
        let report = LocationReport::new("nan", "0");
        assert!(report.validate().is_err());
    }
}
