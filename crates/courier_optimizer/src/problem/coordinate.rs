use serde::Serialize;

use crate::error::OptimizeError;

use super::{haversine::haversine_distance, kilometers::Kilometers};

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// WGS84 position in degrees. Stored as a `geo::Point` with x = longitude,
/// y = latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    point: geo::Point,
}

impl Coordinate {
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, OptimizeError> {
        if !lat.is_finite() || lat.abs() > MAX_LATITUDE {
            return Err(OptimizeError::validation(format!(
                "latitude {lat} is outside [-{MAX_LATITUDE}, {MAX_LATITUDE}]"
            )));
        }

        if !lng.is_finite() || lng.abs() > MAX_LONGITUDE {
            return Err(OptimizeError::validation(format!(
                "longitude {lng} is outside [-{MAX_LONGITUDE}, {MAX_LONGITUDE}]"
            )));
        }

        Ok(Self {
            point: geo::Point::new(lng, lat),
        })
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn lng(&self) -> f64 {
        self.point.x()
    }

    pub fn haversine_distance(&self, to: &Coordinate) -> Kilometers {
        haversine_distance(self, to)
    }
}

impl From<&Coordinate> for geo::Point<f64> {
    fn from(coordinate: &Coordinate) -> Self {
        coordinate.point
    }
}
