//! Geographic value types shared by the planner and its map surface.

use geo::prelude::*;
use geo::Point;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in floating point degrees.
///
/// Immutable once captured from an interaction event. The `lng` field name on
/// the wire matches what Leaflet reports for its `latlng` objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    #[serde(rename = "lng")]
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Longitude-first pair, the coordinate order the directions service
    /// expects.
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[1],
            lon: pair[0],
        }
    }

    /// Great-circle distance to `other` in meters.
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        let a = Point::new(self.lon, self.lat);
        let b = Point::new(other.lon, other.lat);
        a.haversine_distance(&b)
    }
}

/// A fixed rectangle constraining the map viewport.
///
/// Set once at initialization, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl Bounds {
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lon + self.north_east.lon) / 2.0,
        )
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lon >= self.south_west.lon
            && point.lon <= self.north_east.lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lng_lat_is_longitude_first() {
        let point = GeoPoint::new(27.570, -99.432);
        assert_eq!(point.lng_lat(), [-99.432, 27.570]);
        assert_eq!(GeoPoint::from_lng_lat([-99.432, 27.570]), point);
    }

    #[test]
    fn bounds_center_and_containment() {
        let bounds = Bounds::new(
            GeoPoint::new(27.56695, -99.44011),
            GeoPoint::new(27.57606, -99.42940),
        );

        let center = bounds.center();
        assert!(bounds.contains(&center));
        assert!(!bounds.contains(&GeoPoint::new(27.58, -99.43)));
        assert!(!bounds.contains(&GeoPoint::new(27.57, -99.45)));
    }

    #[test]
    fn haversine_distance_is_plausible() {
        // Roughly 0.01 degrees of latitude, a bit over a kilometer.
        let a = GeoPoint::new(27.570, -99.432);
        let b = GeoPoint::new(27.580, -99.432);
        let distance = a.haversine_distance(&b);
        assert!(distance > 1_000.0 && distance < 1_300.0);
    }
}
