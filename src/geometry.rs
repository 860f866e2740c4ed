//! Geometry types for agent features.
//!
//! Geometries are stored the way GeoJSON encodes them: a position is a
//! longitude-first coordinate pair, and a geometry is a tagged variant over
//! point and shaped coordinate arrays. This keeps payloads produced by the
//! simulation side deserializable without an intermediate untyped stage.

use serde::{Deserialize, Serialize};

/// 2d position on the surface of a celestial body.
///
/// Serialized as a `[lon, lat]` coordinate pair (GeoJSON order).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    lon: f64,
    lat: f64,
}

impl Position {
    /// Creates a new position from latitude and longitude values (in degrees).
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl From<[f64; 2]> for Position {
    fn from(value: [f64; 2]) -> Self {
        Self {
            lon: value[0],
            lat: value[1],
        }
    }
}

impl From<Position> for [f64; 2] {
    fn from(value: Position) -> Self {
        [value.lon, value.lat]
    }
}

/// Creates a new [`Position`] from latitude and longitude values (in degrees).
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::geometry::Position::latlon($lat, $lon)
    };
}

/// Geometry of a single feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    /// A single position.
    Point(Position),
    /// A set of unconnected positions.
    MultiPoint(Vec<Position>),
    /// An open chain of positions.
    LineString(Vec<Position>),
    /// Several open chains of positions.
    MultiLineString(Vec<Vec<Position>>),
    /// An outer ring with optional inner rings.
    Polygon(Vec<Vec<Position>>),
    /// Several polygons.
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

impl Geometry {
    /// Whether the geometry is rendered as circle markers rather than as an
    /// outlined shape.
    pub fn is_point(&self) -> bool {
        matches!(self, Geometry::Point(_) | Geometry::MultiPoint(_))
    }
}
