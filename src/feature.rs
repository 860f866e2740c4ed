//! Agent features and feature collections.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::geometry::Geometry;

/// Properties attached to a feature.
///
/// The map is ordered so popup rows and styling decisions are deterministic.
/// By convention `color` styles the feature and `radius` sizes point markers;
/// everything else is carried through untouched.
pub type Properties = BTreeMap<String, Value>;

/// An arbitrary geographic object with attached properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Geometry of the feature.
    pub geometry: Geometry,
    /// Properties of the feature. A GeoJSON `"properties": null` deserializes
    /// as an empty map.
    #[serde(default, deserialize_with = "properties_or_empty")]
    pub properties: Properties,
}

impl Feature {
    /// Creates a feature with no properties.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            properties: Properties::new(),
        }
    }

    /// Creates a feature with the given properties.
    pub fn with_properties(geometry: Geometry, properties: Properties) -> Self {
        Self {
            geometry,
            properties,
        }
    }
}

/// A set of features rendered together as one agent layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Features of the collection, in render order.
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

fn properties_or_empty<'de, D>(deserializer: D) -> Result<Properties, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Properties>::deserialize(deserializer)?.unwrap_or_default())
}
