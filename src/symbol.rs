//! Symbols define how agent features are painted on the map.

use serde_json::Value;

use crate::feature::Feature;
use crate::popup::value_text;

/// Style of an outlined (non-point) geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeStyle {
    /// Stroke color of the shape, if the feature declares one.
    pub color: Option<String>,
}

/// Style of a point geometry rendered as a circle marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleMarkerStyle {
    /// Color of the marker, if the feature declares one.
    pub color: Option<String>,
    /// Radius of the marker in pixels, if the feature declares one.
    pub radius: Option<f64>,
}

/// Paint instructions for a single feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeaturePaint {
    /// The feature is drawn as an outlined shape.
    Shape(ShapeStyle),
    /// The feature is drawn as one or more circle markers.
    CircleMarker(CircleMarkerStyle),
}

/// Converts a feature into paint instructions for the map provider.
pub trait Symbol {
    /// Returns the paint instructions for the given feature.
    fn paint(&self, feature: &Feature) -> FeaturePaint;
}

/// Styles features by the agent geodata conventions: `properties.color`
/// colors every feature, `properties.radius` sizes point markers.
///
/// Both values are optional; a feature without them is painted with `None`
/// fields and the map provider applies its own defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentSymbol;

impl Symbol for AgentSymbol {
    fn paint(&self, feature: &Feature) -> FeaturePaint {
        let color = feature.properties.get("color").map(value_text);
        if feature.geometry.is_point() {
            FeaturePaint::CircleMarker(CircleMarkerStyle {
                color,
                radius: feature.properties.get("radius").and_then(Value::as_f64),
            })
        } else {
            FeaturePaint::Shape(ShapeStyle { color })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::feature::Properties;
    use crate::geometry::Geometry;
    use crate::latlon;

    fn properties(value: serde_json::Value) -> Properties {
        serde_json::from_value(value).expect("valid properties")
    }

    #[test]
    fn point_paint_takes_color_and_radius() {
        let feature = Feature::with_properties(
            Geometry::Point(latlon!(52.37, 4.9)),
            properties(json!({"color": "red", "radius": 5})),
        );

        assert_eq!(
            AgentSymbol.paint(&feature),
            FeaturePaint::CircleMarker(CircleMarkerStyle {
                color: Some("red".into()),
                radius: Some(5.0),
            })
        );
    }

    #[test]
    fn shape_paint_takes_color_only() {
        let feature = Feature::with_properties(
            Geometry::LineString(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]),
            properties(json!({"color": "#3388FF", "radius": 5})),
        );

        assert_eq!(
            AgentSymbol.paint(&feature),
            FeaturePaint::Shape(ShapeStyle {
                color: Some("#3388FF".into()),
            })
        );
    }

    #[test]
    fn missing_conventions_paint_as_none() {
        let feature = Feature::new(Geometry::Point(latlon!(0.0, 0.0)));

        assert_eq!(
            AgentSymbol.paint(&feature),
            FeaturePaint::CircleMarker(CircleMarkerStyle::default())
        );
    }
}
