//! Capabilities the host environment injects into the map view.
//!
//! These concerns live in the host page at runtime, but they are modeled as
//! explicit constructor-injected traits so a host page, a desktop shell or a
//! test double can each supply its own implementation.

use crate::error::AgentMapError;
use crate::geometry::{Geometry, Position};
use crate::symbol::FeaturePaint;
use crate::tiles::TileLayerOptions;

/// Description of the container element the map widget is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    /// Element id the map provider looks the container up by.
    pub id: String,
    /// Inline CSS of the container. The dotted border makes the map bounds
    /// visible while debugging page layout.
    pub style: String,
    /// Selector of the page region the container is appended into.
    pub region_selector: String,
}

impl ContainerSpec {
    pub(crate) fn new(map_width: u32, map_height: u32) -> Self {
        Self {
            id: "mapid".into(),
            style: format!("width:{map_width}px; height:{map_height}px;border:1px dotted"),
            region_selector: "#elements".into(),
        }
    }
}

/// Creates and inserts page elements.
pub trait ElementBuilder {
    /// Creates the map container element and appends it into the page region
    /// named by the spec.
    fn insert_container(&self, spec: &ContainerSpec) -> Result<(), AgentMapError>;
}

/// A single feature prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFeature {
    /// Geometry to draw.
    pub geometry: Geometry,
    /// Paint instructions produced by the symbol.
    pub paint: FeaturePaint,
    /// Popup HTML bound to the feature's interactive layer.
    pub popup_html: String,
}

/// Constructs and drives the underlying map widget.
pub trait MapProvider {
    /// Handle to a constructed map widget.
    type Map;
    /// Handle to a feature layer that can be attached to the map.
    type Layer;

    /// Creates a map widget bound to the container element with the given id,
    /// looking at `center` with the given zoom level.
    fn create_map(
        &self,
        container_id: &str,
        center: Position,
        zoom: u32,
    ) -> Result<Self::Map, AgentMapError>;

    /// Adds a base tile layer to the map.
    fn add_tile_layer(
        &self,
        map: &mut Self::Map,
        options: &TileLayerOptions,
    ) -> Result<(), AgentMapError>;

    /// Builds a feature layer from the rendered features. An empty slice
    /// produces an empty layer.
    fn build_layer(&self, features: &[RenderedFeature]) -> Result<Self::Layer, AgentMapError>;

    /// Attaches the layer to the map.
    fn attach_layer(
        &self,
        map: &mut Self::Map,
        layer: &mut Self::Layer,
    ) -> Result<(), AgentMapError>;

    /// Detaches the layer from the map. Detaching a layer that is not
    /// attached must be a no-op.
    fn detach_layer(&self, map: &mut Self::Map, layer: &mut Self::Layer);
}

/// Delivers blocking user-facing notifications.
pub trait Notifier {
    /// Shows a blocking message to the user.
    fn alert(&self, message: &str);
}

/// Notifier that drops all messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyNotifier;

impl Notifier for DummyNotifier {
    fn alert(&self, _message: &str) {}
}
