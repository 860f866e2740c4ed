use log::debug;

use crate::error::{
    AgentMapError, ELEMENT_BUILDER_MISSING_MESSAGE, MAP_PROVIDER_MISSING_MESSAGE,
};
use crate::feature::FeatureCollection;
use crate::geometry::Position;
use crate::host::{
    ContainerSpec, DummyNotifier, ElementBuilder, MapProvider, Notifier, RenderedFeature,
};
use crate::popup::popup_content;
use crate::symbol::{AgentSymbol, Symbol};
use crate::tiles::TileLayerOptions;

/// A map widget displaying a set of geolocated agent markers.
///
/// The view owns the provider's map handle and the currently attached agent
/// layer. At most one agent layer is attached at any time: [`render`](Self::render)
/// swaps the layer for one built from fresh data, [`reset`](Self::reset)
/// removes it.
pub struct MapView<M, S = AgentSymbol>
where
    M: MapProvider,
{
    provider: M,
    symbol: S,
    map: M::Map,
    agent_layer: Option<M::Layer>,
}

impl<M, S> MapView<M, S>
where
    M: MapProvider,
    S: Symbol,
{
    /// Replaces the displayed agent layer with one built from `data`.
    ///
    /// The previous layer is detached first, so after this method returns
    /// exactly one layer is attached and it reflects `data`. Failures of the
    /// underlying widget are propagated as is; the data itself is not
    /// validated.
    pub fn render(&mut self, data: &FeatureCollection) -> Result<(), AgentMapError> {
        if let Some(mut old) = self.agent_layer.take() {
            self.provider.detach_layer(&mut self.map, &mut old);
        }

        let rendered: Vec<RenderedFeature> = data
            .features
            .iter()
            .map(|feature| RenderedFeature {
                geometry: feature.geometry.clone(),
                paint: self.symbol.paint(feature),
                popup_html: popup_content(&feature.properties),
            })
            .collect();

        debug!("rendering agent layer with {} features", rendered.len());

        let mut layer = self.provider.build_layer(&rendered)?;
        self.provider.attach_layer(&mut self.map, &mut layer)?;
        self.agent_layer = Some(layer);

        Ok(())
    }

    /// Removes the agent layer, leaving the base map visible with no markers.
    ///
    /// Calling this repeatedly is safe; detaching with no layer attached is a
    /// no-op.
    pub fn reset(&mut self) {
        if let Some(mut layer) = self.agent_layer.take() {
            self.provider.detach_layer(&mut self.map, &mut layer);
        }
    }

    /// The underlying map widget handle.
    pub fn map(&self) -> &M::Map {
        &self.map
    }
}

/// Builder of [`MapView`] instances.
///
/// The element builder and map provider capabilities must be injected before
/// [`build`](Self::build); building without either fails fast with a
/// descriptive error after notifying the user through the injected
/// [`Notifier`].
pub struct MapViewBuilder<E, M, N = DummyNotifier, S = AgentSymbol> {
    center: Position,
    zoom: u32,
    map_width: u32,
    map_height: u32,
    element_builder: Option<E>,
    map_provider: Option<M>,
    notifier: N,
    symbol: S,
}

impl<E, M> MapViewBuilder<E, M> {
    /// Creates a builder for a map looking at `center` with the given zoom
    /// level, rendered into a container of the given pixel size.
    pub fn new(center: Position, zoom: u32, map_width: u32, map_height: u32) -> Self {
        Self {
            center,
            zoom,
            map_width,
            map_height,
            element_builder: None,
            map_provider: None,
            notifier: DummyNotifier,
            symbol: AgentSymbol,
        }
    }
}

impl<E, M, N, S> MapViewBuilder<E, M, N, S> {
    /// Injects the element builder capability.
    pub fn with_element_builder(mut self, element_builder: E) -> Self {
        self.element_builder = Some(element_builder);
        self
    }

    /// Injects the map provider capability.
    pub fn with_map_provider(mut self, map_provider: M) -> Self {
        self.map_provider = Some(map_provider);
        self
    }

    /// Replaces the notifier used for fail-fast diagnostics.
    pub fn with_notifier<N2>(self, notifier: N2) -> MapViewBuilder<E, M, N2, S> {
        MapViewBuilder {
            center: self.center,
            zoom: self.zoom,
            map_width: self.map_width,
            map_height: self.map_height,
            element_builder: self.element_builder,
            map_provider: self.map_provider,
            notifier,
            symbol: self.symbol,
        }
    }

    /// Replaces the symbol used to style features.
    pub fn with_symbol<S2>(self, symbol: S2) -> MapViewBuilder<E, M, N, S2> {
        MapViewBuilder {
            center: self.center,
            zoom: self.zoom,
            map_width: self.map_width,
            map_height: self.map_height,
            element_builder: self.element_builder,
            map_provider: self.map_provider,
            notifier: self.notifier,
            symbol,
        }
    }

    /// Builds the map view.
    ///
    /// Inserts the container element into the page, creates the map widget
    /// with the initial view, attaches an empty agent layer and adds the OSM
    /// base tile layer.
    pub fn build(self) -> Result<MapView<M, S>, AgentMapError>
    where
        E: ElementBuilder,
        M: MapProvider,
        N: Notifier,
        S: Symbol,
    {
        let Some(element_builder) = self.element_builder else {
            self.notifier.alert(ELEMENT_BUILDER_MISSING_MESSAGE);
            return Err(AgentMapError::ElementBuilderMissing);
        };

        let Some(provider) = self.map_provider else {
            self.notifier.alert(MAP_PROVIDER_MISSING_MESSAGE);
            return Err(AgentMapError::MapProviderMissing);
        };

        let spec = ContainerSpec::new(self.map_width, self.map_height);
        element_builder.insert_container(&spec)?;

        let mut map = provider.create_map(&spec.id, self.center, self.zoom)?;
        let mut layer = provider.build_layer(&[])?;
        provider.attach_layer(&mut map, &mut layer)?;
        provider.add_tile_layer(&mut map, &TileLayerOptions::osm())?;

        debug!(
            "map view initialized at ({}, {}) zoom {}",
            self.center.lat(),
            self.center.lon(),
            self.zoom
        );

        Ok(MapView {
            provider,
            symbol: self.symbol,
            map,
            agent_layer: Some(layer),
        })
    }
}
