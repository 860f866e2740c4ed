//! Agent map is a small presentation layer that renders geolocated "agent"
//! markers on an interactive map embedded in a host page. It injects a map
//! container into the page, initializes a base map with an OSM tile layer and
//! exposes two operations: [`MapView::render`] replaces the displayed marker
//! layer with fresh geodata, [`MapView::reset`] clears it.
//!
//! # Quick start
//!
//! ```no_run
//! use agent_map::{latlon, FeatureCollection, MapViewBuilder};
//! use agent_map::platform::web::{WebElementBuilder, WebNotifier};
//! # fn leaflet_provider() -> impl agent_map::MapProvider { unimplemented!() }
//!
//! # fn main() -> Result<(), agent_map::AgentMapError> {
//! let mut view = MapViewBuilder::new(latlon!(52.37, 4.9), 10, 500, 500)
//!     .with_element_builder(WebElementBuilder)
//!     .with_map_provider(leaflet_provider())
//!     .with_notifier(WebNotifier)
//!     .build()?;
//!
//! let data = FeatureCollection::new();
//! view.render(&data)?;
//! view.reset();
//! # Ok(())
//! # }
//! ```
//!
//! # Main components
//!
//! * [`MapView`] owns the map widget handle and the currently attached agent
//!   layer. It never touches the page or the widget directly; everything goes
//!   through the capabilities injected at construction:
//! * [`host`] traits — [`ElementBuilder`](host::ElementBuilder) builds and
//!   inserts the container element, [`MapProvider`](host::MapProvider) drives
//!   the actual map widget, and [`Notifier`](host::Notifier) delivers the
//!   fail-fast diagnostics when a capability is missing.
//! * [`symbol`] converts a feature's properties into paint instructions:
//!   `properties.color` colors every feature, `properties.radius` sizes point
//!   markers.
//!
//! The geodata payload is a [`FeatureCollection`] deserializable from
//! GeoJSON-shaped input. Beyond the color/radius conventions it is passed
//! through untouched; malformed payloads propagate whatever behavior the
//! underlying widget exhibits.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod error;
pub mod feature;
pub mod geometry;
pub mod host;
mod map_view;
pub mod platform;
pub mod popup;
pub mod symbol;
pub mod tiles;

pub use error::AgentMapError;
pub use feature::{Feature, FeatureCollection, Properties};
pub use geometry::{Geometry, Position};
pub use host::{ContainerSpec, ElementBuilder, MapProvider, Notifier, RenderedFeature};
pub use map_view::{MapView, MapViewBuilder};
pub use symbol::{AgentSymbol, Symbol};
pub use tiles::TileLayerOptions;
