//! Base tile layer configuration.

/// URL template of the OSM raster tile source.
pub const OSM_TILE_URL: &str = "http://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution string required by the OSM tile source.
pub const OSM_ATTRIBUTION: &str =
    "Map data © <a href=\"http://openstreetmap.org\">OpenStreetMap</a> contributors";

/// Configuration of the base tile layer added to the map at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayerOptions {
    /// Tile URL template with `{s}`/`{z}`/`{x}`/`{y}` placeholders.
    pub url_template: String,
    /// Attribution shown for the tile source.
    pub attribution: String,
    /// Minimum zoom level tiles are available for.
    pub min_zoom: u32,
    /// Maximum zoom level tiles are available for.
    pub max_zoom: u32,
}

impl TileLayerOptions {
    /// The fixed OSM tile source used by the map view.
    pub fn osm() -> Self {
        Self {
            url_template: OSM_TILE_URL.into(),
            attribution: OSM_ATTRIBUTION.into(),
            min_zoom: 0,
            max_zoom: 18,
        }
    }
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self::osm()
    }
}
