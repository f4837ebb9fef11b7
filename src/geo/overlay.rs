//! Overlay sources and layers in the shape MapLibre GL consumes.
//!
//! The document built here is a complete style (basemap + overlays), so it
//! can be handed straight to a map surface or written out with `--map-json`.

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::{connection_segments, LngLat, Location};

pub const CONNECTIONS_SOURCE: &str = "connections";
pub const NODES_SOURCE: &str = "nodes";
pub const CONNECTION_LAYER: &str = "connection-lines";
pub const GLOW_LAYER: &str = "node-glow";
pub const MARKER_LAYER: &str = "node-markers";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<LngLat> },
    Point { coordinates: LngLat },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
}

impl Feature {
    fn new(geometry: Geometry) -> Self {
        Self { kind: "Feature", properties: Map::new(), geometry }
    }

    fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), Value::String(value.to_string()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    fn new(features: Vec<Feature>) -> Self {
        Self { kind: "FeatureCollection", features }
    }
}

pub fn connection_features(locations: &[Location]) -> FeatureCollection {
    let features = connection_segments(locations)
        .into_iter()
        .map(|segment| {
            Feature::new(Geometry::LineString { coordinates: segment.coords.to_vec() })
        })
        .collect();
    FeatureCollection::new(features)
}

pub fn node_features(locations: &[Location]) -> FeatureCollection {
    let features = locations
        .iter()
        .map(|loc| {
            Feature::new(Geometry::Point { coordinates: loc.coords })
                .with_property("id", loc.id)
                .with_property("name", loc.name)
                .with_property("org", loc.org)
        })
        .collect();
    FeatureCollection::new(features)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerPaint {
    Line {
        #[serde(rename = "line-color")]
        color: &'static str,
        #[serde(rename = "line-width")]
        width: f64,
        #[serde(rename = "line-dasharray")]
        dasharray: [f64; 2],
        #[serde(rename = "line-opacity")]
        opacity: f64,
    },
    Circle {
        #[serde(rename = "circle-radius")]
        radius: f64,
        #[serde(rename = "circle-color")]
        color: &'static str,
        #[serde(rename = "circle-opacity", skip_serializing_if = "Option::is_none")]
        opacity: Option<f64>,
        #[serde(rename = "circle-blur", skip_serializing_if = "Option::is_none")]
        blur: Option<f64>,
        #[serde(rename = "circle-stroke-width", skip_serializing_if = "Option::is_none")]
        stroke_width: Option<f64>,
        #[serde(rename = "circle-stroke-color", skip_serializing_if = "Option::is_none")]
        stroke_color: Option<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: &'static str,
    pub source: &'static str,
    pub paint: LayerPaint,
}

impl Layer {
    fn to_style_json(&self) -> Value {
        let (kind, paint) = match serde_json::to_value(&self.paint) {
            Ok(Value::Object(mut paint)) => {
                let kind = paint.remove("type").unwrap_or(Value::Null);
                (kind, Value::Object(paint))
            }
            _ => (Value::Null, Value::Null),
        };
        json!({ "id": self.id, "type": kind, "source": self.source, "paint": paint })
    }
}

pub fn overlay_layers() -> Vec<Layer> {
    vec![
        Layer {
            id: CONNECTION_LAYER,
            source: CONNECTIONS_SOURCE,
            paint: LayerPaint::Line {
                color: "#0000ff",
                width: 2.0,
                dasharray: [2.0, 2.0],
                opacity: 0.8,
            },
        },
        Layer {
            id: GLOW_LAYER,
            source: NODES_SOURCE,
            paint: LayerPaint::Circle {
                radius: 15.0,
                color: "#ccff00ff",
                opacity: Some(0.4),
                blur: Some(0.8),
                stroke_width: None,
                stroke_color: None,
            },
        },
        Layer {
            id: MARKER_LAYER,
            source: NODES_SOURCE,
            paint: LayerPaint::Circle {
                radius: 5.0,
                color: "#f2ff00ff",
                opacity: None,
                blur: None,
                stroke_width: Some(3.0),
                stroke_color: Some("#0022ffff"),
            },
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapStyle {
    pub name: &'static str,
    pub tiles: &'static str,
    pub attribution: &'static str,
}

pub const MAP_STYLES: [MapStyle; 4] = [
    MapStyle {
        name: "Stamen Toner",
        tiles: "https://tiles.stadiamaps.com/tiles/stamen_toner/{z}/{x}/{y}@2x.png",
        attribution: "© Stadia Maps © Stamen Design © OpenStreetMap",
    },
    MapStyle {
        name: "Stamen Toner Lines",
        tiles: "https://tiles.stadiamaps.com/tiles/stamen_toner_lines/{z}/{x}/{y}@2x.png",
        attribution: "© Stadia Maps © Stamen Design © OpenStreetMap",
    },
    MapStyle {
        name: "Stamen Terrain Lines",
        tiles: "https://tiles.stadiamaps.com/tiles/stamen_terrain_lines/{z}/{x}/{y}@2x.png",
        attribution: "© Stadia Maps © Stamen Design © OpenStreetMap",
    },
    MapStyle {
        name: "CARTO Dark",
        tiles: "https://a.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}@2x.png",
        attribution: "© CARTO © OpenStreetMap",
    },
];

impl MapStyle {
    pub fn by_name(name: &str) -> MapStyle {
        MAP_STYLES
            .iter()
            .find(|style| style.name.eq_ignore_ascii_case(name))
            .copied()
            .unwrap_or_else(|| {
                tracing::warn!("Unknown map style '{}', using {}", name, MAP_STYLES[0].name);
                MAP_STYLES[0]
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LngLat,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: LngLat::new(30.0, 35.0),
            zoom: 1.8,
            min_zoom: 1.0,
            max_zoom: 18.0,
        }
    }
}

pub struct OverlayDocument {
    pub style: MapStyle,
    pub view: MapView,
    pub connections: FeatureCollection,
    pub nodes: FeatureCollection,
    pub layers: Vec<Layer>,
}

impl OverlayDocument {
    pub fn new(locations: &[Location], style: MapStyle) -> Self {
        Self {
            style,
            view: MapView::default(),
            connections: connection_features(locations),
            nodes: node_features(locations),
            layers: overlay_layers(),
        }
    }

    pub fn to_style_json(&self) -> Value {
        let mut layers = vec![json!({
            "id": "basemap-layer",
            "type": "raster",
            "source": "basemap",
            "minzoom": 0,
            "maxzoom": 19
        })];
        layers.extend(self.layers.iter().map(Layer::to_style_json));

        json!({
            "version": 8,
            "name": self.style.name,
            "center": self.view.center,
            "zoom": self.view.zoom,
            "minZoom": self.view.min_zoom,
            "maxZoom": self.view.max_zoom,
            "sources": {
                "basemap": {
                    "type": "raster",
                    "tiles": [self.style.tiles],
                    "tileSize": 256,
                    "attribution": self.style.attribution
                },
                CONNECTIONS_SOURCE: { "type": "geojson", "data": self.connections },
                NODES_SOURCE: { "type": "geojson", "data": self.nodes }
            },
            "layers": layers
        })
    }
}
