//! The seam between the planner and whatever renders the map.
//!
//! The production surface is a browser running Leaflet, driven over a
//! WebSocket: every mutation of the map happens through a serialized
//! [`SurfaceCommand`]. Tests substitute a recording surface instead.

use common::{Bounds, GeoPoint};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Opaque handle for a marker the surface is displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

/// Opaque handle for a rendered route overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u64);

#[derive(Debug, Clone, Serialize)]
pub struct RouteStyle {
    pub color: String,
    pub weight: u32,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color: "blue".to_string(),
            weight: 4,
        }
    }
}

/// Initial map setup: a fixed viewport the user cannot leave.
#[derive(Debug, Clone, Serialize)]
pub struct MapOptions {
    pub center: GeoPoint,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_bounds: Bounds,
    pub max_bounds_viscosity: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl MapOptions {
    /// The fixed service area, with OpenStreetMap tiles.
    pub fn fixed_area() -> Self {
        let max_bounds = Bounds::new(
            GeoPoint::new(27.56695, -99.44011),
            GeoPoint::new(27.57606, -99.42940),
        );
        Self {
            center: max_bounds.center(),
            zoom: 16,
            min_zoom: 16,
            max_bounds,
            max_bounds_viscosity: 1.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
        }
    }
}

/// One rendering instruction for the map client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceCommand {
    Init {
        options: MapOptions,
    },
    /// Adds a draggable marker and opens its label popup immediately.
    AddMarker {
        id: MarkerId,
        point: GeoPoint,
        label: String,
    },
    RemoveMarker {
        id: MarkerId,
    },
    DrawRoute {
        id: LayerId,
        geometry: Vec<GeoPoint>,
        style: RouteStyle,
    },
    RemoveRoute {
        id: LayerId,
    },
    SetPanning {
        enabled: bool,
    },
}

/// What the planner needs from a map renderer.
pub trait MapSurface {
    fn add_marker(&mut self, point: GeoPoint, label: &str) -> MarkerId;
    fn remove_marker(&mut self, id: MarkerId);
    fn draw_route(&mut self, geometry: &[GeoPoint], style: &RouteStyle) -> LayerId;
    fn remove_route(&mut self, id: LayerId);
    fn set_panning_enabled(&mut self, enabled: bool);
}

/// Surface backed by a WebSocket client. Commands go into a channel drained
/// by the socket writer task.
pub struct WsSurface {
    commands: mpsc::UnboundedSender<SurfaceCommand>,
    next_id: u64,
}

impl WsSurface {
    pub fn new(commands: mpsc::UnboundedSender<SurfaceCommand>) -> Self {
        Self {
            commands,
            next_id: 0,
        }
    }

    pub fn init(&self, options: MapOptions) {
        self.send(SurfaceCommand::Init { options });
    }

    fn send(&self, command: SurfaceCommand) {
        // The client may already be gone; dropped commands are harmless.
        let _ = self.commands.send(command);
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MapSurface for WsSurface {
    fn add_marker(&mut self, point: GeoPoint, label: &str) -> MarkerId {
        let id = MarkerId(self.next_id());
        self.send(SurfaceCommand::AddMarker {
            id,
            point,
            label: label.to_string(),
        });
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.send(SurfaceCommand::RemoveMarker { id });
    }

    fn draw_route(&mut self, geometry: &[GeoPoint], style: &RouteStyle) -> LayerId {
        let id = LayerId(self.next_id());
        self.send(SurfaceCommand::DrawRoute {
            id,
            geometry: geometry.to_vec(),
            style: style.clone(),
        });
        id
    }

    fn remove_route(&mut self, id: LayerId) {
        self.send(SurfaceCommand::RemoveRoute { id });
    }

    fn set_panning_enabled(&mut self, enabled: bool) {
        self.send(SurfaceCommand::SetPanning { enabled });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_surface_emits_commands_with_fresh_ids() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut surface = WsSurface::new(tx);

        let marker = surface.add_marker(GeoPoint::new(27.57, -99.43), "Start");
        let layer = surface.draw_route(
            &[GeoPoint::new(27.57, -99.43), GeoPoint::new(27.571, -99.431)],
            &RouteStyle::default(),
        );
        assert_ne!(marker.0, layer.0);

        match rx.try_recv().unwrap() {
            SurfaceCommand::AddMarker { id, label, .. } => {
                assert_eq!(id, marker);
                assert_eq!(label, "Start");
            }
            other => panic!("unexpected command: {other:?}"),
        }
        match rx.try_recv().unwrap() {
            SurfaceCommand::DrawRoute { id, geometry, .. } => {
                assert_eq!(id, layer);
                assert_eq!(geometry.len(), 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn commands_serialize_with_snake_case_tags() {
        let command = SurfaceCommand::SetPanning { enabled: false };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["type"], "set_panning");
        assert_eq!(json["enabled"], false);
    }
}
