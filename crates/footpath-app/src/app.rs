//! The planner controller: owns all interaction state for one map session.

use crate::input::LongPress;
use crate::markers::{MarkerSlots, PlacedMarker};
use crate::route::Directions;
use crate::surface::{LayerId, MapSurface, MarkerId, RouteStyle};
use common::GeoPoint;
use serde::Deserialize;
use std::time::Instant;

/// A raw interaction event reported by the map surface.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapEvent {
    Click { point: GeoPoint, shift: bool },
    TouchStart { point: GeoPoint },
    TouchEnd,
    DragEnd { marker: MarkerId, point: GeoPoint },
    Reset,
}

/// Marker slots, the route overlay, and the pending long press, driven by
/// one event at a time. There is no other interaction state.
pub struct RoutePlanner<S, D> {
    surface: S,
    directions: D,
    slots: MarkerSlots,
    overlay: Option<LayerId>,
    long_press: LongPress,
    style: RouteStyle,
}

impl<S: MapSurface, D: Directions> RoutePlanner<S, D> {
    pub fn new(surface: S, directions: D) -> Self {
        Self {
            surface,
            directions,
            slots: MarkerSlots::default(),
            overlay: None,
            long_press: LongPress::default(),
            style: RouteStyle::default(),
        }
    }

    pub async fn handle(&mut self, event: MapEvent) {
        match event {
            MapEvent::Click { point, shift } => {
                if shift {
                    self.place(point).await;
                }
            }
            MapEvent::TouchStart { point } => {
                self.long_press.press(point, Instant::now());
                self.surface.set_panning_enabled(false);
            }
            MapEvent::TouchEnd => {
                let matured = self.long_press.release(Instant::now());
                // Panning comes back whether or not the press matured.
                self.surface.set_panning_enabled(true);
                if let Some(point) = matured {
                    self.place(point).await;
                }
            }
            MapEvent::DragEnd { marker, point } => {
                if self.slots.update_position(marker, point) && self.slots.both().is_some() {
                    self.refresh_route().await;
                }
            }
            MapEvent::Reset => self.reset(),
        }
    }

    /// Placement intent: Start first, then End (which completes the pair and
    /// triggers a fetch), then nothing until a reset.
    async fn place(&mut self, point: GeoPoint) {
        let Some(role) = self.slots.next_role() else {
            tracing::debug!("Both markers already placed, ignoring placement");
            return;
        };

        let id = self.surface.add_marker(point, role.label());
        self.slots.fill(role, PlacedMarker {
            id,
            position: point,
        });
        tracing::info!(
            "Placed {} marker at ({:.5}, {:.5})",
            role.label(),
            point.lat,
            point.lon
        );

        if self.slots.both().is_some() {
            self.refresh_route().await;
        }
    }

    async fn refresh_route(&mut self) {
        let Some((start, end)) = self.slots.both() else {
            return;
        };

        // The old overlay comes off before the request goes out, so a failed
        // fetch leaves the route empty rather than stale.
        if let Some(layer) = self.overlay.take() {
            self.surface.remove_route(layer);
        }

        match self.directions.walking_route(start, end).await {
            Ok(geometry) => {
                let meters: f64 = geometry
                    .windows(2)
                    .map(|pair| pair[0].haversine_distance(&pair[1]))
                    .sum();
                let layer = self.surface.draw_route(&geometry, &self.style);
                self.overlay = Some(layer);
                tracing::info!("Route drawn: {} points, {:.0} m", geometry.len(), meters);
            }
            Err(e) => {
                tracing::error!("Error fetching route: {}", e);
            }
        }
    }

    fn reset(&mut self) {
        for id in self.slots.clear() {
            self.surface.remove_marker(id);
        }
        if let Some(layer) = self.overlay.take() {
            self.surface.remove_route(layer);
        }
        tracing::info!("Map reset");
    }
}
