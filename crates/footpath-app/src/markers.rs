//! Start/End marker slots.
//!
//! The two markers are singleton slots, not a collection: Start is always
//! placed before End, and a third placement has nowhere to go.

use crate::surface::MarkerId;
use common::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Start,
    End,
}

impl MarkerRole {
    /// Popup label shown when the marker is created.
    pub fn label(&self) -> &'static str {
        match self {
            MarkerRole::Start => "Start",
            MarkerRole::End => "End",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlacedMarker {
    pub id: MarkerId,
    pub position: GeoPoint,
}

#[derive(Debug, Default)]
pub struct MarkerSlots {
    start: Option<PlacedMarker>,
    end: Option<PlacedMarker>,
}

impl MarkerSlots {
    /// Which role the next placement intent would fill, if any.
    pub fn next_role(&self) -> Option<MarkerRole> {
        match (&self.start, &self.end) {
            (None, _) => Some(MarkerRole::Start),
            (Some(_), None) => Some(MarkerRole::End),
            (Some(_), Some(_)) => None,
        }
    }

    /// Fills the slot for `role`. The caller checks `next_role` first.
    pub fn fill(&mut self, role: MarkerRole, marker: PlacedMarker) {
        match role {
            MarkerRole::Start => self.start = Some(marker),
            MarkerRole::End => self.end = Some(marker),
        }
    }

    /// Start and End positions, present only when both markers exist.
    pub fn both(&self) -> Option<(GeoPoint, GeoPoint)> {
        Some((self.start?.position, self.end?.position))
    }

    /// Records a drag of either marker. Returns false for unknown handles.
    pub fn update_position(&mut self, id: MarkerId, position: GeoPoint) -> bool {
        for slot in [&mut self.start, &mut self.end] {
            if let Some(marker) = slot {
                if marker.id == id {
                    marker.position = position;
                    return true;
                }
            }
        }
        false
    }

    /// Empties both slots. Idempotent.
    pub fn clear(&mut self) -> Vec<MarkerId> {
        self.start
            .take()
            .into_iter()
            .chain(self.end.take())
            .map(|marker| marker.id)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}
