//! Long-press detection for touch devices.
//!
//! On pointer devices a shift-click is a placement intent; touch devices use
//! press-and-hold instead. The threshold state machine takes timestamps from
//! the caller so tests never sleep.

use common::GeoPoint;
use std::time::{Duration, Instant};

/// Minimum hold time for a touch to count as a placement.
pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(600);

#[derive(Debug, Default)]
pub struct LongPress {
    pending: Option<(GeoPoint, Instant)>,
}

impl LongPress {
    /// A finger went down at `point`. While the press is pending the caller
    /// suspends map panning so the hold does not compete with a drag.
    pub fn press(&mut self, point: GeoPoint, at: Instant) {
        self.pending = Some((point, at));
    }

    /// The finger lifted. Returns the placement point if the press was held
    /// past the threshold, otherwise the touch was an ordinary pan gesture.
    pub fn release(&mut self, at: Instant) -> Option<GeoPoint> {
        let (point, started) = self.pending.take()?;
        (at.duration_since(started) >= LONG_PRESS_THRESHOLD).then_some(point)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_after_threshold_places() {
        let mut press = LongPress::default();
        let t0 = Instant::now();
        let point = GeoPoint::new(27.570, -99.432);

        press.press(point, t0);
        assert!(press.is_pending());
        assert_eq!(press.release(t0 + Duration::from_millis(600)), Some(point));
        assert!(!press.is_pending());
    }

    #[test]
    fn release_before_threshold_cancels() {
        let mut press = LongPress::default();
        let t0 = Instant::now();

        press.press(GeoPoint::new(27.570, -99.432), t0);
        assert_eq!(press.release(t0 + Duration::from_millis(599)), None);
        assert!(!press.is_pending());
    }

    #[test]
    fn release_without_press_is_a_no_op() {
        let mut press = LongPress::default();
        assert_eq!(press.release(Instant::now()), None);
        // A second release after a consumed press is also inert.
        let t0 = Instant::now();
        press.press(GeoPoint::new(27.570, -99.432), t0);
        press.release(t0 + Duration::from_secs(1));
        assert_eq!(press.release(t0 + Duration::from_secs(2)), None);
    }
}
