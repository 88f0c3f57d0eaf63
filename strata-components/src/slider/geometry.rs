/// Snapshot of the track as laid out by the host.
///
/// Positions are track-local pixels along the slider's main axis. The core
/// never caches anything derived from a snapshot; handle positions are
/// recomputed from values on every read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Pixel position of the track's `min` end (the left edge for
    /// left-to-right layouts).
    pub origin_offset: f64,
    /// Usable track length in pixels.
    pub length_px: f64,
    /// Whether values increase from right to left.
    pub is_right_to_left: bool,
}

impl TrackGeometry {
    /// Creates a geometry snapshot.
    pub const fn new(origin_offset: f64, length_px: f64, is_right_to_left: bool) -> Self {
        Self {
            origin_offset,
            length_px,
            is_right_to_left,
        }
    }

    /// A geometry can map positions only when it has a finite origin and a
    /// finite, positive length.
    pub fn is_valid(&self) -> bool {
        self.origin_offset.is_finite() && self.length_px.is_finite() && self.length_px > 0.0
    }

    /// Pixel position of a track fraction.
    pub fn position_of(&self, fraction: f64) -> Option<f64> {
        if !self.is_valid() || !fraction.is_finite() {
            return None;
        }
        let along = if self.is_right_to_left {
            1.0 - fraction
        } else {
            fraction
        };
        Some(self.origin_offset + along * self.length_px)
    }

    /// Track fraction under a pixel position, clamped to `[0, 1]`.
    pub fn fraction_at(&self, position: f64) -> Option<f64> {
        if !self.is_valid() || !position.is_finite() {
            return None;
        }
        let fraction = ((position - self.origin_offset) / self.length_px).clamp(0.0, 1.0);
        let fraction = if self.is_right_to_left {
            1.0 - fraction
        } else {
            fraction
        };
        fraction.is_finite().then_some(fraction)
    }
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self::new(0.0, 0.0, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_and_fraction_ltr() {
        let geometry = TrackGeometry::new(10.0, 200.0, false);
        assert_eq!(geometry.position_of(0.25), Some(60.0));
        assert_eq!(geometry.fraction_at(60.0), Some(0.25));
        assert_eq!(geometry.fraction_at(-50.0), Some(0.0));
        assert_eq!(geometry.fraction_at(500.0), Some(1.0));
    }

    #[test]
    fn test_position_and_fraction_rtl() {
        let geometry = TrackGeometry::new(0.0, 100.0, true);
        assert_eq!(geometry.position_of(0.0), Some(100.0));
        assert_eq!(geometry.position_of(0.75), Some(25.0));
        assert_eq!(geometry.fraction_at(25.0), Some(0.75));
    }

    #[test]
    fn test_malformed_geometry_maps_nothing() {
        let zero = TrackGeometry::new(0.0, 0.0, false);
        assert!(!zero.is_valid());
        assert_eq!(zero.fraction_at(5.0), None);
        assert_eq!(zero.position_of(0.5), None);

        let nan = TrackGeometry::new(f64::NAN, 100.0, false);
        assert_eq!(nan.fraction_at(5.0), None);

        let geometry = TrackGeometry::new(0.0, 100.0, false);
        assert_eq!(geometry.fraction_at(f64::INFINITY), None);
    }
}
