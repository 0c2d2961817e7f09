use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Position in WGS84 decimal degrees.
///
/// The network covers a small enough area that all movement math is planar
/// in raw degree units, with no geodesic correction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(value: (f64, f64)) -> Self {
        Self {
            latitude: value.0,
            longitude: value.1,
        }
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Planar offset from `self` to `target` in degree units.
    pub fn offset_to(&self, target: &Self) -> Offset {
        Offset {
            d_lat: target.latitude - self.latitude,
            d_lng: target.longitude - self.longitude,
        }
    }

    /// Straight-line distance to `target` in degree units.
    pub fn planar_distance(&self, target: &Self) -> f64 {
        self.offset_to(target).magnitude()
    }

    /// Moves `step` degree units along the straight line towards `target`.
    /// Returns `self` unchanged when the two points coincide.
    pub fn step_towards(&self, target: &Self, step: f64) -> Self {
        let offset = self.offset_to(target);
        let distance = offset.magnitude();
        if distance == 0.0 {
            return *self;
        }
        Self {
            latitude: self.latitude + (offset.d_lat / distance) * step,
            longitude: self.longitude + (offset.d_lng / distance) * step,
        }
    }
}

/// Planar movement vector in degree units.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Offset {
    pub d_lat: f64,
    pub d_lng: f64,
}

impl Offset {
    pub fn magnitude(&self) -> f64 {
        (self.d_lat * self.d_lat + self.d_lng * self.d_lng).sqrt()
    }

    /// Marker rotation in degrees. Longitude leads latitude in the atan2 so
    /// 0 points up the screen; this is the on-screen convention, not
    /// compass bearing.
    pub fn heading(&self) -> f64 {
        f64::atan2(self.d_lng, self.d_lat).to_degrees()
    }
}

#[test]
fn offset_magnitude_test() {
    let a = Coordinate::new(19.0, 72.0);
    let b = Coordinate::new(19.003, 72.004);
    let offset = a.offset_to(&b);
    assert!((offset.magnitude() - 0.005).abs() < 1e-12);
}

#[test]
fn step_towards_exact_magnitude_test() {
    let a = Coordinate::new(19.0, 72.0);
    let b = Coordinate::new(19.003, 72.004);
    let moved = a.step_towards(&b, 0.0005);
    assert!((a.planar_distance(&moved) - 0.0005).abs() < 1e-12);
}

#[test]
fn step_towards_reduces_distance_test() {
    let a = Coordinate::new(18.9322, 72.8264);
    let b = Coordinate::new(18.9696, 72.8194);
    let moved = a.step_towards(&b, 0.0005);
    assert!(moved.planar_distance(&b) < a.planar_distance(&b));
}

#[test]
fn step_towards_degenerate_test() {
    let a = Coordinate::new(19.0, 72.0);
    let moved = a.step_towards(&a, 0.0005);
    assert_eq!(moved, a);
}

#[test]
fn heading_north_test() {
    let offset = Offset {
        d_lat: 1.0,
        d_lng: 0.0,
    };
    assert_eq!(offset.heading(), 0.0);
}

#[test]
fn heading_east_test() {
    let offset = Offset {
        d_lat: 0.0,
        d_lng: 1.0,
    };
    assert_eq!(offset.heading(), 90.0);
}

#[test]
fn heading_axis_order_test() {
    // lng-then-lat argument order, so a south-west vector lands at -135
    // rather than the compass 225
    let offset = Offset {
        d_lat: -1.0,
        d_lng: -1.0,
    };
    assert_eq!(offset.heading(), -135.0);
}
