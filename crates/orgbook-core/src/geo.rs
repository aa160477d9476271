//! Great-circle distance between coordinate pairs.
//!
//! Haversine on a spherical Earth. Accurate to a fraction of a percent at
//! city scale, which is all the radius search needs.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A (latitude, longitude) pair in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
  pub latitude:  f64,
  pub longitude: f64,
}

/// Great-circle distance between `a` and `b` in meters.
///
/// Pure and symmetric; equal points yield zero. Inputs are not
/// range-checked: out-of-range degrees produce a numeric (possibly
/// degenerate) result rather than an error.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
  let lat_a = a.latitude.to_radians();
  let lat_b = b.latitude.to_radians();
  let d_lat = (b.latitude - a.latitude).to_radians();
  let d_lon = (b.longitude - a.longitude).to_radians();

  let h = (d_lat / 2.0).sin().powi(2)
    + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

  2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}
