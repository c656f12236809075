//! Point metrics used to turn coordinates into a [`DistanceMatrix`](crate::DistanceMatrix).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A city location. For [`Metric::GreatCircle`], `x` is the latitude and `y`
/// the longitude, both in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Euclidean,
    /// TSPLIB pseudo-Euclidean distance (the `ATT` edge weight type), integral.
    Att,
    /// Spherical distance in kilometres.
    GreatCircle,
}

impl Metric {
    pub fn distance(&self, from: &Point, to: &Point) -> f64 {
        match self {
            Metric::Euclidean => euclidean(from, to),
            Metric::Att => att(from, to),
            Metric::GreatCircle => great_circle(from, to),
        }
    }
}

#[inline(always)]
fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

#[inline(always)]
fn euclidean(from: &Point, to: &Point) -> f64 {
    (from.x - to.x).hypot(from.y - to.y)
}

#[inline(always)]
fn att(from: &Point, to: &Point) -> f64 {
    let dx = from.x - to.x;
    let dy = from.y - to.y;
    let r = ((dx * dx + dy * dy) / 10.0).sqrt();
    let t = r.round();
    if t < r {
        t + 1.0
    } else {
        t
    }
}

#[inline(always)]
fn great_circle(from: &Point, to: &Point) -> f64 {
    let lat1 = to_radians(from.x);
    let lon1 = to_radians(from.y);
    let lat2 = to_radians(to.x);
    let lon2 = to_radians(to.y);

    let val = (lat1.sin() * lat2.sin()) + (lat1.cos() * lat2.cos() * (lon1 - lon2).cos());

    val.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}
