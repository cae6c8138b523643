// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Plane geometry helpers for rooms, strokes and hit testing.
//!
//! Everything here is a pure function over `kurbo::Point` slices. Degenerate
//! input never panics: too few points give zero area, an empty bounding box,
//! or "outside".

use crate::settings;
use kurbo::{Point, Rect, Vec2};

/// Tolerance for the rectangle classifier (parallel, equal length, square)
const RECT_TOLERANCE: f64 = 0.1;

/// Polygon area by the shoelace formula
///
/// Orientation-independent. Fewer than three points give zero;
/// self-intersecting polygons give a meaningless but finite value.
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let n = points.len();
    let twice_area: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();

    twice_area.abs() / 2.0
}

/// Crossing-number point-in-polygon test with a horizontal ray
///
/// Points exactly on an edge may land on either side.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = pj.x + (point.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether a four-vertex polygon is a rectangle
///
/// Opposite sides must be parallel and of equal length and adjacent sides
/// perpendicular, each within a fixed tolerance.
pub fn is_rectangle(points: &[Point]) -> bool {
    let [a, b, c, d] = points else {
        return false;
    };

    let ab = *b - *a;
    let bc = *c - *b;
    let cd = *d - *c;
    let da = *a - *d;

    let parallel = ab.cross(cd).abs() <= RECT_TOLERANCE && bc.cross(da).abs() <= RECT_TOLERANCE;
    let equal = (ab.hypot() - cd.hypot()).abs() <= RECT_TOLERANCE
        && (bc.hypot() - da.hypot()).abs() <= RECT_TOLERANCE;
    let square = ab.dot(bc).abs() <= RECT_TOLERANCE;

    parallel && equal && square
}

/// Whether a polygon is a rectangle with every edge horizontal or vertical
pub fn is_axis_aligned_rectangle(points: &[Point]) -> bool {
    is_rectangle(points)
        && points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .all(|(a, b)| {
                (b.x - a.x).abs() <= RECT_TOLERANCE || (b.y - a.y).abs() <= RECT_TOLERANCE
            })
}

/// Collapse a stroke to a two-point line if it runs along a canonical angle
///
/// The stroke qualifies when its endpoints are further apart than the
/// minimum length and the direction from first to last point is within the
/// threshold of a multiple of 45 degrees. The end point is recomputed at the
/// snapped angle, keeping the original length. Anything else is returned
/// unchanged.
pub fn straighten(points: &[Point]) -> Vec<Point> {
    straighten_with(
        points,
        settings::straighten::MIN_LENGTH,
        settings::straighten::ANGLE_THRESHOLD_DEG,
    )
}

/// `straighten` with explicit limits
pub fn straighten_with(points: &[Point], min_length: f64, threshold_deg: f64) -> Vec<Point> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return points.to_vec();
    };

    let delta = last - first;
    let length = delta.hypot();
    if length <= min_length {
        return points.to_vec();
    }

    let angle = delta.atan2().to_degrees().rem_euclid(360.0);
    let snapped = (angle / 45.0).round() * 45.0;
    if (angle - snapped).abs() > threshold_deg {
        return points.to_vec();
    }

    let end = first + Vec2::from_angle(snapped.to_radians()) * length;
    vec![first, end]
}

/// Distance from a point to the closed segment `a`-`b`
pub fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return point.distance(a);
    }

    let t = ((point - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    point.distance(a + seg * t)
}

/// Distance from a point to an open polyline
///
/// A single-point polyline degrades to the distance to that point.
pub fn distance_to_polyline(point: Point, polyline: &[Point]) -> Option<f64> {
    match polyline {
        [] => None,
        [only] => Some(point.distance(*only)),
        _ => polyline
            .windows(2)
            .map(|w| distance_to_segment(point, w[0], w[1]))
            .reduce(f64::min),
    }
}

/// Axis-aligned bounds of a point set
pub fn bounding_box(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let rect = points
        .iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |rect, p| {
            rect.union_pt(*p)
        });
    Some(rect)
}

/// Average of the vertices, used to anchor room captions
pub fn polygon_centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    Some((sum / points.len() as f64).to_point())
}

/// Round a point to the nearest multiple of `spacing`
///
/// A non-positive spacing disables snapping.
pub fn snap_to_grid(point: Point, spacing: f64) -> Point {
    if spacing <= 0.0 {
        return point;
    }
    Point::new(
        (point.x / spacing).round() * spacing,
        (point.y / spacing).round() * spacing,
    )
}
