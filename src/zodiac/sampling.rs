use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A 2D point in the constellation authoring space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

/// Per-segment lengths, cumulative lengths, and the total arc length of a
/// polyline.
fn build_meta(points: &[Point]) -> (Vec<f64>, Vec<f64>, f64) {
    let mut seg = Vec::with_capacity(points.len().saturating_sub(1));
    let mut acc = Vec::with_capacity(points.len());
    acc.push(0.0);
    let mut total = 0.0;

    for pair in points.windows(2) {
        let length = (pair[1].x - pair[0].x).hypot(pair[1].y - pair[0].y);
        seg.push(length);
        total += length;
        acc.push(total);
    }

    (seg, acc, total)
}

/// Point at arc-length position `s`. Zero-length segments contribute their
/// start point; positions past the end clamp to the last point.
fn sample_at(points: &[Point], seg: &[f64], acc: &[f64], s: f64) -> Point {
    let mut i = 0;
    while i < seg.len() && acc[i + 1] < s {
        i += 1;
    }
    if i >= seg.len() {
        return points[points.len() - 1];
    }

    let t = if seg[i] == 0.0 { 0.0 } else { (s - acc[i]) / seg[i] };
    Point {
        x: points[i].x + (points[i + 1].x - points[i].x) * t,
        y: points[i].y + (points[i + 1].y - points[i].y) * t,
    }
}

/// Resample a polyline into `n` points evenly spaced by arc length, endpoints
/// included.
///
/// An empty polyline yields `n` origin points; a single anchor or `n <= 1`
/// yields `n` copies of the first point.
pub fn sample_polyline(points: &[Point], n: usize) -> Vec<Point> {
    if points.is_empty() {
        return vec![ORIGIN; n];
    }
    if points.len() < 2 || n <= 1 {
        return vec![points[0]; n];
    }

    let (seg, acc, total) = build_meta(points);

    (0..n)
        .map(|k| sample_at(points, &seg, &acc, total * (k as f64 / (n - 1) as f64)))
        .collect()
}

/// Expand a constellation's anchor points into one point per season day.
///
/// When `path_index` is present and non-empty it selects and orders the
/// anchors to traverse; out-of-bounds indices are dropped.
pub fn expand_to_days(points: &[Point], path_index: Option<&[usize]>, days: usize) -> Vec<Point> {
    if points.is_empty() {
        return vec![ORIGIN; days];
    }

    match path_index {
        Some(index) if !index.is_empty() => {
            let path: Vec<Point> = index
                .iter()
                .filter_map(|&i| points.get(i).copied())
                .collect();
            sample_polyline(&path, days)
        }
        _ => sample_polyline(points, days),
    }
}
