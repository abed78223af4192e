// File: crates/skycast-chart/src/spline.rs
// Summary: Tension-controlled cubic Bezier smoothing through line points.

use crate::geometry::{PointF, RectF};

/// One cubic segment of a smoothed polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierSegment {
    pub from: PointF,
    pub cp1: PointF,
    pub cp2: PointF,
    pub to: PointF,
}

/// Control points on either side of `current`, scaled by the distances to its neighbours.
fn control_points(previous: PointF, current: PointF, next: PointF, tension: f32) -> (PointF, PointF) {
    let d01 = current.distance(previous);
    let d12 = next.distance(current);
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.x - previous.x;
    let dy = next.y - previous.y;
    (
        PointF::new(current.x - fa * dx, current.y - fa * dy),
        PointF::new(current.x + fb * dx, current.y + fb * dy),
    )
}

/// Build the Bezier segments joining `points` in order.
///
/// End points stand in for their own missing neighbour. When `area` is given,
/// control points are clamped into it so the curve cannot overshoot the plot.
/// A tension of 0 yields straight segments.
pub fn spline_segments(points: &[PointF], tension: f32, area: Option<&RectF>) -> Vec<BezierSegment> {
    if points.len() < 2 {
        return Vec::new();
    }
    let last = points.len() - 1;
    let controls: Vec<(PointF, PointF)> = points
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            if tension == 0.0 {
                return (p, p);
            }
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(last)];
            let (before, after) = control_points(prev, p, next, tension);
            match area {
                Some(a) => (a.clamp_point(before), a.clamp_point(after)),
                None => (before, after),
            }
        })
        .collect();

    points
        .windows(2)
        .enumerate()
        .map(|(i, w)| BezierSegment {
            from: w[0],
            cp1: controls[i].1,
            cp2: controls[i + 1].0,
            to: w[1],
        })
        .collect()
}
