use crate::contour::Coord;

/// Simplification tolerance scaled to a boundary's own extent.
///
/// Returns `factor` times the larger side of the point set's bounding box,
/// so small objects are simplified proportionally more gently than large
/// ones. Empty or single-point inputs yield zero.
pub fn adaptive_tolerance(points: &[Coord], factor: f64) -> f64 {
    let Some(&first) = points.first() else {
        return 0.0;
    };
    let mut min_row = first.row;
    let mut max_row = first.row;
    let mut min_col = first.col;
    let mut max_col = first.col;
    for p in points {
        min_row = min_row.min(p.row);
        max_row = max_row.max(p.row);
        min_col = min_col.min(p.col);
        max_col = max_col.max(p.col);
    }
    (max_row - min_row).max(max_col - min_col) * factor
}

/// Distance from `point` to the segment between `start` and `end`.
///
/// Falls back to the plain point distance when the segment is degenerate,
/// which is what anchors the first split of a closed boundary whose two
/// endpoints coincide.
pub fn perpendicular_distance(point: Coord, start: Coord, end: Coord) -> f64 {
    let dr = end.row - start.row;
    let dc = end.col - start.col;
    let len_sq = dr * dr + dc * dc;

    if len_sq < 1e-12 {
        return point.distance(start);
    }

    let t = ((point.row - start.row) * dr + (point.col - start.col) * dc) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let projected = Coord::new(start.row + t * dr, start.col + t * dc);
    point.distance(projected)
}

/// Ramer-Douglas-Peucker: keep the endpoints, recurse on the first point
/// of maximum deviation while it exceeds the tolerance.
fn rdp(points: &[Coord], tolerance: f64) -> Vec<Coord> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let start = points[0];
    let end = points[points.len() - 1];
    let mut max_dist = 0.0;
    let mut max_idx = 0;
    for (i, &p) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let dist = perpendicular_distance(p, start, end);
        if dist > max_dist {
            max_dist = dist;
            max_idx = i;
        }
    }

    if max_dist > tolerance {
        let mut left = rdp(&points[..=max_idx], tolerance);
        let right = rdp(&points[max_idx..], tolerance);
        left.pop();
        left.extend(right);
        left
    } else {
        vec![start, end]
    }
}

/// Simplify a closed boundary (first point repeated at the end) under the
/// given tolerance.
///
/// Guarantees at least three distinct vertices whenever the input boundary
/// encloses any area: if recursive simplification collapses further, the
/// result falls back to the triangle spanned by the start point, the point
/// farthest from it, and the point of maximum deviation from that chord,
/// in traversal order. Fully collinear boundaries are degenerate and may
/// still collapse.
pub fn simplify_closed(points: &[Coord], tolerance: f64) -> Vec<Coord> {
    if points.len() <= 4 {
        return points.to_vec();
    }
    let simplified = rdp(points, tolerance);
    if simplified.len() >= 4 {
        return simplified;
    }
    spanning_triangle(points).unwrap_or(simplified)
}

/// Triangle retaining the boundary's extent, or `None` when every point is
/// collinear.
fn spanning_triangle(points: &[Coord]) -> Option<Vec<Coord>> {
    let start = *points.first()?;

    let mut far_idx = 0;
    let mut far_dist = 0.0;
    for (i, &p) in points.iter().enumerate().skip(1) {
        let dist = start.distance(p);
        if dist > far_dist {
            far_dist = dist;
            far_idx = i;
        }
    }
    if far_dist <= 0.0 {
        return None;
    }

    let far = points[far_idx];
    let mut dev_idx = 0;
    let mut dev_dist = 0.0;
    for (i, &p) in points.iter().enumerate() {
        let dist = perpendicular_distance(p, start, far);
        if dist > dev_dist {
            dev_dist = dist;
            dev_idx = i;
        }
    }
    if dev_dist <= 0.0 {
        return None;
    }

    let mut indices = [0, far_idx, dev_idx];
    indices.sort_unstable();
    let mut triangle: Vec<Coord> = indices.iter().map(|&i| points[i]).collect();
    triangle.push(triangle[0]);
    Some(triangle)
}
