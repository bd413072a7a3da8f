use std::collections::{HashSet, VecDeque};

use ndarray::Array2;

/// A (row, col) coordinate in the padded tracing frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub row: f64,
    pub col: f64,
}

impl Coord {
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Euclidean distance to another coordinate.
    pub fn distance(self, other: Self) -> f64 {
        let dr = self.row - other.row;
        let dc = self.col - other.col;
        dr.mul_add(dr, dc * dc).sqrt()
    }
}

/// A closed boundary: an ordered point sequence whose first point is
/// repeated at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour(Vec<Coord>);

impl Contour {
    pub fn new(points: Vec<Coord>) -> Self {
        Self(points)
    }

    /// Build a contour from traced points, repeating the first point at the
    /// end when the trace did not already return to it.
    pub(crate) fn closed(mut points: Vec<Coord>) -> Self {
        if points.len() == 1 || points.first() != points.last() {
            if let Some(&first) = points.first() {
                points.push(first);
            }
        }
        Self(points)
    }

    pub fn points(&self) -> &[Coord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_points(self) -> Vec<Coord> {
        self.0
    }

    /// Total boundary length: consecutive distances plus the closing edge
    /// from the last point back to the first.
    pub fn perimeter(&self) -> f64 {
        if self.0.len() < 2 {
            return 0.0;
        }
        let wrap = std::iter::once((self.0[self.0.len() - 1], self.0[0]));
        self.0
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(wrap)
            .map(|(a, b)| a.distance(b))
            .sum()
    }
}

/// Moore neighborhood in clockwise order, starting north.
const MOORE: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

const WEST: usize = 6;

fn neighbor(p: (usize, usize), dir: usize) -> (isize, isize) {
    (p.0 as isize + MOORE[dir].0, p.1 as isize + MOORE[dir].1)
}

fn direction_between(from: (usize, usize), to: (isize, isize)) -> Option<usize> {
    let delta = (to.0 - from.0 as isize, to.1 - from.1 as isize);
    MOORE.iter().position(|&step| step == delta)
}

/// Follow the border of one connected component with Moore-neighbor
/// tracing, emitting pixel-center coordinates.
///
/// `start` must be the component's topmost-leftmost pixel, so that its
/// west neighbor is known to lie outside the component. The trace ends
/// when a (pixel, backtrack-direction) state repeats, which also closes
/// borders that pass through the same pixel twice (one-pixel-wide necks).
fn moore_trace<F>(inside: F, start: (usize, usize), cap: usize) -> Vec<Coord>
where
    F: Fn(usize, usize) -> bool,
{
    let mut points = vec![Coord::new(start.0 as f64, start.1 as f64)];
    let mut seen = HashSet::new();
    let mut current = start;
    let mut backtrack = WEST;
    seen.insert((current, backtrack));

    while points.len() <= cap {
        let mut advanced = false;
        for step in 1..=8 {
            let dir = (backtrack + step) % 8;
            let (nr, nc) = neighbor(current, dir);
            if nr < 0 || nc < 0 {
                continue;
            }
            let next = (nr as usize, nc as usize);
            if !inside(next.0, next.1) {
                continue;
            }
            // the neighbor scanned just before the hit becomes the new
            // backtrack cell
            let prev = neighbor(current, (dir + 7) % 8);
            let Some(back) = direction_between(next, prev) else {
                continue;
            };
            if !seen.insert((next, back)) {
                return points;
            }
            points.push(Coord::new(next.0 as f64, next.1 as f64));
            current = next;
            backtrack = back;
            advanced = true;
            break;
        }
        if !advanced {
            break;
        }
    }
    points
}

/// Background cells reachable from the padded border (4-connectivity).
fn exterior_background(padded: &Array2<bool>) -> Array2<bool> {
    let (rows, cols) = padded.dim();
    let mut exterior = Array2::from_elem((rows, cols), false);
    let mut queue = VecDeque::new();
    queue.push_back((0usize, 0usize));

    while let Some((r, c)) = queue.pop_front() {
        if exterior[[r, c]] {
            continue;
        }
        exterior[[r, c]] = true;
        if r > 0 && !padded[[r - 1, c]] && !exterior[[r - 1, c]] {
            queue.push_back((r - 1, c));
        }
        if r + 1 < rows && !padded[[r + 1, c]] && !exterior[[r + 1, c]] {
            queue.push_back((r + 1, c));
        }
        if c > 0 && !padded[[r, c - 1]] && !exterior[[r, c - 1]] {
            queue.push_back((r, c - 1));
        }
        if c + 1 < cols && !padded[[r, c + 1]] && !exterior[[r, c + 1]] {
            queue.push_back((r, c + 1));
        }
    }
    exterior
}

/// Mark every pixel of the 8-connected foreground region containing `start`.
fn flood_region(padded: &Array2<bool>, seen: &mut Array2<bool>, start: (usize, usize)) {
    let (rows, cols) = padded.dim();
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some((r, c)) = queue.pop_front() {
        if seen[[r, c]] {
            continue;
        }
        seen[[r, c]] = true;
        for &(dr, dc) in &MOORE {
            let (nr, nc) = (r as isize + dr, c as isize + dc);
            if nr < 0 || nc < 0 || nr as usize >= rows || nc as usize >= cols {
                continue;
            }
            let n = (nr as usize, nc as usize);
            if padded[[n.0, n.1]] && !seen[[n.0, n.1]] {
                queue.push_back(n);
            }
        }
    }
}

/// Label every pixel of the 4-connected background cavity containing `start`.
fn flood_cavity(
    padded: &Array2<bool>,
    labels: &mut Array2<u32>,
    start: (usize, usize),
    id: u32,
) {
    let (rows, cols) = padded.dim();
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some((r, c)) = queue.pop_front() {
        if labels[[r, c]] == id {
            continue;
        }
        labels[[r, c]] = id;
        let sides = [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)];
        for (dr, dc) in sides {
            let (nr, nc) = (r as isize + dr, c as isize + dc);
            if nr < 0 || nc < 0 || nr as usize >= rows || nc as usize >= cols {
                continue;
            }
            let n = (nr as usize, nc as usize);
            if !padded[[n.0, n.1]] && labels[[n.0, n.1]] == 0 {
                queue.push_back(n);
            }
        }
    }
}

/// Trace every closed boundary of a padded mask.
///
/// Emits one contour per 8-connected foreground region (its outer border)
/// and one per enclosed background cavity (its interior border), in
/// row-major discovery order with outer borders first. The padded border
/// must be entirely background, which [`crate::Mask::padded`] guarantees;
/// a mask without foreground produces an empty set.
pub fn trace_contours(padded: &Array2<bool>) -> Vec<Contour> {
    let (rows, cols) = padded.dim();
    let cap = rows * cols * 8;
    let mut contours = Vec::new();

    let mut region_seen = Array2::from_elem((rows, cols), false);
    for r in 0..rows {
        for c in 0..cols {
            if padded[[r, c]] && !region_seen[[r, c]] {
                flood_region(padded, &mut region_seen, (r, c));
                let points = moore_trace(
                    |rr, cc| padded.get((rr, cc)).is_some_and(|&v| v),
                    (r, c),
                    cap,
                );
                contours.push(Contour::closed(points));
            }
        }
    }

    let exterior = exterior_background(padded);
    let mut cavity_labels = Array2::from_elem((rows, cols), 0u32);
    let mut next_id = 0u32;
    for r in 0..rows {
        for c in 0..cols {
            if !padded[[r, c]] && !exterior[[r, c]] && cavity_labels[[r, c]] == 0 {
                next_id += 1;
                flood_cavity(padded, &mut cavity_labels, (r, c), next_id);
                let id = next_id;
                let points = moore_trace(
                    |rr, cc| cavity_labels.get((rr, cc)).is_some_and(|&v| v == id),
                    (r, c),
                    cap,
                );
                contours.push(Contour::closed(points));
            }
        }
    }

    contours
}

/// Index of the contour with the largest perimeter, first maximum wins.
///
/// Returns `None` for an empty set; callers are expected to short-circuit
/// to the empty-polygon result in that case.
pub fn dominant_contour(contours: &[Contour]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, contour) in contours.iter().enumerate() {
        let perimeter = contour.perimeter();
        if best.is_none_or(|(_, top)| perimeter > top) {
            best = Some((index, perimeter));
        }
    }
    best.map(|(index, _)| index)
}
