use crate::contour::Coord;
use crate::mask::PAD;

/// A vertex in caller convention: x is the column axis, y the row axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The final annotation shape.
///
/// Either empty (no usable boundary) or a sequence of at least three
/// vertices with no consecutive duplicates and first vertex distinct from
/// the last; every component lies within `[0, W-1] x [0, H-1]`. Only
/// [`finalize`] constructs non-empty polygons, which is what upholds the
/// invariants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon(Vec<Point>);

impl Polygon {
    /// The canonical "no boundary found" result.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

/// Finalize a simplified boundary into a [`Polygon`].
///
/// `points` are (row, col) coordinates in the padded tracing frame; `rows`
/// and `cols` are the dimensions of the original, unpadded mask. The
/// traced coordinates are shifted back out of the padded frame before
/// clipping, so a region touching the mask edge finalizes at coordinate 0
/// rather than 1. Clipping, closing-point removal and duplicate collapse
/// can leave fewer than three vertices; such degenerate shapes finalize to
/// the empty polygon.
pub fn finalize(points: &[Coord], rows: usize, cols: usize) -> Polygon {
    let offset = PAD as f64;
    let max_row = rows.saturating_sub(1) as f64;
    let max_col = cols.saturating_sub(1) as f64;

    let mut vertices: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        let row = (p.row - offset).clamp(0.0, max_row);
        let col = (p.col - offset).clamp(0.0, max_col);
        let vertex = Point::new(col, row);
        if vertices.last() == Some(&vertex) {
            continue;
        }
        vertices.push(vertex);
    }

    while vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }

    if vertices.len() < 3 {
        return Polygon::empty();
    }
    Polygon(vertices)
}
