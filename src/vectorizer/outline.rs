use crate::config::PolygonOptions;
use crate::contour::{dominant_contour, trace_contours};
use crate::diag::{DiagnosticSink, LogSink};
use crate::error::MaskShapeResult;
use crate::mask::Mask;
use crate::polygon::{Polygon, finalize};
use crate::simplify::{adaptive_tolerance, simplify_closed};

use super::MaskVectorizer;

/// Reduce a mask to the simplified polygon of its dominant boundary.
///
/// The mask is padded with a one-cell background border, every closed
/// boundary is traced, the one with the largest perimeter is kept,
/// simplified under an extent-relative tolerance and finalized into the
/// caller's (x, y) frame. Each empty-result path warns once through
/// `sink`: a mask with no boundary at all, or a boundary that collapses
/// below a triangle during finalization.
pub fn polygon_from_mask<S>(mask: &Mask, options: &PolygonOptions, sink: &S) -> Polygon
where
    S: DiagnosticSink,
{
    let padded = mask.padded();
    let contours = trace_contours(&padded);
    let Some(index) = dominant_contour(&contours) else {
        sink.warn("no boundary found, returning empty polygon");
        return Polygon::empty();
    };

    let boundary = contours[index].points();
    let tolerance = adaptive_tolerance(boundary, options.tolerance_factor);
    let simplified = simplify_closed(boundary, tolerance);
    let polygon = finalize(&simplified, mask.rows(), mask.cols());
    if polygon.is_empty() {
        sink.warn("boundary collapsed below a triangle, returning empty polygon");
    }
    polygon
}

/// Polygon-outline vectorizer implementation.
///
/// Carries the diagnostic sink it reports through; the default
/// construction warns via the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonVectorizer<S = LogSink> {
    sink: S,
}

impl PolygonVectorizer<LogSink> {
    pub fn new() -> Self {
        Self { sink: LogSink }
    }
}

impl<S: DiagnosticSink> PolygonVectorizer<S> {
    /// Use a custom diagnostic sink.
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: DiagnosticSink> MaskVectorizer for PolygonVectorizer<S> {
    type Options = PolygonOptions;
    type Output = Polygon;

    fn vectorize(&self, mask: &Mask, options: &Self::Options) -> MaskShapeResult<Self::Output> {
        Ok(polygon_from_mask(mask, options, &self.sink))
    }
}
