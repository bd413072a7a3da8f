pub mod config;
pub mod contour;
pub mod diag;
pub mod error;
pub mod mask;
pub mod polygon;
pub mod simplify;
pub mod vectorizer;

pub use config::{DEFAULT_TOLERANCE_FACTOR, MaskPrepOptions, PolygonOptions};
pub use diag::{BufferSink, DiagnosticSink, LogSink};
pub use error::{MaskShapeError, MaskShapeResult};
pub use mask::{Mask, binarize, fill_holes, prepare_mask};
pub use polygon::{Point, Polygon};
pub use vectorizer::MaskVectorizer;
pub use vectorizer::outline::{PolygonVectorizer, polygon_from_mask};

/// Entry point for configuring and running shape extraction.
///
/// Wraps the mask-to-polygon pipeline behind a builder-style API; each
/// call is independent, so one extractor can serve any number of masks,
/// concurrently if desired.
#[derive(Debug, Clone, Default)]
pub struct ShapeExtractor {
    options: PolygonOptions,
}

impl ShapeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simplification tolerance factor.
    pub fn with_tolerance_factor(mut self, factor: f64) -> Self {
        self.options.tolerance_factor = factor;
        self
    }

    /// Get a reference to the polygon options.
    pub fn options(&self) -> &PolygonOptions {
        &self.options
    }

    /// Extract the dominant boundary polygon from a mask, reporting
    /// diagnostics through the `log` crate.
    pub fn polygon(&self, mask: &Mask) -> Polygon {
        polygon_from_mask(mask, &self.options, &LogSink)
    }

    /// Extract the dominant boundary polygon, reporting diagnostics
    /// through the provided sink.
    pub fn polygon_with_sink<S: DiagnosticSink>(&self, mask: &Mask, sink: &S) -> Polygon {
        polygon_from_mask(mask, &self.options, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod shape_extractor {
        use super::*;

        mod unit {
            use super::*;

            #[test]
            fn default_uses_standard_tolerance() {
                let extractor = ShapeExtractor::new();
                assert!(
                    (extractor.options().tolerance_factor - DEFAULT_TOLERANCE_FACTOR).abs()
                        < f64::EPSILON
                );
            }

            #[test]
            fn builder_overrides_tolerance() {
                let extractor = ShapeExtractor::new().with_tolerance_factor(0.01);
                assert!((extractor.options().tolerance_factor - 0.01).abs() < f64::EPSILON);
            }

            #[test]
            fn polygon_matches_pipeline_output() {
                let mask = Mask::from_fn(6, 6, |(r, c)| (1..=4).contains(&r) && (1..=4).contains(&c))
                    .unwrap();
                let extractor = ShapeExtractor::new();
                let via_extractor = extractor.polygon(&mask);
                let direct =
                    polygon_from_mask(&mask, extractor.options(), &BufferSink::new());
                assert_eq!(via_extractor, direct);
            }

            #[test]
            fn custom_sink_receives_warnings() {
                let mask = Mask::from_fn(4, 4, |_| false).unwrap();
                let sink = BufferSink::new();
                let polygon = ShapeExtractor::new().polygon_with_sink(&mask, &sink);
                assert!(polygon.is_empty());
                assert_eq!(sink.messages().len(), 1);
            }

            #[test]
            fn extractor_is_reusable_across_masks() {
                let extractor = ShapeExtractor::new();
                let square =
                    Mask::from_fn(5, 5, |(r, c)| (1..=3).contains(&r) && (1..=3).contains(&c))
                        .unwrap();
                let blank = Mask::from_fn(5, 5, |_| false).unwrap();
                let sink = BufferSink::new();
                assert!(!extractor.polygon_with_sink(&square, &sink).is_empty());
                assert!(extractor.polygon_with_sink(&blank, &sink).is_empty());
                assert!(!extractor.polygon_with_sink(&square, &sink).is_empty());
                assert_eq!(sink.messages().len(), 1);
            }
        }
    }
}
