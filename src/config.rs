/// Default fraction of a boundary's larger bounding-box dimension used as
/// the simplification tolerance.
pub const DEFAULT_TOLERANCE_FACTOR: f64 = 0.004;

/// Options describing how a traced boundary is reduced to a polygon.
#[derive(Debug, Clone)]
pub struct PolygonOptions {
    /// Simplification tolerance as a fraction of the boundary's larger
    /// bounding-box dimension. Larger values drop more vertices.
    pub tolerance_factor: f64,
}

impl Default for PolygonOptions {
    fn default() -> Self {
        Self {
            tolerance_factor: DEFAULT_TOLERANCE_FACTOR,
        }
    }
}

/// Options describing how a grayscale matte is turned into a binary mask.
#[derive(Debug, Clone)]
pub struct MaskPrepOptions {
    pub blur: bool,
    pub blur_sigma: f32,
    pub threshold: u8,
    pub fill_holes: bool,
}

impl Default for MaskPrepOptions {
    fn default() -> Self {
        Self {
            blur: false,
            blur_sigma: 6.0,
            threshold: 120,
            fill_holes: false,
        }
    }
}
