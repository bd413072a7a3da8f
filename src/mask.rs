use std::collections::VecDeque;

use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;
use ndarray::{Array2, s};

use crate::config::MaskPrepOptions;
use crate::error::{MaskShapeError, MaskShapeResult};

/// Width of the background border added around a mask before tracing.
pub(crate) const PAD: usize = 1;

/// A validated binary segmentation mask.
///
/// Row-major grid of booleans where `true` marks foreground. Both
/// dimensions are guaranteed to be at least 1; construction fails with
/// [`MaskShapeError::EmptyMask`] otherwise, so downstream stages never see
/// a degenerate grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    grid: Array2<bool>,
}

impl Mask {
    /// Wrap an existing grid, rejecting zero-sized dimensions.
    pub fn new(grid: Array2<bool>) -> MaskShapeResult<Self> {
        let (rows, cols) = grid.dim();
        if rows == 0 || cols == 0 {
            return Err(MaskShapeError::EmptyMask { rows, cols });
        }
        Ok(Self { grid })
    }

    /// Build a mask by evaluating `f` at every (row, col) cell.
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> MaskShapeResult<Self>
    where
        F: FnMut((usize, usize)) -> bool,
    {
        if rows == 0 || cols == 0 {
            return Err(MaskShapeError::EmptyMask { rows, cols });
        }
        Ok(Self {
            grid: Array2::from_shape_fn((rows, cols), f),
        })
    }

    /// Build a mask from a row-major buffer of booleans.
    pub fn from_raw(rows: usize, cols: usize, data: Vec<bool>) -> MaskShapeResult<Self> {
        let grid = Array2::from_shape_vec((rows, cols), data)?;
        Self::new(grid)
    }

    /// Binarize a grayscale matte: pixels strictly above `threshold` become
    /// foreground.
    pub fn from_gray(gray: &GrayImage, threshold: u8) -> MaskShapeResult<Self> {
        let (w, h) = gray.dimensions();
        Self::from_fn(h as usize, w as usize, |(r, c)| {
            gray.get_pixel(c as u32, r as u32)[0] > threshold
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.nrows()
    }

    pub fn cols(&self) -> usize {
        self.grid.ncols()
    }

    /// Cell value at (row, col), or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.grid.get((row, col)).copied()
    }

    /// Number of foreground cells.
    pub fn count_foreground(&self) -> usize {
        self.grid.iter().filter(|&&v| v).count()
    }

    pub fn as_grid(&self) -> &Array2<bool> {
        &self.grid
    }

    /// Surround the mask with a one-cell background border.
    ///
    /// Foreground touching the mask edge then still has a fully closed
    /// boundary to trace instead of a curve cut off at the array edge.
    pub fn padded(&self) -> Array2<bool> {
        let (rows, cols) = self.grid.dim();
        let mut padded = Array2::from_elem((rows + 2 * PAD, cols + 2 * PAD), false);
        padded
            .slice_mut(s![PAD..rows + PAD, PAD..cols + PAD])
            .assign(&self.grid);
        padded
    }
}

/// Binarize a grayscale matte into a mask.
///
/// Same threshold semantics as [`Mask::from_gray`]: strictly greater than
/// `threshold` is foreground.
pub fn binarize(gray: &GrayImage, threshold: u8) -> MaskShapeResult<Mask> {
    Mask::from_gray(gray, threshold)
}

/// Fill enclosed background cavities in a mask.
///
/// Background connected to the mask border (4-connectivity) stays
/// background; any remaining background is an enclosed hole and becomes
/// foreground.
pub fn fill_holes(mask: &Mask) -> Mask {
    let (rows, cols) = (mask.rows(), mask.cols());
    let grid = mask.as_grid();
    let mut outside = Array2::from_elem((rows, cols), false);
    let mut queue = VecDeque::new();

    for c in 0..cols {
        if !grid[[0, c]] {
            queue.push_back((0, c));
        }
        if !grid[[rows - 1, c]] {
            queue.push_back((rows - 1, c));
        }
    }
    for r in 0..rows {
        if !grid[[r, 0]] {
            queue.push_back((r, 0));
        }
        if !grid[[r, cols - 1]] {
            queue.push_back((r, cols - 1));
        }
    }

    while let Some((r, c)) = queue.pop_front() {
        if outside[[r, c]] {
            continue;
        }
        outside[[r, c]] = true;

        if r > 0 && !grid[[r - 1, c]] && !outside[[r - 1, c]] {
            queue.push_back((r - 1, c));
        }
        if r + 1 < rows && !grid[[r + 1, c]] && !outside[[r + 1, c]] {
            queue.push_back((r + 1, c));
        }
        if c > 0 && !grid[[r, c - 1]] && !outside[[r, c - 1]] {
            queue.push_back((r, c - 1));
        }
        if c + 1 < cols && !grid[[r, c + 1]] && !outside[[r, c + 1]] {
            queue.push_back((r, c + 1));
        }
    }

    Mask {
        grid: Array2::from_shape_fn((rows, cols), |(r, c)| grid[[r, c]] || !outside[[r, c]]),
    }
}

/// Turn a grayscale matte into a mask using the full preparation sequence:
/// optional Gaussian blur, binarization, optional hole filling.
pub fn prepare_mask(gray: &GrayImage, options: &MaskPrepOptions) -> MaskShapeResult<Mask> {
    let source = if options.blur {
        gaussian_blur_f32(gray, options.blur_sigma)
    } else {
        gray.clone()
    };
    let mask = binarize(&source, options.threshold)?;
    Ok(if options.fill_holes {
        fill_holes(&mask)
    } else {
        mask
    })
}
