use crate::error::MaskShapeResult;
use crate::mask::Mask;

/// A trait representing an algorithm that can turn a mask into a vector
/// representation.
pub trait MaskVectorizer {
    type Options;
    type Output;

    fn vectorize(&self, mask: &Mask, options: &Self::Options) -> MaskShapeResult<Self::Output>;
}

pub mod outline;
