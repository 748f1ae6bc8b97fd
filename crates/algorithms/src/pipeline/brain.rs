//! Brain-mask pipeline
//!
//! Isolates brain parenchyma on a cranial CT slice by excluding bone and
//! background void, optionally restricting the candidate region to the
//! convex envelope of the skull.

use crate::contour::convex_hull_mask;
use crate::morphology::{
    dilate, mask_intersect, mask_invert, mask_union, opening, threshold, StructuringElement,
    ThresholdMode,
};
use cranioseg_core::{Algorithm, Error, Grid, Image, Intensity, Mask, Result};

/// Denoising dilation applied to the raw void mask
const NOISE_DILATE_EXTENT: usize = 3;
/// Opening extent that only large exterior void regions survive
const BIG_VOID_OPENING_EXTENT: usize = 50;
/// Growth applied to the large-void estimate
const BIG_VOID_DILATE_EXTENT: usize = 30;

/// Configuration of the brain-mask pipeline.
///
/// Thresholds are expressed in the image's value domain; the defaults
/// correspond to fractions 0.6 (bone) and 0.05 (void) of the domain range.
#[derive(Debug, Clone)]
pub struct BrainMaskParams<T: Intensity> {
    /// Bone detection threshold (values >= threshold are bone)
    pub bone_threshold: T,
    /// Void detection threshold (values < threshold are void). The
    /// default is a small positive value so exact-zero background is
    /// caught under the strict comparison.
    pub void_threshold: T,
    /// Extent by which the bone mask grows onto neighboring pixels
    pub bone_dilate_size: usize,
    /// Minimum size of isolated void patches that survive cleanup
    pub void_opening_size: usize,
    /// Extent by which the void mask grows onto neighboring pixels
    pub void_dilate_size: usize,
    /// Opening extent removing thin or spurious brain-candidate regions
    pub insides_opening_size: usize,
    /// Restrict the candidate to the convex envelope of the skull,
    /// discarding extracranial false positives
    pub use_bone_convex_hull: bool,
}

impl<T: Intensity> Default for BrainMaskParams<T> {
    fn default() -> Self {
        Self {
            bone_threshold: T::from_fraction(0.6),
            void_threshold: T::from_fraction(0.05),
            bone_dilate_size: 8,
            void_opening_size: 10,
            void_dilate_size: 10,
            insides_opening_size: 40,
            use_bone_convex_hull: true,
        }
    }
}

/// Final brain mask together with the intermediate bone and void masks
#[derive(Debug, Clone)]
pub struct BrainMaskDiagnostics<T: Intensity> {
    pub brain: Mask<T>,
    pub bone: Mask<T>,
    pub void: Mask<T>,
}

/// Brain-mask pipeline as an [`Algorithm`]
#[derive(Debug, Clone, Default)]
pub struct BrainMask;

impl Algorithm for BrainMask {
    type Input = Grid<f64>;
    type Output = Grid<f64>;
    type Params = BrainMaskParams<f64>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "BrainMask"
    }

    fn description(&self) -> &'static str {
        "Isolate brain parenchyma by excluding bone and background void"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        brain_mask(&input, &params)
    }
}

/// Compute the brain mask of a CT slice.
pub fn brain_mask<T: Intensity>(image: &Image<T>, params: &BrainMaskParams<T>) -> Result<Mask<T>> {
    Ok(brain_mask_with_diagnostics(image, params)?.brain)
}

/// Compute the brain mask, returning the intermediate bone and void
/// masks alongside for diagnostics.
pub fn brain_mask_with_diagnostics<T: Intensity>(
    image: &Image<T>,
    params: &BrainMaskParams<T>,
) -> Result<BrainMaskDiagnostics<T>> {
    image.ensure_non_empty()?;

    // Bone by threshold, grown onto neighboring pixels
    let bone = threshold(image, params.bone_threshold, ThresholdMode::Binary)?;
    let bone = dilate(&bone, &StructuringElement::ellipse(params.bone_dilate_size))?;

    // Void by inverse threshold, denoised, with patches smaller than the
    // opening extent removed
    let void = threshold(image, params.void_threshold, ThresholdMode::BinaryInv)?;
    let void = dilate(&void, &StructuringElement::ellipse(NOISE_DILATE_EXTENT))?;
    let void = opening(&void, &StructuringElement::ellipse(params.void_opening_size))?;

    // Strictly exterior space; cavities inside the jaw or orbits do not
    // survive an opening this large
    let big_void = opening(&void, &StructuringElement::ellipse(BIG_VOID_OPENING_EXTENT))?;

    // Grow both void estimates onto neighboring pixels
    let void = dilate(&void, &StructuringElement::ellipse(params.void_dilate_size))?;
    let big_void = dilate(&big_void, &StructuringElement::ellipse(BIG_VOID_DILATE_EXTENT))?;
    let void = mask_union(&void, &big_void)?;

    // Brain candidate: neither bone nor void
    let mut brain = mask_invert(&mask_union(&bone, &void)?)?;

    if params.use_bone_convex_hull {
        brain = mask_intersect(&brain, &convex_hull_mask(&bone)?)?;
    }

    // Remove thin and spurious regions
    let brain = opening(&brain, &StructuringElement::ellipse(params.insides_opening_size))?;

    Ok(BrainMaskDiagnostics { brain, bone, void })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_image_yields_empty_mask() {
        let image: Grid<f64> = Grid::new(32, 32);
        let mask = brain_mask(&image, &BrainMaskParams::default()).unwrap();
        assert_eq!(mask.count_foreground(), 0);
        assert_eq!(mask.shape(), image.shape());
    }

    #[test]
    fn test_empty_image_is_error() {
        let image: Grid<f64> = Grid::new(0, 0);
        assert!(brain_mask(&image, &BrainMaskParams::default()).is_err());
    }

    #[test]
    fn test_diagnostics_dimensions() {
        let image: Grid<f64> = Grid::filled(24, 24, 0.3);
        let out = brain_mask_with_diagnostics(&image, &BrainMaskParams::default()).unwrap();
        assert_eq!(out.brain.shape(), (24, 24));
        assert_eq!(out.bone.shape(), (24, 24));
        assert_eq!(out.void.shape(), (24, 24));
    }

    #[test]
    fn test_default_fractions_scale_to_u8() {
        let params: BrainMaskParams<u8> = BrainMaskParams::default();
        assert_eq!(params.bone_threshold, 153);
        assert_eq!(params.void_threshold, 13);
    }

    #[test]
    fn test_default_void_threshold_catches_zero_background() {
        // Exact-zero margin wide enough to survive the void opening
        let params: BrainMaskParams<f64> = BrainMaskParams::default();
        let mut image: Grid<f64> = Grid::filled(32, 32, 0.3);
        for r in 0..32 {
            for c in 0..8 {
                image.set(r, c, 0.0).unwrap();
            }
        }
        let out = brain_mask_with_diagnostics(&image, &params).unwrap();
        assert!(out.void.is_foreground(16, 0));
        assert!(!out.void.is_foreground(16, 31));
    }
}
