//! Baseline hemorrhage-candidate pipeline
//!
//! Band-passes the mid-intensity range plausibly hemorrhagic, removes
//! everything touching bone or exterior void, and cleans up small
//! fragments.

use crate::morphology::{
    dilate, erode, mask_intersect, mask_union, threshold, zero_where, StructuringElement,
    ThresholdMode,
};
use cranioseg_core::{Algorithm, Error, Grid, Image, Intensity, Mask, Result};

// The exclusion thresholds are deliberately distinct named constants,
// not shared with BrainMaskParams: the original tuning diverges and it
// is unresolved whether that is intentional.

/// Bone exclusion threshold as a fraction of the domain range
const BONE_EXCLUSION_FRACTION: f64 = 0.4;
/// Growth of the bone exclusion zone
const BONE_EXCLUSION_DILATE_EXTENT: usize = 10;
/// Void exclusion threshold as a fraction of the domain range
const VOID_EXCLUSION_FRACTION: f64 = 0.02;
/// Shrink applied to the raw void estimate before growing it
const VOID_EXCLUSION_ERODE_EXTENT: usize = 10;
/// Growth of the void exclusion zone
const VOID_EXCLUSION_DILATE_EXTENT: usize = 50;
/// Cleanup erosion extent
const CLEAN_ERODE_EXTENT: usize = 6;
/// Cleanup dilation extent
const CLEAN_DILATE_EXTENT: usize = 7;

/// Configuration of the baseline pipeline: the intensity band associated
/// with candidate hemorrhage. Defaults correspond to fractions 0.17 and
/// 0.4 of the domain range.
#[derive(Debug, Clone)]
pub struct BaselineMaskParams<T: Intensity> {
    /// Lower band edge (values >= this are kept)
    pub min_threshold: T,
    /// Upper band edge (values >= this are cut)
    pub max_threshold: T,
}

impl<T: Intensity> Default for BaselineMaskParams<T> {
    fn default() -> Self {
        Self {
            min_threshold: T::from_fraction(0.17),
            max_threshold: T::from_fraction(0.4),
        }
    }
}

/// Baseline pipeline as an [`Algorithm`]
#[derive(Debug, Clone, Default)]
pub struct BaselineMask;

impl Algorithm for BaselineMask {
    type Input = Grid<f64>;
    type Output = Grid<f64>;
    type Params = BaselineMaskParams<f64>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "BaselineMask"
    }

    fn description(&self) -> &'static str {
        "Mid-intensity hemorrhage-candidate mask excluding bone and void"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        baseline_mask(&input, &params)
    }
}

/// Compute the baseline hemorrhage-candidate mask of a CT slice.
pub fn baseline_mask<T: Intensity>(
    image: &Image<T>,
    params: &BaselineMaskParams<T>,
) -> Result<Mask<T>> {
    image.ensure_non_empty()?;

    // Mid-intensity band
    let low = threshold(image, params.min_threshold, ThresholdMode::Binary)?;
    let high = threshold(image, params.max_threshold, ThresholdMode::BinaryInv)?;
    let mask = mask_intersect(&low, &high)?;

    // Bone exclusion zone
    let bone = threshold(
        image,
        T::from_fraction(BONE_EXCLUSION_FRACTION),
        ThresholdMode::Binary,
    )?;
    let bone = dilate(
        &bone,
        &StructuringElement::ellipse(BONE_EXCLUSION_DILATE_EXTENT),
    )?;

    // Exterior-void exclusion zone
    let void = threshold(
        image,
        T::from_fraction(VOID_EXCLUSION_FRACTION),
        ThresholdMode::BinaryInv,
    )?;
    let void = erode(
        &void,
        &StructuringElement::ellipse(VOID_EXCLUSION_ERODE_EXTENT),
    )?;
    let void = dilate(
        &void,
        &StructuringElement::ellipse(VOID_EXCLUSION_DILATE_EXTENT),
    )?;

    // Cut everything not touching brain tissue
    let mask = zero_where(&mask, &mask_union(&bone, &void)?)?;

    // Remove small fragments
    let mask = erode(&mask, &StructuringElement::ellipse(CLEAN_ERODE_EXTENT))?;
    dilate(&mask, &StructuringElement::ellipse(CLEAN_DILATE_EXTENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_image_yields_empty_mask() {
        let image: Grid<f64> = Grid::new(24, 24);
        let mask = baseline_mask(&image, &BaselineMaskParams::default()).unwrap();
        assert_eq!(mask.count_foreground(), 0);
    }

    #[test]
    fn test_empty_image_is_error() {
        let image: Grid<f64> = Grid::new(0, 0);
        assert!(baseline_mask(&image, &BaselineMaskParams::default()).is_err());
    }

    #[test]
    fn test_out_of_band_image_yields_empty_mask() {
        // Uniform intensity above the band and the bone threshold
        let image: Grid<f64> = Grid::filled(24, 24, 0.9);
        let mask = baseline_mask(&image, &BaselineMaskParams::default()).unwrap();
        assert_eq!(mask.count_foreground(), 0);
    }

    #[test]
    fn test_default_band_scales_to_u8() {
        let params: BaselineMaskParams<u8> = BaselineMaskParams::default();
        assert_eq!(params.min_threshold, 43);
        assert_eq!(params.max_threshold, 102);
    }
}
