//! Pixelwise mask combination
//!
//! The mask vocabulary of the segmentation pipelines: union (pixelwise
//! max), intersection (pixelwise min), inversion (foreground minus value)
//! and exclusion. All operations require equal dimensions.

use cranioseg_core::{Grid, Intensity, Mask, Result};
use ndarray::Zip;

/// Pixelwise maximum of two masks (set union for binary encodings)
pub fn mask_union<T: Intensity>(a: &Mask<T>, b: &Mask<T>) -> Result<Mask<T>> {
    a.ensure_same_shape(b)?;
    let data = Zip::from(a.data())
        .and(b.data())
        .map_collect(|&x, &y| if y > x { y } else { x });
    Ok(Grid::from_array(data))
}

/// Pixelwise minimum of two masks (set intersection for binary encodings)
pub fn mask_intersect<T: Intensity>(a: &Mask<T>, b: &Mask<T>) -> Result<Mask<T>> {
    a.ensure_same_shape(b)?;
    let data = Zip::from(a.data())
        .and(b.data())
        .map_collect(|&x, &y| if y < x { y } else { x });
    Ok(Grid::from_array(data))
}

/// Complement of a mask: foreground becomes background and vice versa.
///
/// Computed as `foreground - value` so it is exact for both the {0, 1}
/// float and {0, 255} u8 encodings.
pub fn mask_invert<T: Intensity>(mask: &Mask<T>) -> Result<Mask<T>> {
    mask.ensure_non_empty()?;
    let fg = T::foreground().to_f64();
    let data = mask.data().map(|&v| {
        let inverted = fg - v.to_f64();
        T::from_fraction(inverted / fg)
    });
    Ok(Grid::from_array(data))
}

/// Clear every cell of `mask` where `exclusion` is foreground.
pub fn zero_where<T: Intensity>(mask: &Mask<T>, exclusion: &Mask<T>) -> Result<Mask<T>> {
    mask.ensure_same_shape(exclusion)?;
    let bg = T::zero();
    let data = Zip::from(mask.data())
        .and(exclusion.data())
        .map_collect(|&v, &e| if e > bg { bg } else { v });
    Ok(Grid::from_array(data))
}
