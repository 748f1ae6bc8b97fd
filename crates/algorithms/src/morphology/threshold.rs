//! Binary thresholding
//!
//! Converts an intensity image into a mask whose values are restricted
//! to {0, foreground} for the image's value domain.

use crate::maybe_rayon::*;
use cranioseg_core::{Algorithm, Error, Grid, Image, Intensity, Mask, Result};

/// Foreground selection rule for [`threshold`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdMode {
    /// Values >= t become foreground
    #[default]
    Binary,
    /// Values < t become foreground
    BinaryInv,
}

/// Parameters for binary thresholding
#[derive(Debug, Clone, Default)]
pub struct ThresholdParams {
    /// Threshold value in the image's domain
    pub t: f64,
    /// Foreground selection rule
    pub mode: ThresholdMode,
}

/// Thresholding algorithm
#[derive(Debug, Clone, Default)]
pub struct Threshold;

impl Algorithm for Threshold {
    type Input = Grid<f64>;
    type Output = Grid<f64>;
    type Params = ThresholdParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Threshold"
    }

    fn description(&self) -> &'static str {
        "Binary thresholding of an intensity image into a {0, foreground} mask"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        threshold(&input, params.t, params.mode)
    }
}

/// Threshold an image into a binary mask.
///
/// `Binary` marks values >= `t` as foreground, `BinaryInv` marks values
/// strictly below `t`. The mask has the image's dimensions and uses the
/// domain's foreground value (1.0 for floats, 255 for u8).
pub fn threshold<T: Intensity>(image: &Image<T>, t: T, mode: ThresholdMode) -> Result<Mask<T>> {
    image.ensure_non_empty()?;

    let (rows, cols) = image.shape();
    let fg = T::foreground();
    let bg = T::zero();

    let output_data: Vec<T> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = Vec::with_capacity(cols);
            for col in 0..cols {
                let v = unsafe { image.get_unchecked(row, col) };
                let selected = match mode {
                    ThresholdMode::Binary => v >= t,
                    ThresholdMode::BinaryInv => v < t,
                };
                row_data.push(if selected { fg } else { bg });
            }
            row_data
        })
        .collect();

    Grid::from_vec(output_data, rows, cols)
}
