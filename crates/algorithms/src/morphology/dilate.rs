//! Morphological dilation (maximum filter)
//!
//! Replaces each pixel with the maximum value in its elliptical
//! neighborhood. Expands foreground regions of a mask.

use crate::maybe_rayon::*;
use cranioseg_core::{Algorithm, Error, Grid, Intensity, Result};

use super::element::StructuringElement;

/// Parameters for morphological dilation
#[derive(Debug, Clone, Default)]
pub struct DilateParams {
    /// Structuring element extent
    pub element: StructuringElement,
}

/// Dilation algorithm
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl Algorithm for Dilate {
    type Input = Grid<f64>;
    type Output = Grid<f64>;
    type Params = DilateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Morphological dilation (maximum filter over an elliptical element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        dilate(&input, &params.element)
    }
}

/// Perform morphological dilation on a grid.
///
/// Each output pixel is the maximum value within the elliptical
/// neighborhood. Samples outside the grid never participate in the
/// maximum, so border foreground grows only from available samples.
/// An identity element returns the input unchanged.
///
/// # Arguments
/// * `grid` - Input grid (image or mask)
/// * `element` - Structuring element defining the neighborhood extent
pub fn dilate<T: Intensity>(grid: &Grid<T>, element: &StructuringElement) -> Result<Grid<T>> {
    grid.ensure_non_empty()?;
    if element.is_identity() {
        return Ok(grid.clone());
    }

    let (rows, cols) = grid.shape();
    let offsets = element.offsets();

    let output_data: Vec<T> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = Vec::with_capacity(cols);

            for col in 0..cols {
                let mut max_val = unsafe { grid.get_unchecked(row, col) };

                for &(dr, dc) in &offsets {
                    let nr = row as isize + dr;
                    let nc = col as isize + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        continue;
                    }
                    let v = unsafe { grid.get_unchecked(nr as usize, nc as usize) };
                    if v > max_val {
                        max_val = v;
                    }
                }

                row_data.push(max_val);
            }

            row_data
        })
        .collect();

    Grid::from_vec(output_data, rows, cols)
}
