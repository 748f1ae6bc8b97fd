//! Morphological erosion (minimum filter)
//!
//! Replaces each pixel with the minimum value in its elliptical
//! neighborhood. Shrinks foreground regions of a mask.

use crate::maybe_rayon::*;
use cranioseg_core::{Algorithm, Error, Grid, Intensity, Result};

use super::element::StructuringElement;

/// Parameters for morphological erosion
#[derive(Debug, Clone, Default)]
pub struct ErodeParams {
    /// Structuring element extent
    pub element: StructuringElement,
}

/// Erosion algorithm
#[derive(Debug, Clone, Default)]
pub struct Erode;

impl Algorithm for Erode {
    type Input = Grid<f64>;
    type Output = Grid<f64>;
    type Params = ErodeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Erode"
    }

    fn description(&self) -> &'static str {
        "Morphological erosion (minimum filter over an elliptical element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        erode(&input, &params.element)
    }
}

/// Perform morphological erosion on a grid.
///
/// Each output pixel is the minimum value within the elliptical
/// neighborhood. Samples outside the grid never participate in the
/// minimum, so border foreground shrinks only from available samples;
/// this keeps erosion dual to dilation under mask inversion.
/// An identity element returns the input unchanged.
///
/// # Arguments
/// * `grid` - Input grid (image or mask)
/// * `element` - Structuring element defining the neighborhood extent
pub fn erode<T: Intensity>(grid: &Grid<T>, element: &StructuringElement) -> Result<Grid<T>> {
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
                let mut min_val = unsafe { grid.get_unchecked(row, col) };

                for &(dr, dc) in &offsets {
                    let nr = row as isize + dr;
                    let nc = col as isize + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        continue;
                    }
                    let v = unsafe { grid.get_unchecked(nr as usize, nc as usize) };
                    if v < min_val {
                        min_val = v;
                    }
                }

                row_data.push(min_val);
            }

            row_data
        })
        .collect();

    Grid::from_vec(output_data, rows, cols)
}
