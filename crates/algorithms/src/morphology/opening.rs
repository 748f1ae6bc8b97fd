//! Morphological opening (erosion followed by dilation)
//!
//! Removes foreground components smaller than the structuring element
//! while preserving the shape of larger regions.

use cranioseg_core::{Algorithm, Error, Grid, Intensity, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological opening
#[derive(Debug, Clone, Default)]
pub struct OpeningParams {
    /// Structuring element extent
    pub element: StructuringElement,
}

/// Opening algorithm
#[derive(Debug, Clone, Default)]
pub struct Opening;

impl Algorithm for Opening {
    type Input = Grid<f64>;
    type Output = Grid<f64>;
    type Params = OpeningParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Opening"
    }

    fn description(&self) -> &'static str {
        "Morphological opening (erosion then dilation) to remove small foreground regions"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        opening(&input, &params.element)
    }
}

/// Perform morphological opening on a grid.
///
/// Opening = erode then dilate with the same element. Removes foreground
/// specks and thin protrusions narrower than the element; idempotent
/// under repetition.
pub fn opening<T: Intensity>(grid: &Grid<T>, element: &StructuringElement) -> Result<Grid<T>> {
    let eroded = erode(grid, element)?;
    dilate(&eroded, element)
}
