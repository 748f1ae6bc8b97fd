//! Morphological closing (dilation followed by erosion)
//!
//! Bridges small background gaps and fills small holes while preserving
//! the shape of larger background regions.

use cranioseg_core::{Algorithm, Error, Grid, Intensity, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological closing
#[derive(Debug, Clone, Default)]
pub struct ClosingParams {
    /// Structuring element extent
    pub element: StructuringElement,
}

/// Closing algorithm
#[derive(Debug, Clone, Default)]
pub struct Closing;

impl Algorithm for Closing {
    type Input = Grid<f64>;
    type Output = Grid<f64>;
    type Params = ClosingParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Closing"
    }

    fn description(&self) -> &'static str {
        "Morphological closing (dilation then erosion) to fill small background gaps"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        closing(&input, &params.element)
    }
}

/// Perform morphological closing on a grid.
///
/// Closing = dilate then erode with the same element. Fills background
/// gaps narrower than the element; idempotent under repetition.
pub fn closing<T: Intensity>(grid: &Grid<T>, element: &StructuringElement) -> Result<Grid<T>> {
    let dilated = dilate(grid, element)?;
    erode(&dilated, element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap_mask() -> Grid<f64> {
        let mut grid: Grid<f64> = Grid::filled(13, 13, 1.0);
        // Single background pixel inside foreground
        grid.set(6, 6, 0.0).unwrap();
        grid
    }

    #[test]
    fn test_closing_fills_hole() {
        let result = closing(&gap_mask(), &StructuringElement::ellipse(3)).unwrap();
        assert_eq!(result.get(6, 6).unwrap(), 1.0);
    }

    #[test]
    fn test_closing_idempotent() {
        let mut grid: Grid<f64> = Grid::new(19, 19);
        for r in 6..13 {
            for c in 6..9 {
                grid.set(r, c, 1.0).unwrap();
            }
        }
        for r in 6..13 {
            for c in 11..14 {
                grid.set(r, c, 1.0).unwrap();
            }
        }

        for size in [3, 5, 7] {
            let element = StructuringElement::ellipse(size);
            let once = closing(&grid, &element).unwrap();
            let twice = closing(&once, &element).unwrap();
            assert_eq!(once, twice, "closing not idempotent for extent {}", size);
        }
    }

    #[test]
    fn test_closing_is_superset_of_input() {
        let grid = gap_mask();
        let result = closing(&grid, &StructuringElement::ellipse(5)).unwrap();
        for r in 0..13 {
            for c in 0..13 {
                if grid.is_foreground(r, c) {
                    assert!(result.is_foreground(r, c));
                }
            }
        }
    }
}
