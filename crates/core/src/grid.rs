//! 2D grid container for images and masks

use crate::error::{Error, Result};
use crate::intensity::Intensity;
use ndarray::{Array2, ArrayView2};

/// A 2D grid of intensity samples.
///
/// `Grid<T>` stores values of type `T` in row-major order. It backs both
/// images (arbitrary intensities) and masks (values restricted to
/// `{0, T::foreground()}` by the operations that produce them).
///
/// # Type Parameters
///
/// - `T`: The cell value type, must implement [`Intensity`]
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Intensity> {
    /// Grid data stored in row-major order (row, col)
    data: Array2<T>,
}

/// A grid of scalar intensity samples produced by an external loader.
pub type Image<T> = Grid<T>;

/// A binary grid with the same dimensions as its source image.
pub type Mask<T> = Grid<T>;

impl<T: Intensity> Grid<T> {
    /// Create a new grid filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a new grid filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create a grid from existing data in row-major order
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create a grid from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    /// Create a grid with the same dimensions, filled with a value
    pub fn like(&self, fill_value: T) -> Self {
        Self {
            data: Array2::from_elem(self.data.dim(), fill_value),
        }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Get a mutable reference to the underlying array
    pub fn data_mut(&mut self) -> &mut Array2<T> {
        &mut self.data
    }

    /// Consume the grid and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    /// Whether the cell at (row, col) is foreground (strictly above zero).
    ///
    /// Defined for any encoding, so float {0,1} and u8 {0,255} masks
    /// compare topologically.
    pub fn is_foreground(&self, row: usize, col: usize) -> bool {
        self.data
            .get((row, col))
            .map(|v| *v > T::zero())
            .unwrap_or(false)
    }

    /// Number of foreground cells
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|v| **v > T::zero()).count()
    }

    /// Error unless `other` has the same dimensions as `self`
    pub fn ensure_same_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            let (er, ec) = self.shape();
            let (ar, ac) = other.shape();
            return Err(Error::SizeMismatch { er, ec, ar, ac });
        }
        Ok(())
    }

    /// Error if the grid has no cells
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::InvalidDimensions {
                width: self.cols(),
                height: self.rows(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let g: Grid<f64> = Grid::new(4, 5);
        assert_eq!(g.shape(), (4, 5));
        assert_eq!(g.count_foreground(), 0);
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Grid::from_vec(vec![0.0_f64; 6], 2, 3).is_ok());
        assert!(Grid::from_vec(vec![0.0_f64; 5], 2, 3).is_err());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut g: Grid<u8> = Grid::new(3, 3);
        g.set(1, 2, 255).unwrap();
        assert_eq!(g.get(1, 2).unwrap(), 255);
        assert!(g.get(3, 0).is_err());
        assert!(g.set(0, 3, 1).is_err());
    }

    #[test]
    fn test_is_foreground_across_encodings() {
        let mut f: Grid<f64> = Grid::new(2, 2);
        let mut b: Grid<u8> = Grid::new(2, 2);
        f.set(0, 1, 1.0).unwrap();
        b.set(0, 1, 255).unwrap();
        for r in 0..2 {
            for c in 0..2 {
                assert_eq!(f.is_foreground(r, c), b.is_foreground(r, c));
            }
        }
    }

    #[test]
    fn test_ensure_same_shape() {
        let a: Grid<f64> = Grid::new(3, 4);
        let b: Grid<f64> = Grid::new(3, 4);
        let c: Grid<f64> = Grid::new(4, 3);
        assert!(a.ensure_same_shape(&b).is_ok());
        assert!(a.ensure_same_shape(&c).is_err());
    }

    #[test]
    fn test_ensure_non_empty() {
        let empty: Grid<f64> = Grid::new(0, 0);
        assert!(empty.ensure_non_empty().is_err());
        let g: Grid<f64> = Grid::new(1, 1);
        assert!(g.ensure_non_empty().is_ok());
    }
}
