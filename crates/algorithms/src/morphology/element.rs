//! Elliptical structuring element
//!
//! A structuring element defines the neighborhood extent used in
//! erosion, dilation, and the derived opening/closing transforms.

/// Elliptical (disk) structuring element sized by pixel extent.
///
/// A requested extent `k` realizes a symmetric kernel of radius `k / 2`,
/// so the actual footprint is always odd-sized (extent 8 yields a 9x9
/// disk). Extents 0 and 1 have radius 0 and act as the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    radius: usize,
}

impl StructuringElement {
    /// Create an elliptical element for the given pixel extent
    pub fn ellipse(size: usize) -> Self {
        Self { radius: size / 2 }
    }

    /// Kernel radius in pixels
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Whether applying this element leaves the input unchanged
    pub fn is_identity(&self) -> bool {
        self.radius == 0
    }

    /// Compute (dr, dc) offsets relative to center for all active cells.
    ///
    /// A cell is active when its center lies within `radius` of the
    /// kernel center, which makes the footprint symmetric under point
    /// reflection.
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let r = self.radius as isize;
        let r2 = r * r;
        let mut offsets = Vec::new();
        for dr in -r..=r {
            for dc in -r..=r {
                if dr * dr + dc * dc <= r2 {
                    offsets.push((dr, dc));
                }
            }
        }
        offsets
    }
}

impl Default for StructuringElement {
    fn default() -> Self {
        StructuringElement::ellipse(3)
    }
}
