//! Mathematical morphology primitives for CT slice segmentation
//!
//! Classical binary morphological operations over an elliptical
//! structuring element:
//! - **Threshold**: binary / inverse-binary mask extraction
//! - **Erosion**: minimum filter (shrinks foreground regions)
//! - **Dilation**: maximum filter (expands foreground regions)
//! - **Opening**: erosion then dilation (removes small foreground specks)
//! - **Closing**: dilation then erosion (fills small background gaps)
//! - **Mask combination**: union, intersection, inversion, exclusion

mod closing;
mod combine;
mod dilate;
mod element;
mod erode;
mod opening;
mod threshold;

pub use closing::{closing, Closing, ClosingParams};
pub use combine::{mask_intersect, mask_invert, mask_union, zero_where};
pub use dilate::{dilate, Dilate, DilateParams};
pub use element::StructuringElement;
pub use erode::{erode, Erode, ErodeParams};
pub use opening::{opening, Opening, OpeningParams};
pub use threshold::{threshold, Threshold, ThresholdMode, ThresholdParams};
