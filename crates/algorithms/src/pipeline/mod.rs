//! Segmentation pipelines
//!
//! Fixed compositions of the morphological primitives:
//! - **brain**: isolates brain parenchyma from bone and background void
//! - **baseline**: intensity-banded hemorrhage-candidate mask excluding
//!   bone and void

mod baseline;
mod brain;

pub use baseline::{baseline_mask, BaselineMask, BaselineMaskParams};
pub use brain::{
    brain_mask, brain_mask_with_diagnostics, BrainMask, BrainMaskDiagnostics, BrainMaskParams,
};
