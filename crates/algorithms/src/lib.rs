//! # Cranioseg Algorithms
//!
//! Segmentation algorithms for cranial CT slices.
//!
//! ## Available categories
//!
//! - **morphology**: threshold, dilate, erode, opening, closing, mask combination
//! - **contour**: external boundary tracing and per-component convex hulls
//! - **threshold**: criterion-driven optimal threshold search
//! - **pipeline**: brain-mask and baseline hemorrhage-candidate pipelines
//! - **batch**: data-parallel per-image driver with isolated failures

pub mod batch;
pub mod contour;
pub(crate) mod maybe_rayon;
pub mod morphology;
pub mod pipeline;
pub mod threshold;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::batch::process_batch;
    pub use crate::contour::{convex_hull_mask, find_contours, Contour};
    pub use crate::morphology::{
        closing, dilate, erode, mask_intersect, mask_invert, mask_union, opening, threshold,
        zero_where, StructuringElement, ThresholdMode,
    };
    pub use crate::pipeline::{
        baseline_mask, brain_mask, brain_mask_with_diagnostics, BaselineMaskParams,
        BrainMaskDiagnostics, BrainMaskParams,
    };
    pub use crate::threshold::{
        find_best_threshold, BetweenGroupVariance, ThresholdCriterion, WithinGroupVariance,
    };
    pub use cranioseg_core::prelude::*;
}
