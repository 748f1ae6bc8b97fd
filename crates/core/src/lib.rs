//! # Cranioseg Core
//!
//! Core types and traits for the cranioseg CT segmentation library.
//!
//! This crate provides:
//! - `Grid<T>`: generic 2D grid of intensity samples (images and masks)
//! - `Intensity`: value-domain trait (normalized float or unsigned 8-bit)
//! - Error taxonomy shared by all algorithms
//! - The `Algorithm` trait for a consistent operation API

pub mod error;
pub mod grid;
pub mod intensity;

pub use error::{Error, Result};
pub use grid::{Grid, Image, Mask};
pub use intensity::Intensity;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{Grid, Image, Mask};
    pub use crate::intensity::Intensity;
    pub use crate::Algorithm;
}

/// Core trait for all operations in cranioseg.
///
/// Operations are pure functions that transform input data according to
/// parameters; no shared mutable state survives an invocation.
pub trait Algorithm {
    /// Input type for the operation
    type Input;
    /// Output type for the operation
    type Output;
    /// Parameters controlling behavior
    type Params: Default;
    /// Error type for execution
    type Error: std::error::Error;

    /// Returns the operation name
    fn name(&self) -> &'static str;

    /// Returns a description of what the operation does
    fn description(&self) -> &'static str;

    /// Execute the operation
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(
        &self,
        input: Self::Input,
    ) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
