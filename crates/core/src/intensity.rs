//! Intensity trait for generic pixel values
//!
//! The segmentation pipelines run over two equivalent value domains:
//! normalized floats in [0, 1] and unsigned 8-bit samples in [0, 255].
//! `Intensity` abstracts the domain so pipeline logic exists once and
//! thresholds scale proportionally between encodings.

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in an image or mask cell.
pub trait Intensity:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Mask foreground value for this domain (1.0 for floats, 255 for u8)
    fn foreground() -> Self;

    /// Map a fraction of the domain range in [0, 1] to a concrete value.
    ///
    /// Used to express thresholds once and scale them per encoding:
    /// `from_fraction(0.6)` is 0.6 for floats and 153 for u8.
    fn from_fraction(fraction: f64) -> Self;

    /// Convert self to f64
    fn to_f64(self) -> f64;
}

macro_rules! impl_intensity_float {
    ($t:ty) => {
        impl Intensity for $t {
            fn foreground() -> Self {
                1.0
            }

            fn from_fraction(fraction: f64) -> Self {
                fraction as $t
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_intensity_float!(f32);
impl_intensity_float!(f64);

impl Intensity for u8 {
    fn foreground() -> Self {
        u8::MAX
    }

    fn from_fraction(fraction: f64) -> Self {
        (fraction * 255.0).round().clamp(0.0, 255.0) as u8
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_values() {
        assert_eq!(<f64 as Intensity>::foreground(), 1.0);
        assert_eq!(<f32 as Intensity>::foreground(), 1.0);
        assert_eq!(<u8 as Intensity>::foreground(), 255);
    }

    #[test]
    fn test_from_fraction_scales_per_domain() {
        assert_eq!(<f64 as Intensity>::from_fraction(0.6), 0.6);
        assert_eq!(<u8 as Intensity>::from_fraction(0.6), 153);
        assert_eq!(<u8 as Intensity>::from_fraction(0.0), 0);
        assert_eq!(<u8 as Intensity>::from_fraction(1.0), 255);
    }

    #[test]
    fn test_from_fraction_clamps() {
        assert_eq!(<u8 as Intensity>::from_fraction(1.5), 255);
        assert_eq!(<u8 as Intensity>::from_fraction(-0.2), 0);
    }
}
