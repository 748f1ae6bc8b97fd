//! Batch driver
//!
//! Processing across a batch of slices is embarrassingly parallel:
//! every stage inside one image is strictly sequential, so parallelism
//! is applied at image granularity. Each item produces its own result
//! or error, so one failing slice never aborts the remainder.

use crate::maybe_rayon::*;
use cranioseg_core::Result;

/// Apply `op` to every item, fan-out/fan-in, one `Result` per item.
pub fn process_batch<I, O, F>(items: &[I], op: F) -> Vec<Result<O>>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> Result<O> + Sync + Send,
{
    items.par_iter().map(|item| op(item)).collect()
}
