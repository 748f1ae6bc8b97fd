//! Contour extraction
//!
//! External-boundary tracing of connected foreground components. The
//! mask is first closed with an 11x11 elliptical element to bridge small
//! gaps, then each 8-connected component's outer boundary is traced with
//! a Moore-neighbor walk. Inner holes are never reported.

mod hull;

pub use hull::convex_hull_mask;

use crate::morphology::{closing, StructuringElement};
use cranioseg_core::{Intensity, Mask, Result};
use ndarray::Array2;
use std::collections::VecDeque;

/// Gap-bridging closing applied before tracing
const CONTOUR_CLOSING_EXTENT: usize = 11;

/// Ordered outer boundary of one connected foreground component.
///
/// Points are (row, col) pixel coordinates in trace order; the first
/// point is the component's topmost-leftmost pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    pub points: Vec<(usize, usize)>,
}

impl Contour {
    /// Number of boundary points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the contour has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Moore neighborhood in clockwise order starting at West, as (dr, dc)
const DIRS: [(isize, isize); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

fn dir_index(dr: isize, dc: isize) -> usize {
    match (dr, dc) {
        (0, -1) => 0,
        (-1, -1) => 1,
        (-1, 0) => 2,
        (-1, 1) => 3,
        (0, 1) => 4,
        (1, 1) => 5,
        (1, 0) => 6,
        (1, -1) => 7,
        _ => 0,
    }
}

/// Find the external contours of a mask.
///
/// The mask is closed with an 11x11 elliptical element first, then every
/// 8-connected foreground component contributes exactly one contour: its
/// outer boundary. Holes inside a component produce no contour.
pub fn find_contours<T: Intensity>(mask: &Mask<T>) -> Result<Vec<Contour>> {
    mask.ensure_non_empty()?;
    let closed = closing(mask, &StructuringElement::ellipse(CONTOUR_CLOSING_EXTENT))?;

    let (labels, starts) = label_components(&closed);
    let contours = starts
        .iter()
        .enumerate()
        .map(|(i, &start)| Contour {
            points: trace_external_boundary(&labels, (i + 1) as u32, start),
        })
        .collect();
    Ok(contours)
}

/// Label 8-connected foreground components.
///
/// Returns the label grid (0 = background, components numbered from 1)
/// and each component's first pixel in scan order, which is its
/// topmost-leftmost pixel.
fn label_components<T: Intensity>(mask: &Mask<T>) -> (Array2<u32>, Vec<(usize, usize)>) {
    let (rows, cols) = mask.shape();
    let mut labels: Array2<u32> = Array2::zeros((rows, cols));
    let mut starts = Vec::new();
    let mut queue = VecDeque::new();

    for row in 0..rows {
        for col in 0..cols {
            if !mask.is_foreground(row, col) || labels[(row, col)] != 0 {
                continue;
            }

            let label = starts.len() as u32 + 1;
            starts.push((row, col));
            labels[(row, col)] = label;
            queue.push_back((row, col));

            while let Some((r, c)) = queue.pop_front() {
                for &(dr, dc) in &DIRS {
                    let nr = r as isize + dr;
                    let nc = c as isize + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        continue;
                    }
                    let (nr, nc) = (nr as usize, nc as usize);
                    if mask.is_foreground(nr, nc) && labels[(nr, nc)] == 0 {
                        labels[(nr, nc)] = label;
                        queue.push_back((nr, nc));
                    }
                }
            }
        }
    }

    (labels, starts)
}

/// Trace the outer boundary of one labeled component.
///
/// Moore-neighbor tracing with Jacob's stopping criterion: starting at
/// the topmost-leftmost pixel (whose west neighbor is guaranteed to be
/// background), sweep the 8-neighborhood clockwise from the backtrack
/// cell until a component pixel is found, then step there. Terminates
/// when the start pixel is re-entered from the original backtrack cell.
fn trace_external_boundary(
    labels: &Array2<u32>,
    label: u32,
    start: (usize, usize),
) -> Vec<(usize, usize)> {
    let (rows, cols) = labels.dim();
    let is_component = |r: isize, c: isize| -> bool {
        r >= 0
            && c >= 0
            && (r as usize) < rows
            && (c as usize) < cols
            && labels[(r as usize, c as usize)] == label
    };

    let start = (start.0 as isize, start.1 as isize);
    let init_back = (start.0, start.1 - 1);

    let mut points = vec![(start.0 as usize, start.1 as usize)];
    let mut cur = start;
    let mut back = init_back;
    let max_steps = 4 * rows * cols;

    for _ in 0..max_steps {
        let back_idx = dir_index(back.0 - cur.0, back.1 - cur.1);
        let mut prev = back;
        let mut advanced = false;

        for i in 1..=8 {
            let (dr, dc) = DIRS[(back_idx + i) % 8];
            let cell = (cur.0 + dr, cur.1 + dc);
            if is_component(cell.0, cell.1) {
                cur = cell;
                back = prev;
                advanced = true;
                break;
            }
            prev = cell;
        }

        if !advanced {
            break; // single-pixel component
        }
        if cur == start && back == init_back {
            break;
        }
        points.push((cur.0 as usize, cur.1 as usize));
    }

    points
}
