//! Per-component convex hull rasterization
//!
//! Computes the convex hull polygon of every external contour and
//! rasterizes it filled into a fresh mask, yielding one convex envelope
//! per connected component rather than a single global hull.

use geo::{ConvexHull, MultiPoint, Point};

use super::{find_contours, Contour};
use cranioseg_core::{Intensity, Mask, Result};

const EPS: f64 = 1e-9;

/// Rasterize the convex hull of every foreground component.
///
/// Each external contour contributes its convex hull polygon, filled
/// (boundary and interior) into a mask of the input's dimensions; the
/// per-component fills are unioned. The result is always a superset of
/// the input mask.
pub fn convex_hull_mask<T: Intensity>(mask: &Mask<T>) -> Result<Mask<T>> {
    let contours = find_contours(mask)?;

    let mut out = mask.like(T::zero());
    for contour in &contours {
        fill_contour_hull(&mut out, contour);
    }
    Ok(out)
}

fn fill_contour_hull<T: Intensity>(out: &mut Mask<T>, contour: &Contour) {
    let fg = T::foreground();

    if contour.points.len() <= 2 {
        // Contour points index the label grid, always in-bounds
        for &(r, c) in &contour.points {
            out.data_mut()[(r, c)] = fg;
        }
        return;
    }

    // Hull vertices as (x = col, y = row)
    let multipoint: MultiPoint<f64> = contour
        .points
        .iter()
        .map(|&(r, c)| Point::new(c as f64, r as f64))
        .collect();
    let hull = multipoint.convex_hull();
    let ring: Vec<(f64, f64)> = hull.exterior().coords().map(|c| (c.x, c.y)).collect();

    fill_convex_polygon(out, &ring);
}

/// Scanline fill of a convex polygon, boundary inclusive.
///
/// Convexity guarantees each raster row intersects the polygon in a
/// single span, so per row it suffices to take the min/max x over all
/// edge intersections.
fn fill_convex_polygon<T: Intensity>(out: &mut Mask<T>, ring: &[(f64, f64)]) {
    if ring.is_empty() {
        return;
    }
    let (rows, cols) = out.shape();
    let fg = T::foreground();

    let min_y = ring.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = ring.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let y0 = (min_y - EPS).ceil().max(0.0) as usize;
    let y1 = ((max_y + EPS).floor() as isize).min(rows as isize - 1);
    if y1 < 0 {
        return;
    }

    for y in y0..=(y1 as usize) {
        let fy = y as f64;
        let mut span_min = f64::INFINITY;
        let mut span_max = f64::NEG_INFINITY;

        for edge in ring.windows(2) {
            let (ax, ay) = edge[0];
            let (bx, by) = edge[1];

            if (ay - by).abs() < EPS {
                if (ay - fy).abs() < EPS {
                    span_min = span_min.min(ax.min(bx));
                    span_max = span_max.max(ax.max(bx));
                }
                continue;
            }

            let (lo, hi) = if ay < by { (ay, by) } else { (by, ay) };
            if fy < lo - EPS || fy > hi + EPS {
                continue;
            }
            let t = ((fy - ay) / (by - ay)).clamp(0.0, 1.0);
            let x = ax + t * (bx - ax);
            span_min = span_min.min(x);
            span_max = span_max.max(x);
        }

        if span_max < span_min {
            continue;
        }
        let c0 = (span_min - EPS).ceil().max(0.0) as usize;
        let c1 = ((span_max + EPS).floor() as isize).min(cols as isize - 1);
        if c1 < 0 {
            continue;
        }
        // Span endpoints are clamped to the grid above
        for col in c0..=(c1 as usize) {
            out.data_mut()[(y, col)] = fg;
        }
    }
}
