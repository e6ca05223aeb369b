//! Swept cell search along one axis
//!
//! Walks the cells between a body's leading edge and where that edge wants to
//! be, once per row (X sweep) or column (Y sweep) the body covers, and keeps
//! the earliest time of impact across all of them.

use crate::spatial::query::BlockSource;
use crate::systems::body::PhysicsBody;

use super::types::Hit;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

/// Inclusive cell range covered by `[lo, hi]`, shrunk by `eps` at both ends so
/// an edge resting exactly on a boundary does not claim the neighbour cell.
#[inline]
pub(crate) fn cell_span(lo: f64, hi: f64, size: f64, eps: f64) -> (i32, i32) {
    let first = ((lo + eps) / size).floor() as i32;
    let last = ((hi - eps) / size).floor() as i32;
    (first, last.max(first))
}

/// First cell the leading edge can reach and the last cell it would enter.
///
/// Moving forward the edge starts in the cell whose near face is at or behind
/// it; moving backward, the mirror of that. The last cell excludes one the
/// edge would only touch at the end of the move.
#[inline]
fn lead_cells(lead: f64, delta: f64, size: f64, eps: f64) -> (i32, i32) {
    let target = lead + delta;
    if delta > 0.0 {
        ((lead / size).floor() as i32, ((target - eps) / size).floor() as i32)
    } else {
        ((lead / size).ceil() as i32 - 1, ((target + eps) / size).ceil() as i32 - 1)
    }
}

/// Sweep `body` by `delta` along `axis`. `delta` must be non-zero.
///
/// A cell counts as a contact while the body overlaps it by at most twice
/// `eps`: a snap leaves the far edge about `eps` past the next boundary when
/// the body spans whole cells. Cells overlapped deeper than that are passed
/// through rather than treated as walls, so an embedded body can always move
/// out.
pub(crate) fn sweep<G: BlockSource + ?Sized>(
    grid: &G,
    body: &PhysicsBody,
    axis: Axis,
    delta: f64,
    eps: f64,
    probes: &mut u64,
) -> Option<Hit> {
    let (main_size, cross_size, main_extent, cross_extent) = match axis {
        Axis::X => (grid.cell_width(), grid.cell_height(), grid.cols(), grid.rows()),
        Axis::Y => (grid.cell_height(), grid.cell_width(), grid.rows(), grid.cols()),
    };
    let (lo, hi, cross_lo, cross_hi) = match axis {
        Axis::X => (body.left(), body.right(), body.top(), body.bottom()),
        Axis::Y => (body.top(), body.bottom(), body.left(), body.right()),
    };

    let forward = delta > 0.0;
    let lead = if forward { hi } else { lo };
    let distance = delta.abs();
    let (first, last) = lead_cells(lead, delta, main_size, eps);

    // Cells outside the grid are air, so only the in-range part is walked.
    let (first, last, step) = if forward {
        (first.max(0), last.min(main_extent - 1), 1)
    } else {
        (first.min(main_extent - 1), last.max(0), -1)
    };
    if (forward && first > last) || (!forward && first < last) {
        return None;
    }

    let (cross_first, cross_last) = cell_span(cross_lo, cross_hi, cross_size, eps);
    let (cross_first, cross_last) = (cross_first.max(0), cross_last.min(cross_extent - 1));
    let contact = eps * 2.0;
    let mut best: Option<Hit> = None;

    for cross in cross_first..=cross_last {
        let mut main = first;
        loop {
            let (col, row) = match axis {
                Axis::X => (main, cross),
                Axis::Y => (cross, main),
            };
            *probes += 1;

            if grid.is_solid(col, row) {
                let face = if forward {
                    main as f64 * main_size
                } else {
                    (main + 1) as f64 * main_size
                };
                let gap = if forward { face - lead } else { lead - face };
                if gap >= -contact {
                    let toi = (gap / distance).max(0.0);
                    if best.map_or(true, |b| toi < b.toi) {
                        best = Some(Hit { toi, col, row, face });
                    }
                    break;
                }
            }

            if main == last {
                break;
            }
            main += step;
        }
    }

    best
}

/// Position of the body's near edge after snapping against `face`, backed off
/// by `eps` toward the side it came from.
#[inline]
pub(crate) fn snap_to_face(face: f64, size: f64, forward: bool, eps: f64) -> f64 {
    if forward {
        face - size - eps
    } else {
        face + eps
    }
}
