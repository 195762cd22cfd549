//! rotation transfer - move a whole set of positions through one rotation at once

use crate::columns::Columns;
use crate::lane::Lane;
use placer_core::Offset;

/// Rotate every position in `sources` using `kicks` in order.
///
/// Each source takes the first kick whose destination is in `dest_free`; sources
/// that already landed never try a later kick. Returns the landed destinations.
#[inline]
pub fn transfer<T: Lane>(sources: Columns<T>, kicks: &[Offset], dest_free: &Columns<T>) -> Columns<T> {
    let mut unresolved = sources;
    let mut landed = Columns::zero();
    for &kick in kicks {
        let hit = unresolved.shift(kick) & *dest_free;
        landed |= hit;
        unresolved = unresolved.and_not(hit.shift(-kick));
        if unresolved.is_empty() {
            break;
        }
    }
    landed
}
