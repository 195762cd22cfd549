//! lock extraction - reachable positions that cannot move further down

use crate::columns::Columns;
use crate::lane::Lane;

/// Positions in `reachable` whose cell below is not free in the same orientation.
#[inline(always)]
pub fn lock_positions<T: Lane>(reachable: &Columns<T>, free: &Columns<T>) -> Columns<T> {
    reachable.and_not(free.shift_up(1))
}
