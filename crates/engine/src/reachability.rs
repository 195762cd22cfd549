//! reachability propagation - flood each orientation, hand new cells to its
//! rotation neighbours, repeat until nothing grows

use crate::columns::Columns;
use crate::config::AllowMove;
use crate::free_space::FreeSpaces;
use crate::kicks::RotationSystem;
use crate::lane::Lane;
use crate::rotate::transfer;
use log::trace;
use placer_core::{Orientation, Rotation};

/// Grow `reachable` by left/right/down moves inside `free` until it stops changing.
#[inline]
pub fn flood<T: Lane>(reachable: Columns<T>, free: &Columns<T>) -> Columns<T> {
    let mut current = reachable & *free;
    loop {
        let next = (current | current.shift_left(1) | current.shift_right(1) | current.shift_down(1, false))
            & *free;
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Grow `reachable` by left/right moves only.
#[inline]
pub fn flood_sideways<T: Lane>(reachable: Columns<T>, free: &Columns<T>) -> Columns<T> {
    let mut current = reachable & *free;
    loop {
        let next = (current | current.shift_left(1) | current.shift_right(1)) & *free;
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Everything `positions` passes through falling straight down inside `free`.
#[inline]
pub fn drop_down<T: Lane>(positions: Columns<T>, free: &Columns<T>) -> Columns<T> {
    let mut current = positions & *free;
    loop {
        let next = (current | current.shift_down(1, false)) & *free;
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Fixed-point worklist over orientations.
///
/// Orientations are visited in North, East, South, West order starting at the
/// spawn orientation, skipping those without pending growth. Each visit floods
/// the orientation, then rotates only the cells it has not rotated before.
pub struct Propagation<'a, T: Lane, R: RotationSystem> {
    spaces: &'a FreeSpaces<T>,
    rotation_system: &'a R,
    moves: AllowMove,
    reachable: [Columns<T>; 4],
    rotated: [Columns<T>; 4],
    pending: u8,
    cursor: usize,
}

impl<'a, T: Lane, R: RotationSystem> Propagation<'a, T, R> {
    pub fn new(
        spaces: &'a FreeSpaces<T>,
        rotation_system: &'a R,
        moves: AllowMove,
        spawn: Orientation,
        seed: Columns<T>,
    ) -> Self {
        let len = spaces.orientation_count();
        let cursor = if len == 1 { 0 } else { spawn.index() };
        let mut reachable = [Columns::zero(); 4];
        reachable[cursor] = seed;
        Self {
            spaces,
            rotation_system,
            moves,
            reachable,
            rotated: [Columns::zero(); 4],
            pending: ((1u16 << len) - 1) as u8,
            cursor,
        }
    }

    #[inline(always)]
    pub fn is_done(&self) -> bool {
        self.pending == 0
    }

    /// Current reachable sets; grows monotonically between steps.
    pub fn reachable(&self) -> &[Columns<T>] {
        &self.reachable[..self.spaces.orientation_count()]
    }

    /// Process the next pending orientation. Returns false once converged.
    pub fn step(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        while self.pending & (1 << self.cursor) == 0 {
            self.cursor = (self.cursor + 1) & 3;
        }
        let index = self.cursor;
        self.pending &= !(1 << index);
        self.cursor = (index + 1) & 3;

        let from = Orientation::from_index(index);
        let free = self.spaces.get(from);
        let flooded = match self.moves {
            AllowMove::Softdrop => flood(self.reachable[index], free),
            AllowMove::Harddrop => flood_sideways(self.reachable[index], free),
        };
        self.reachable[index] = flooded;

        if self.spaces.orientation_count() == 1 {
            return true;
        }

        let fresh = flooded.and_not(self.rotated[index]);
        if fresh.is_empty() {
            return true;
        }
        self.rotated[index] |= fresh;

        let shape = self.spaces.shape();
        for rotation in Rotation::ALL {
            let to = from.rotate(rotation);
            let kicks = self.rotation_system.kicks(shape, from, rotation);
            let landed = transfer(fresh, kicks, self.spaces.get(to));
            let grown = self.reachable[to.index()] | landed;
            if grown != self.reachable[to.index()] {
                self.reachable[to.index()] = grown;
                self.pending |= 1 << to.index();
            }
        }
        trace!(
            "{:?} {:?}: {} reachable, {} newly rotated, pending {:#06b}",
            shape,
            from,
            flooded.count_ones(),
            fresh.count_ones(),
            self.pending
        );
        true
    }

    /// Run to the fixed point and return the reachable sets, North first.
    pub fn run(mut self) -> [Columns<T>; 4] {
        while self.step() {}
        self.reachable
    }
}

/// Every reference position reachable from `seed` in any orientation.
///
/// Under `Harddrop` this is only the positions visited before the final drop;
/// project them down with `drop_down` to find where they land.
pub fn reachable<T: Lane, R: RotationSystem>(
    spaces: &FreeSpaces<T>,
    rotation_system: &R,
    moves: AllowMove,
    spawn: Orientation,
    seed: Columns<T>,
) -> [Columns<T>; 4] {
    Propagation::new(spaces, rotation_system, moves, spawn, seed).run()
}
