//! batch search - one independent search per shape, fanned out on rayon

use crate::columns::WIDTH;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::lane::Lane;
use crate::search::{search_with, Placements};
use placer_core::Shape;
use rayon::prelude::*;

/// Search every shape in `shapes` against the same board. Results keep input order.
pub fn search_shapes<T: Lane>(
    board: [T; WIDTH],
    shapes: &[Shape],
    config: &SearchConfig,
) -> Vec<Result<Placements<T>, SearchError>> {
    shapes
        .par_iter()
        .map(|&shape| search_with(board, shape, config))
        .collect()
}

/// Lock positions summed over all seven shapes.
pub fn count_all_shapes<T: Lane>(board: [T; WIDTH], config: &SearchConfig) -> Result<u32, SearchError> {
    Shape::ALL
        .par_iter()
        .map(|&shape| search_with(board, shape, config).map(|p| p.count()))
        .sum()
}
