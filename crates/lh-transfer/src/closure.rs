//! All-pairs minimum transfers over the line graph.
//!
//! Successive relaxation through every line as an intermediate hop:
//! `d[x][y] = min(d[x][y], d[x][k] + d[k][y])` for k, then x, then y.
//! Row `k` cannot change while `k` is the intermediate (`d[k][k] == 0`),
//! so it is copied once and the rows can be relaxed independently.

use lh_core::Distance;
use rayon::prelude::*;
use tracing::debug;

use crate::adjacency::LineDistances;

/// How the rows are relaxed for each intermediate line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosureStrategy {
    #[default]
    Sequential,
    /// Relax rows on the rayon pool. Produces the same matrix as `Sequential`.
    Parallel,
}

/// Close `distances` in place under min-plus composition.
pub fn close(distances: &mut LineDistances, strategy: ClosureStrategy) {
    let n = distances.line_count();
    let matrix = &mut distances.matrix;

    for k in 0..n {
        let pivot = matrix.row(k).to_vec();
        match strategy {
            ClosureStrategy::Sequential => {
                matrix.rows_mut().for_each(|row| relax_row(row, k, &pivot));
            }
            ClosureStrategy::Parallel => {
                matrix
                    .par_rows_mut()
                    .for_each(|row| relax_row(row, k, &pivot));
            }
        }
    }

    debug!(lines = n, ?strategy, "line closure complete");
}

fn relax_row(row: &mut [Distance], k: usize, pivot: &[Distance]) {
    let via = row[k];
    if !via.is_finite() {
        return;
    }
    for (cell, &onward) in row.iter_mut().zip(pivot) {
        let candidate = via.plus(onward);
        if candidate < *cell {
            *cell = candidate;
        }
    }
}

/// True when no entry can be shortened through any intermediate line.
pub fn is_closed(distances: &LineDistances) -> bool {
    let m = distances.matrix();
    let n = m.size();
    (0..n).all(|k| {
        (0..n).all(|x| (0..n).all(|y| m.get(x, y) <= m.get(x, k).plus(m.get(k, y))))
    })
}
