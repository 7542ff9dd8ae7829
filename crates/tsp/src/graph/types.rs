//! Graph data type and size limits.

use nalgebra::DMatrix;

use super::error::GraphError;

/// Upper bound on node count; the visited set is a `u64` bitmask and the DP
/// state space is `n · 2^n`, so anything near this limit is already far past
/// practical.
pub const MAX_NODES: usize = 32;

/// Edge weight: `Some(w)` with `w` finite and `>= 0`, or `None` for "no edge".
pub type Weight = Option<f64>;

/// Immutable square weight matrix; `weight(i, j)` is the cost of edge `i → j`.
///
/// Invariants:
/// - `1 <= size() <= MAX_NODES`.
/// - Every present weight is finite and non-negative.
/// - The diagonal may hold anything; the solver never takes self-loops.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    w: DMatrix<Weight>,
}

impl Graph {
    /// Build from row-major weights, validating shape and values.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self, GraphError> {
        let n = rows.len();
        if n == 0 {
            return Err(GraphError::Empty);
        }
        let width = rows[0].len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GraphError::RaggedRow {
                line: i + 1,
                expected: width,
                found: row.len(),
            });
        }
        if width != n {
            return Err(GraphError::NotSquare {
                rows: n,
                cols: width,
            });
        }
        if n > MAX_NODES {
            return Err(GraphError::TooLarge { n, max: MAX_NODES });
        }
        for (i, row) in rows.iter().enumerate() {
            for (j, w) in row.iter().enumerate() {
                if let Some(value) = *w {
                    if !value.is_finite() || value < 0.0 {
                        return Err(GraphError::InvalidWeight {
                            row: i,
                            col: j,
                            value,
                        });
                    }
                }
            }
        }
        Ok(Self {
            w: DMatrix::from_fn(n, n, |i, j| rows[i][j]),
        })
    }

    /// Build an `n × n` graph from a weight function (same validation as `from_rows`).
    pub fn from_fn<F>(n: usize, mut f: F) -> Result<Self, GraphError>
    where
        F: FnMut(usize, usize) -> Weight,
    {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| f(i, j)).collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.w.nrows()
    }

    /// Weight of `i → j`, `None` if absent.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> Weight {
        self.w[(i, j)]
    }

    /// Weight of `i → j` with absent edges as `f64::INFINITY`.
    #[inline]
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.weight(i, j).unwrap_or(f64::INFINITY)
    }

    #[inline]
    pub fn is_edge(&self, i: usize, j: usize) -> bool {
        self.weight(i, j).is_some()
    }

    /// Row `i` as an iterator over weights.
    pub fn row(&self, i: usize) -> impl Iterator<Item = Weight> + '_ {
        (0..self.size()).map(move |j| self.w[(i, j)])
    }

    /// Validate a node index against this graph.
    pub fn check_node(&self, node: usize) -> Result<usize, GraphError> {
        let n = self.size();
        if node < n {
            Ok(node)
        } else {
            Err(GraphError::NodeOutOfRange { node, n })
        }
    }

    /// Sum of consecutive edge weights along `walk`; `+∞` if any edge is missing.
    /// Walks with fewer than two nodes cost 0.
    pub fn walk_cost(&self, walk: &[usize]) -> f64 {
        walk.windows(2).map(|e| self.cost(e[0], e[1])).sum()
    }
}
