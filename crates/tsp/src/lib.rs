//! Exact minimum-cost tour enumeration on small weighted digraphs.
//!
//! The crate has two parts:
//! - `graph`: the square weight matrix (absent edges are `None`), its text
//!   format, a renderer, and a seeded random generator.
//! - `solver`: a Held-Karp bitmask DP that returns the optimal cost together
//!   with every tour attaining it.
//!
//! API Policy
//! - Internal crate for the `cli` front end and experiments. No stability
//!   promises; prefer a better design over compatibility.

pub mod graph;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use graph::{Graph, GraphError, ParseCfg, Weight, MAX_NODES};
pub use solver::{solve, solve_with, Solution, SolveCfg, TieRule};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::graph::rand::{draw_graph, RandomGraphCfg, ReplayToken};
    pub use crate::graph::{parse_graph, read_graph, render_matrix};
    pub use crate::graph::{Graph, GraphError, ParseCfg, Weight, MAX_NODES};
    pub use crate::solver::{solve, solve_with, Solution, SolveCfg, TieRule};
}
