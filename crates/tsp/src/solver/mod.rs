//! Tour Solver: exact minimum-cost Hamiltonian circuits with all ties.
//!
//! Purpose
//! - Given a `Graph` and a start node, return the minimum cost of a closed tour
//!   that visits every node exactly once, plus every node order attaining it.
//!
//! Why this design
//! - Held-Karp over `(node, visited)` with a memo table owned by a per-call
//!   runner; the origin is a runner field, never a global.
//! - Ties are enumerated, not selected. Memo entries are shared behind `Rc`
//!   and completions are persistent suffix lists, so a parent prefixes a node
//!   in O(1) and never mutates what a child stored.
//! - Plain recursion; depth is at most `n`.
//!
//! Failure is not an error: an unreachable circuit yields `cost = +∞` and no
//! tours. The only precondition is `start < n`.

mod dp;
mod types;

pub use dp::{solve, solve_with};
pub use types::{Solution, SolveCfg, TieRule};
