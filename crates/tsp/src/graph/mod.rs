//! Weighted digraph as a square adjacency matrix.
//!
//! Purpose
//! - Hold a validated `n × n` weight matrix where an edge may be absent.
//! - Read the legacy whitespace-separated text format and render it back for
//!   inspection.
//!
//! Why this design
//! - Absent edges are a first-class `None` (`Weight = Option<f64>`), so the
//!   model never confuses "very expensive" with "untraversable". The legacy
//!   numeric sentinels (`9999`, `-1`) only exist at the parsing boundary and can
//!   be switched off via `ParseCfg`.
//! - Validation happens once at construction; everything downstream (solver,
//!   renderer) may assume a square matrix with finite non-negative weights.
//!
//! Layout
//! - `types.rs` (Graph, Weight, limits), `error.rs` (GraphError),
//!   `parse.rs` (text → Graph), `render.rs` (Graph → text),
//!   `rand.rs` (seeded random graphs for benches and property tests).

mod error;
mod parse;
pub mod rand;
mod render;
mod types;

pub use error::GraphError;
pub use parse::{parse_graph, read_graph, ParseCfg};
pub use render::render_matrix;
pub use types::{Graph, Weight, MAX_NODES};

#[cfg(test)]
mod tests;
