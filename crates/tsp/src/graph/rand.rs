//! Seeded random graphs (replay tokens) for benches and property tests.
//!
//! Model
//! - Each off-diagonal edge is present with probability `edge_prob`; present
//!   weights are drawn uniformly from `1..=max_weight` (integers, so sums are
//!   exact in `f64` and ties are real ties) or from `[0, max_weight)` when
//!   `integral` is false.
//! - The diagonal is always absent.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Graph, MAX_NODES};

/// Random graph configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphCfg {
    /// Node count; clamped to `1..=MAX_NODES`.
    pub nodes: usize,
    /// Probability that an off-diagonal edge exists. Clamped to [0, 1].
    pub edge_prob: f64,
    pub max_weight: u32,
    /// Integer weights when true (exact sums, frequent ties).
    pub integral: bool,
}

impl Default for RandomGraphCfg {
    fn default() -> Self {
        Self {
            nodes: 8,
            edge_prob: 1.0,
            max_weight: 100,
            integral: true,
        }
    }
}

/// Deterministic replay token for sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random digraph. Always valid by construction.
pub fn draw_graph(cfg: RandomGraphCfg, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let n = cfg.nodes.clamp(1, MAX_NODES);
    let p = cfg.edge_prob.clamp(0.0, 1.0);
    let max_w = cfg.max_weight.max(1);
    let rows: Vec<Vec<Option<f64>>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j || !rng.gen_bool(p) {
                        return None;
                    }
                    let w = if cfg.integral {
                        f64::from(rng.gen_range(1..=max_w))
                    } else {
                        rng.gen::<f64>() * f64::from(max_w)
                    };
                    Some(w)
                })
                .collect()
        })
        .collect();
    // Shape and values are valid by construction.
    match Graph::from_rows(rows) {
        Ok(g) => g,
        Err(err) => unreachable!("random graph failed validation: {}", err),
    }
}
