//! Solver configuration, DP records, and the public `Solution`.
//!
//! Kept small and explicit so `dp.rs` reads like the recurrence.

use std::rc::Rc;

use serde::Serialize;

/// How accumulated tour costs are compared when deciding ties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TieRule {
    /// IEEE `==` on the accumulated `f64` sums. With non-exact decimal weights
    /// this can miss ties (or split them) because of rounding.
    Exact,
    /// Costs within `eps` of the running best count as ties; a candidate is
    /// strictly better only when it undercuts the best by more than `eps`.
    /// The reported cost is the first value found within the tie class.
    /// A non-finite `eps` falls back to exact comparison.
    Within(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    Better,
    Tie,
    Worse,
}

impl TieRule {
    #[inline]
    pub(crate) fn judge(self, candidate: f64, best: f64) -> Verdict {
        if best.is_infinite() {
            return if candidate.is_finite() {
                Verdict::Better
            } else {
                Verdict::Worse
            };
        }
        match self {
            TieRule::Within(eps) if eps.is_finite() => {
                let eps = eps.abs();
                if candidate < best - eps {
                    Verdict::Better
                } else if (candidate - best).abs() <= eps {
                    Verdict::Tie
                } else {
                    Verdict::Worse
                }
            }
            TieRule::Exact | TieRule::Within(_) => {
                if candidate < best {
                    Verdict::Better
                } else if candidate == best {
                    Verdict::Tie
                } else {
                    Verdict::Worse
                }
            }
        }
    }
}

/// Solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveCfg {
    pub tie: TieRule,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            tie: TieRule::Exact,
        }
    }
}

/// DP subproblem key: "complete a tour from `node` having visited `visited`".
/// The origin is fixed per run and therefore not part of the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct SearchState {
    pub node: usize,
    pub visited: u64,
}

/// Persistent suffix list: `node` followed by `rest`.
///
/// Parents prefix one node by allocating a single `Step` that points at the
/// child's shared suffix; child paths are never copied or mutated.
#[derive(Debug)]
pub(crate) struct Step {
    pub node: usize,
    pub rest: Option<Rc<Step>>,
}

impl Step {
    #[inline]
    pub fn cons(node: usize, rest: &Rc<Step>) -> Rc<Step> {
        Rc::new(Step {
            node,
            rest: Some(Rc::clone(rest)),
        })
    }

    #[inline]
    pub fn closing(node: usize, origin: usize) -> Rc<Step> {
        Rc::new(Step {
            node,
            rest: Some(Rc::new(Step {
                node: origin,
                rest: None,
            })),
        })
    }

    pub fn to_vec(&self) -> Vec<usize> {
        let mut out = Vec::new();
        let mut cur = Some(self);
        while let Some(step) = cur {
            out.push(step.node);
            cur = step.rest.as_deref();
        }
        out
    }
}

/// Memoized result for one `SearchState`.
///
/// Invariant: `cost` finite ⇔ `completions` non-empty; every completion runs
/// from the state's node to the origin and sums to `cost` (up to the tie rule).
#[derive(Debug)]
pub(crate) struct Entry {
    pub cost: f64,
    pub completions: Vec<Rc<Step>>,
}

impl Entry {
    pub fn infeasible() -> Self {
        Self {
            cost: f64::INFINITY,
            completions: Vec::new(),
        }
    }
}

/// Result of one solve.
///
/// - `cost` is `f64::INFINITY` when no Hamiltonian circuit exists from `start`;
///   then `tours` is empty.
/// - Each tour lists node indices (0-based) starting and ending at `start`
///   (`n + 1` entries; a single-node graph yields `[start]`).
/// - `tours` is in discovery order, which is lexicographic by node index.
/// - `states` is the number of memoized subproblems.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
    pub start: usize,
    pub cost: f64,
    pub tours: Vec<Vec<usize>>,
    pub states: usize,
}

impl Solution {
    /// True if at least one tour exists.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }
}
