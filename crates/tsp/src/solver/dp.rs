//! Held-Karp recursion over (node, visited-set) with tie enumeration.

use std::collections::HashMap;
use std::rc::Rc;

use crate::graph::Graph;

use super::types::{Entry, SearchState, Solution, SolveCfg, Step, Verdict};

/// Minimum-cost tour(s) from `start` with exact tie comparison.
///
/// # Panics
/// If `start >= graph.size()`. Validate with `Graph::check_node` first
/// (the `cli` front end does).
pub fn solve(graph: &Graph, start: usize) -> Solution {
    solve_with(graph, start, SolveCfg::default())
}

/// Minimum-cost tour(s) from `start` under `cfg`.
///
/// # Panics
/// If `start >= graph.size()`.
pub fn solve_with(graph: &Graph, start: usize, cfg: SolveCfg) -> Solution {
    let n = graph.size();
    assert!(
        start < n,
        "start node {} out of range for a graph of {} nodes",
        start,
        n
    );
    if n == 1 {
        // Nothing to travel; the diagonal is not consulted.
        return Solution {
            start,
            cost: 0.0,
            tours: vec![vec![start]],
            states: 0,
        };
    }
    let mut runner = DpRunner::new(graph, start, cfg);
    let root = runner.expand(start, 1u64 << start);
    let tours: Vec<Vec<usize>> = root.completions.iter().map(|c| c.to_vec()).collect();
    tracing::debug!(
        n,
        start,
        cost = root.cost,
        tours = tours.len(),
        states = runner.memo.len(),
        "solve"
    );
    Solution {
        start,
        cost: root.cost,
        tours,
        states: runner.memo.len(),
    }
}

/// Per-call context: fixed origin plus the memo table it owns.
struct DpRunner<'a> {
    g: &'a Graph,
    origin: usize,
    full: u64,
    cfg: SolveCfg,
    memo: HashMap<SearchState, Rc<Entry>>,
}

impl<'a> DpRunner<'a> {
    fn new(g: &'a Graph, origin: usize, cfg: SolveCfg) -> Self {
        let n = g.size();
        Self {
            g,
            origin,
            full: (1u64 << n) - 1,
            cfg,
            memo: HashMap::new(),
        }
    }

    fn expand(&mut self, node: usize, visited: u64) -> Rc<Entry> {
        if visited == self.full {
            let entry = match self.g.weight(node, self.origin) {
                Some(w) => Entry {
                    cost: w,
                    completions: vec![Step::closing(node, self.origin)],
                },
                None => Entry::infeasible(),
            };
            return Rc::new(entry);
        }
        let key = SearchState { node, visited };
        if let Some(hit) = self.memo.get(&key) {
            return Rc::clone(hit);
        }

        let mut best = f64::INFINITY;
        let mut completions: Vec<Rc<Step>> = Vec::new();
        for next in 0..self.g.size() {
            let bit = 1u64 << next;
            if visited & bit != 0 {
                continue;
            }
            let Some(w) = self.g.weight(node, next) else {
                continue;
            };
            let sub = self.expand(next, visited | bit);
            if !sub.cost.is_finite() {
                continue;
            }
            let total = w + sub.cost;
            let prefixed = sub.completions.iter().map(|p| Step::cons(node, p));
            match self.cfg.tie.judge(total, best) {
                Verdict::Better => {
                    best = total;
                    completions = prefixed.collect();
                }
                Verdict::Tie => completions.extend(prefixed),
                Verdict::Worse => {}
            }
        }

        let entry = Rc::new(Entry {
            cost: best,
            completions,
        });
        self.memo.insert(key, Rc::clone(&entry));
        entry
    }
}
