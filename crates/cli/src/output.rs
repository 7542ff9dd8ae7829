//! Terminal formatting for solutions (1-based city numbers).

use std::io::{self, Write};
use tsp::Solution;

/// `a -> b -> c` with 0-based nodes shown 1-based.
pub fn format_route(route: &[usize]) -> String {
    route
        .iter()
        .map(|v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn write_solution<W: Write>(out: &mut W, sol: &Solution) -> io::Result<()> {
    if !sol.is_feasible() || sol.tours.is_empty() {
        return writeln!(out, "No complete tour is possible from this graph.");
    }
    writeln!(out, "\nOptimal TSP Tour Found!")?;
    writeln!(out, "Minimum Tour Cost: {:.2}", sol.cost)?;
    writeln!(out, "Total Optimal Routes: {}", sol.tours.len())?;
    for (i, route) in sol.tours.iter().enumerate() {
        writeln!(out, "  Route #{}: {}", i + 1, format_route(route))?;
    }
    Ok(())
}
