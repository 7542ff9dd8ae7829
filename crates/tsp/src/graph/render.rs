use std::fmt;

use super::types::{Graph, Weight};

fn cell(w: Weight) -> String {
    match w {
        Some(v) => format!("{:6.2}", v),
        None => "  INF".to_string(),
    }
}

/// Rows only, one line per row, cells joined by a single space.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = self.row(i).map(cell).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Matrix block for terminal inspection: a header line followed by the rows.
pub fn render_matrix(graph: &Graph) -> String {
    format!("Adjacency Matrix:\n{}\n", graph)
}
