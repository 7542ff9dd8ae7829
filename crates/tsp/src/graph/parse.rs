//! Text matrix format: one row per non-blank line, whitespace-separated tokens.

use std::fs;
use std::path::Path;

use super::error::GraphError;
use super::types::{Graph, Weight};

/// Tokens that always mean "no edge" (compared case-insensitively).
const NO_EDGE_WORDS: [&str; 3] = ["inf", "infinity", "∞"];
/// Legacy numeric "no edge" markers (compared on the literal token).
const NO_EDGE_NUMBERS: [&str; 2] = ["9999", "-1"];

/// Parser configuration.
#[derive(Clone, Copy, Debug)]
pub struct ParseCfg {
    /// Treat the literal tokens `9999` and `-1` as "no edge". On by default for
    /// compatibility with existing input files; off makes `9999` an ordinary
    /// weight and `-1` a negative-weight error.
    pub numeric_sentinels: bool,
}

impl Default for ParseCfg {
    fn default() -> Self {
        Self {
            numeric_sentinels: true,
        }
    }
}

/// Parse a matrix from text.
///
/// Blank lines are skipped and do not count toward line numbers in errors.
/// The first row fixes the expected width.
pub fn parse_graph(text: &str, cfg: ParseCfg) -> Result<Graph, GraphError> {
    let mut rows: Vec<Vec<Weight>> = Vec::new();
    let mut expected: Option<usize> = None;
    for (idx, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        let line_no = idx + 1;
        let row = line
            .split_whitespace()
            .map(|tok| parse_weight(tok, line_no, cfg))
            .collect::<Result<Vec<_>, _>>()?;
        let width = *expected.get_or_insert(row.len());
        if row.len() != width {
            return Err(GraphError::RaggedRow {
                line: line_no,
                expected: width,
                found: row.len(),
            });
        }
        rows.push(row);
    }
    Graph::from_rows(rows)
}

/// Read and parse a matrix file.
pub fn read_graph<P: AsRef<Path>>(path: P, cfg: ParseCfg) -> Result<Graph, GraphError> {
    let text = fs::read_to_string(path)?;
    parse_graph(&text, cfg)
}

fn parse_weight(tok: &str, line: usize, cfg: ParseCfg) -> Result<Weight, GraphError> {
    let lower = tok.to_lowercase();
    if NO_EDGE_WORDS.contains(&lower.as_str())
        || (cfg.numeric_sentinels && NO_EDGE_NUMBERS.contains(&tok))
    {
        return Ok(None);
    }
    let value: f64 = tok.parse().map_err(|_| GraphError::InvalidToken {
        line,
        token: tok.to_string(),
    })?;
    // `f64::from_str` also accepts spellings like "+inf" and "NaN".
    if !value.is_finite() {
        return Err(GraphError::InvalidToken {
            line,
            token: tok.to_string(),
        });
    }
    if value < 0.0 {
        return Err(GraphError::NegativeWeight {
            line,
            token: tok.to_string(),
        });
    }
    Ok(Some(value))
}
