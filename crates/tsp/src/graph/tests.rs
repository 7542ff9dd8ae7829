use super::*;

fn cfg() -> ParseCfg {
    ParseCfg::default()
}

#[test]
fn parse_basic_square_matrix() {
    let g = parse_graph("0 1 2\n3 0 4\n5 6 0\n", cfg()).unwrap();
    assert_eq!(g.size(), 3);
    assert_eq!(g.weight(0, 2), Some(2.0));
    assert_eq!(g.weight(2, 1), Some(6.0));
    assert!(g.is_edge(1, 0));
}

#[test]
fn parse_skips_blank_lines_and_extra_whitespace() {
    let g = parse_graph("\n  0\t1.5 \n\n   \n2   0\n\n", cfg()).unwrap();
    assert_eq!(g.size(), 2);
    assert_eq!(g.weight(0, 1), Some(1.5));
}

#[test]
fn parse_no_edge_markers() {
    let g = parse_graph("0 inf INF Infinity\n∞ 0 9999 -1\n1 2 0 3\n4 5 6 0\n", cfg()).unwrap();
    for j in 1..4 {
        assert_eq!(g.weight(0, j), None);
    }
    assert_eq!(g.weight(1, 0), None);
    assert_eq!(g.weight(1, 2), None);
    assert_eq!(g.weight(1, 3), None);
    assert_eq!(g.cost(1, 3), f64::INFINITY);
    assert!(!g.is_edge(1, 3));
}

#[test]
fn numeric_sentinels_are_literal_tokens() {
    // "9999.0" is not the sentinel spelling.
    let g = parse_graph("0 9999.0\n1 0\n", cfg()).unwrap();
    assert_eq!(g.weight(0, 1), Some(9999.0));
}

#[test]
fn strict_sentinels_keep_9999_and_reject_minus_one() {
    let strict = ParseCfg {
        numeric_sentinels: false,
    };
    let g = parse_graph("0 9999\n1 0\n", strict).unwrap();
    assert_eq!(g.weight(0, 1), Some(9999.0));
    let err = parse_graph("0 -1\n1 0\n", strict).unwrap_err();
    assert!(matches!(err, GraphError::NegativeWeight { line: 1, .. }));
}

#[test]
fn parse_rejects_bad_tokens() {
    let err = parse_graph("0 1\nx 0\n", cfg()).unwrap_err();
    match err {
        GraphError::InvalidToken { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "x");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        parse_graph("0 nan\n1 0\n", cfg()),
        Err(GraphError::InvalidToken { .. })
    ));
    assert!(matches!(
        parse_graph("0 +inf\n1 0\n", cfg()),
        Err(GraphError::InvalidToken { .. })
    ));
}

#[test]
fn parse_rejects_negative_weight() {
    let err = parse_graph("0 -2.5\n1 0\n", cfg()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Negative weight not allowed: '-2.5' on line 1"
    );
}

#[test]
fn parse_rejects_ragged_rows() {
    let err = parse_graph("0 1 2\n\n1 0\n2 1 0\n", cfg()).unwrap_err();
    assert!(matches!(
        err,
        GraphError::RaggedRow {
            line: 2,
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn parse_rejects_empty_and_non_square() {
    assert!(matches!(
        parse_graph("", cfg()),
        Err(GraphError::Empty)
    ));
    assert!(matches!(
        parse_graph("  \n\n", cfg()),
        Err(GraphError::Empty)
    ));
    assert!(matches!(
        parse_graph("0 1 2\n1 0 2\n", cfg()),
        Err(GraphError::NotSquare { rows: 2, cols: 3 })
    ));
}

#[test]
fn from_rows_validates_values_and_size() {
    let err = Graph::from_rows(vec![vec![Some(0.0), Some(-1.0)], vec![None, None]]).unwrap_err();
    assert!(matches!(
        err,
        GraphError::InvalidWeight { row: 0, col: 1, .. }
    ));
    let err = Graph::from_rows(vec![vec![Some(f64::NAN)]]).unwrap_err();
    assert!(matches!(err, GraphError::InvalidWeight { row: 0, col: 0, .. }));
    let err = Graph::from_fn(MAX_NODES + 1, |_, _| None).unwrap_err();
    assert!(matches!(err, GraphError::TooLarge { .. }));
    assert!(Graph::from_fn(MAX_NODES, |_, _| None).is_ok());
}

#[test]
fn read_graph_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("g.txt");
    std::fs::write(&path, "0 2\n3 0\n").unwrap();
    let g = read_graph(&path, cfg()).unwrap();
    assert_eq!(g.weight(1, 0), Some(3.0));
    let missing = read_graph(dir.path().join("nope.txt"), cfg()).unwrap_err();
    assert!(matches!(missing, GraphError::Io(_)));
}

#[test]
fn check_node_and_walk_cost() {
    let g = parse_graph("0 1 inf\n2 0 3\n4 5 0\n", cfg()).unwrap();
    assert_eq!(g.check_node(2).unwrap(), 2);
    assert!(matches!(
        g.check_node(3),
        Err(GraphError::NodeOutOfRange { node: 3, n: 3 })
    ));
    assert_eq!(g.walk_cost(&[0, 1, 2, 0]), 1.0 + 3.0 + 4.0);
    assert_eq!(g.walk_cost(&[0, 2, 1, 0]), f64::INFINITY);
    assert_eq!(g.walk_cost(&[1]), 0.0);
}

#[test]
fn render_matrix_formats_cells() {
    let g = parse_graph("0 1.5\ninf 12\n", cfg()).unwrap();
    assert_eq!(g.to_string(), "  0.00   1.50\n  INF  12.00");
    assert_eq!(
        render_matrix(&g),
        "Adjacency Matrix:\n  0.00   1.50\n  INF  12.00\n"
    );
}
