use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tsp::graph::{read_graph, render_matrix};
use tsp::{solve_with, ParseCfg, Solution, SolveCfg, TieRule};

mod output;
mod prompt;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Exact minimum-cost tours (all ties) on small weight matrices")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a matrix file and print every optimal tour
    Solve(SolveArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug, Default)]
struct SolveArgs {
    /// Matrix file (.txt); prompted for when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// 1-based start city; prompted for when omitted
    #[arg(long)]
    start: Option<usize>,
    /// Directory that prompted file names are resolved against
    #[arg(long, default_value = ".")]
    search_dir: PathBuf,
    /// Count costs within this distance as ties (default: exact equality)
    #[arg(long, value_parser = parse_tie_eps)]
    tie_eps: Option<f64>,
    /// Parse 9999 and -1 as ordinary numbers instead of "no edge"
    #[arg(long)]
    strict_sentinels: bool,
    /// Write the solution as JSON, plus a provenance sidecar
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Tie tolerance must be a finite, non-negative number.
fn parse_tie_eps(text: &str) -> Result<f64, String> {
    let eps: f64 = text.parse().map_err(|err| format!("{}", err))?;
    if eps.is_finite() && eps >= 0.0 {
        Ok(eps)
    } else {
        Err(format!("expected a finite, non-negative tolerance, got '{}'", text))
    }
}

impl SolveArgs {
    fn parse_cfg(&self) -> ParseCfg {
        ParseCfg {
            numeric_sentinels: !self.strict_sentinels,
        }
    }

    fn solve_cfg(&self) -> SolveCfg {
        match self.tie_eps {
            Some(eps) => SolveCfg {
                tie: TieRule::Within(eps),
            },
            None => SolveCfg::default(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve(args) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_solve(&args, &mut stdin.lock(), &mut stdout.lock()).map(|_| ())
        }
        Action::Report => report(),
    }
}

fn run_solve<R: BufRead, W: Write>(
    args: &SolveArgs,
    input: &mut R,
    out: &mut W,
) -> Result<Solution> {
    writeln!(out, "\n=== Traveling Salesman Problem Solver ===\n")?;
    let path = match &args.input {
        Some(p) => {
            if !prompt::is_txt(p) {
                bail!("input {} must be a .txt file", p.display());
            }
            if !p.exists() {
                bail!("input file not found at '{}'", p.display());
            }
            p.clone()
        }
        None => prompt::ask_path(input, out, &args.search_dir)?,
    };
    let graph = read_graph(&path, args.parse_cfg())
        .with_context(|| format!("Error reading graph {}", path.display()))?;
    let n = graph.size();
    tracing::info!(input = %path.display(), n, "graph");

    let start = match args.start {
        Some(0) => bail!("--start 0 is out of range (1 to {})", n),
        Some(k) => graph
            .check_node(k - 1)
            .with_context(|| format!("--start {} is out of range (1 to {})", k, n))?,
        None => prompt::ask_start(input, out, n)?,
    };

    writeln!(out, "\n{}", render_matrix(&graph))?;

    let cfg = args.solve_cfg();
    let sol = solve_with(&graph, start, cfg);
    tracing::info!(
        start = start + 1,
        cost = sol.cost,
        tours = sol.tours.len(),
        states = sol.states,
        "solved"
    );
    output::write_solution(out, &sol)?;

    if let Some(dest) = &args.out {
        write_solution_json(dest, &path, &sol, args)?;
    }
    Ok(sol)
}

fn write_solution_json(
    dest: &Path,
    input: &Path,
    sol: &Solution,
    args: &SolveArgs,
) -> Result<()> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let doc = serde_json::json!({
        "input": input.to_string_lossy(),
        "solution": sol,
    });
    fs::write(dest, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", dest.display()))?;
    let payload = provenance::Payload::for_solution(
        sol,
        serde_json::json!({
            "start": sol.start + 1,
            "tie_eps": args.tie_eps,
            "strict_sentinels": args.strict_sentinels,
        }),
    )
    .with_input(input);
    let sidecar = provenance::write_sidecar(dest, payload)?;
    tracing::info!(out = %dest.display(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": tsp::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
