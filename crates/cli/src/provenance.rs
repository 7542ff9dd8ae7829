//! Provenance sidecars for solution artifacts written by `solve --out`.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use tsp::Solution;

/// What produced a solution file: solver params, input matrices, and a
/// summary of the result (cost, tour count, memo size).
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
    pub summary: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
            summary: Value::Null,
        }
    }

    /// Payload whose summary describes `sol`; an infeasible cost is `null`.
    pub fn for_solution(sol: &Solution, params: Value) -> Self {
        let cost = if sol.is_feasible() {
            json!(sol.cost)
        } else {
            Value::Null
        };
        Self {
            summary: json!({
                "feasible": sol.is_feasible(),
                "cost": cost,
                "tours": sol.tours.len(),
                "states": sol.states,
            }),
            ..Self::new(params)
        }
    }

    pub fn with_input<P: AsRef<Path>>(mut self, input: P) -> Self {
        self.inputs
            .push(input.as_ref().to_string_lossy().into_owned());
        self
    }
}

/// `runs/tour.json` → `runs/tour.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Write the sidecar next to `artifact` and return its path. The callsite of
/// the caller is recorded alongside the git revision and crate version.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let callsite = Location::caller();
    let sidecar = sidecar_path(artifact);
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": tsp::VERSION,
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "inputs": payload.inputs,
        "params": payload.params,
        "summary": payload.summary,
        "outputs": [artifact.to_string_lossy()]
    });
    match sidecar.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating sidecar dir {}", dir.display()))?,
        _ => {}
    }
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing sidecar {}", sidecar.display()))?;
    Ok(sidecar)
}

/// Git revision from the build env, the runtime env, or `git rev-parse`.
pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return from_env.to_string();
    }
    if let Some(env_override) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return env_override;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
