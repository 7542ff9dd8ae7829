//! Interactive prompts for the matrix file and the start city.
//!
//! Both loops re-ask on invalid input and fail only when the input stream
//! closes. Reader/writer are generic so tests can drive them with buffers.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

pub fn is_txt(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".txt")
}

/// Ask for a `.txt` file name, resolved against `dir`, until an existing one is given.
pub fn ask_path<R: BufRead, W: Write>(input: &mut R, out: &mut W, dir: &Path) -> Result<PathBuf> {
    loop {
        write!(out, "Enter path to .txt file: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            bail!("input closed before a matrix file was chosen");
        };
        let candidate = dir.join(line.trim());
        if !is_txt(&candidate) {
            writeln!(out, "Error: Must be a .txt file.")?;
            continue;
        }
        if !candidate.exists() {
            writeln!(out, "Error: File not found at '{}'", candidate.display())?;
            continue;
        }
        return Ok(candidate);
    }
}

/// Parse a 1-based city index; returns the 0-based node if it is in `1..=n`.
/// Only plain digits are accepted (no sign, no whitespace).
pub fn parse_start(text: &str, n: usize) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let k: usize = text.parse().ok()?;
    (1..=n).contains(&k).then(|| k - 1)
}

/// Ask for a 1-based start city until a valid one is given; returns it 0-based.
pub fn ask_start<R: BufRead, W: Write>(input: &mut R, out: &mut W, n: usize) -> Result<usize> {
    loop {
        write!(out, "Select starting city index (1 to {}): ", n)?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            bail!("input closed before a start city was chosen");
        };
        match parse_start(line.trim(), n) {
            Some(node) => return Ok(node),
            None => writeln!(out, "Invalid input. Enter a number between 1 and {}.", n)?,
        }
    }
}
