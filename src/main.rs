use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use indexed_minheap::merge::merge;

/// Merge sorted token files into one sorted stream on standard output.
///
/// Each input file is read as a single whitespace-delimited sequence of
/// tokens assumed to be sorted. The merged tokens are written one per line,
/// followed by a blank line. Inputs are not checked for sortedness.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Paths of the sorted input files
    sources: Vec<PathBuf>,
}

pub fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Any unreadable source aborts the run before a single token is emitted
    let mut texts = Vec::with_capacity(args.sources.len());
    for path in &args.sources {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read input {}", path.display()))?;
        texts.push(text);
    }
    log::info!("merging {} sorted source(s)", texts.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut emitted = 0usize;
    for token in merge(texts.iter().map(|text| text.split_whitespace())) {
        writeln!(out, "{}", token)?;
        emitted += 1;
    }
    writeln!(out)?;
    out.flush()?;
    log::debug!("emitted {} token(s)", emitted);

    Ok(())
}
