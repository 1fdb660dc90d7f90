use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use invcount::{
    count_inversions_bottom_up, count_inversions_fast, count_inversions_slow,
    read_nonempty_sequence,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Counts the inversions of a sequence of non-negative integers, given on
/// the first line of the standard input.
#[derive(Debug, Parser)]
#[command(name = "invcount", version)]
struct Args {
    /// Counting algorithm
    #[arg(value_enum, default_value_t = Algorithm::Fast)]
    algorithm: Algorithm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Merge sort, O(n log n)
    Fast,
    /// Insertion sort, O(n^2)
    Slow,
    /// Iterative merge sort, O(n log n)
    BottomUp,
}

impl Algorithm {
    fn count(self, a: &[i64]) -> u64 {
        match self {
            Algorithm::Fast => count_inversions_fast(a),
            Algorithm::Slow => count_inversions_slow(a),
            Algorithm::BottomUp => count_inversions_bottom_up(a),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let Args { algorithm } = Args::parse();

    match prompt_and_run(algorithm) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn prompt_and_run(algorithm: Algorithm) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if stdin.is_terminal() {
        print!("Enter sequence of integers, each followed by a space: ");
        stdout.lock().flush()?;
    }
    run(algorithm, stdin.lock(), &mut stdout.lock())
}

fn run<R: BufRead, W: Write>(
    algorithm: Algorithm,
    source: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let a = read_nonempty_sequence(source)?;

    debug!(?algorithm, len = a.len(), "counting inversions");
    let start = Instant::now();
    let count = algorithm.count(&a);
    debug!(elapsed = ?start.elapsed(), count, "done");

    writeln!(out, "Number of inversions: {count}")?;
    Ok(())
}

#[test]
fn sanity_check() {
    for algorithm in [Algorithm::Fast, Algorithm::Slow, Algorithm::BottomUp] {
        let mut out = vec![];
        run(algorithm, "2 4 1 3 5 \n".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Number of inversions: 3\n");
    }
}

#[test]
fn errors() {
    let mut out = vec![];
    let e = run(Algorithm::Fast, "\n".as_bytes(), &mut out).unwrap_err();
    assert_eq!(e.to_string(), "Sequence of integers not received.");

    let e = run(Algorithm::Slow, "1 a".as_bytes(), &mut out).unwrap_err();
    assert_eq!(
        e.to_string(),
        "Invalid character 'a' found at index 2 in input stream."
    );
    assert!(out.is_empty());
}

#[test]
fn arguments() {
    let parse = |args: &[&str]| Args::try_parse_from(args).map(|a| a.algorithm);

    assert_eq!(parse(&["invcount"]).unwrap(), Algorithm::Fast);
    assert_eq!(parse(&["invcount", "slow"]).unwrap(), Algorithm::Slow);
    assert_eq!(parse(&["invcount", "fast"]).unwrap(), Algorithm::Fast);
    assert_eq!(parse(&["invcount", "bottom-up"]).unwrap(), Algorithm::BottomUp);
    assert!(parse(&["invcount", "quick"]).is_err());
    assert!(parse(&["invcount", "slow", "fast"]).is_err());
}
