use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;

use crate::{evaluate_source, format_number};

/// calculator evaluates arithmetic expressions such as `2 * (3 + sin pi)`.
///
/// Without an expression or a file, expressions are read from standard input
/// one per line until `exit` or end of input.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Print the token list before each result.
    #[arg(short, long)]
    pub tokens: bool,

    /// Print the syntax tree before each result.
    #[arg(short = 'T', long)]
    pub tree: bool,

    /// Evaluate every non-blank line of a file instead of reading standard
    /// input.
    #[arg(short, long, conflicts_with = "expression")]
    pub file: Option<PathBuf>,

    /// A single expression to evaluate.
    pub expression: Option<String>,
}

/// Parses the command line and runs the requested mode.
///
/// Exits with a failure status if an expression given on the command line or
/// in a file is rejected, or if reading input fails. Rejected lines in
/// interactive mode do not affect the exit status.
#[must_use]
pub fn run() -> ExitCode {
    let args = Args::parse();

    match execute(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the mode selected by `args`, writing results to standard output.
///
/// Returns `Ok(false)` if any evaluated expression was rejected.
pub fn execute(args: &Args) -> io::Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(expression) = &args.expression {
        return process_line(expression, args, &mut out);
    }

    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path).map_err(|e| read_failure(path, &e))?;
        let mut all_ok = true;
        for line in contents.lines().filter(|line| !line.trim().is_empty()) {
            all_ok &= process_line(line, args, &mut out)?;
        }
        return Ok(all_ok);
    }

    repl(io::stdin().lock(), args, &mut out)?;
    Ok(true)
}

/// Reads expressions line by line and prints a result for each.
///
/// Blank lines are skipped and `exit` stops the loop. A rejected line prints
/// its error and the loop moves on to the next one. Bytes that are not valid
/// UTF-8 are replaced with `U+FFFD`, which the lexer then rejects like any
/// other unsupported character.
///
/// # Example
/// ```
/// use calculator::cli::{Args, repl};
///
/// let mut out = Vec::new();
/// repl("1 + 1\n\n2 &\nexit\n3\n".as_bytes(), &Args::default(), &mut out).unwrap();
///
/// let out = String::from_utf8(out).unwrap();
/// assert_eq!(out, "=2\nInvalid character '&' at position 1.\n");
/// ```
pub fn repl<R: BufRead, W: Write>(mut input: R, args: &Args, out: &mut W) -> io::Result<()> {
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buffer);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "exit" {
            break;
        }
        process_line(&line, args, out)?;
    }
    Ok(())
}

/// Evaluates one line, printing `=<result>` or the error message.
///
/// With `--tokens` or `--tree`, the token list and the syntax tree of an
/// accepted line are printed first, each followed by a `---` separator.
///
/// Returns whether the line was accepted.
pub fn process_line<W: Write>(line: &str, args: &Args, out: &mut W) -> io::Result<bool> {
    let evaluation = match evaluate_source(line) {
        Ok(evaluation) => evaluation,
        Err(error) => {
            tracing::debug!(%error, "input rejected");
            writeln!(out, "{error}")?;
            return Ok(false);
        },
    };

    if args.tokens {
        for token in &evaluation.tokens {
            writeln!(out, "{token}")?;
        }
        writeln!(out, "---")?;
    }

    if args.tree {
        writeln!(out, "{}", evaluation.tree)?;
        writeln!(out, "---")?;
    }

    writeln!(out, "={}", format_number(evaluation.value))?;
    Ok(true)
}

fn read_failure(path: &Path, error: &io::Error) -> io::Error {
    let message = format!("Failed to read the input file '{}': {error}", path.display());
    io::Error::new(error.kind(), message)
}
