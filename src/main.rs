use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use reckon::{
    error::Error,
    interpreter::{
        evaluator::context::EvaluationContext, lexer::tokenize, parser::core::parse,
        value::core::Number,
    },
};

/// reckon evaluates arithmetic expressions and reports errors with their exact
/// position.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read the expression from a file instead of the
    /// argument.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the token sequence before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the fully parenthesized expression tree before evaluating.
    #[arg(long)]
    tree: bool,

    /// The expression, or a path with `--file`. Without it every line of
    /// standard input is evaluated on its own.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let ok = match &args.contents {
        Some(contents) if args.file => {
            let Ok(source) = fs::read_to_string(contents) else {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            report(evaluate(&args, contents, &source))
        },
        Some(contents) => report(evaluate(&args, "<program>", contents)),
        None => {
            let mut ok = true;
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    eprintln!("Failed to read from standard input.");
                    return ExitCode::FAILURE;
                };
                if line.trim().is_empty() {
                    continue;
                }
                ok &= report(evaluate(&args, "<stdin>", &line));
            }
            ok
        },
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Runs one request through the pipeline, printing the intermediate stages
/// that were asked for.
fn evaluate(args: &Args, source_name: &str, source: &str) -> Result<Number, Error> {
    let tokens = tokenize(source);
    if args.tokens {
        for token in &tokens {
            println!("{token}");
        }
    }

    let expr = parse(&tokens)?;
    if args.tree {
        println!("{expr}");
    }

    Ok(EvaluationContext::root(source_name).eval(&expr)?)
}

fn report(result: Result<Number, Error>) -> bool {
    match result {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Args;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn file_flag_needs_a_path() {
        assert!(Args::try_parse_from(["reckon", "--file"]).is_err());

        let args = Args::try_parse_from(["reckon", "--file", "input.txt"]).unwrap();
        assert!(args.file);
        assert_eq!(args.contents.as_deref(), Some("input.txt"));

        let args = Args::try_parse_from(["reckon"]).unwrap();
        assert!(!args.file);
        assert_eq!(args.contents, None);
    }
}
