use std::{env, fs::read_to_string, path::PathBuf, process::exit};

use snip::{display_error, lexer::lexer::tokenize};

fn main() {
    let args: Vec<String> = env::args().collect();

    let file_path = match parse_args(&args[1..]) {
        Some(path) => path,
        None => {
            eprintln!("Usage: snip -i <filename>");
            exit(1);
        }
    };

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path.display(), error);
            exit(1);
        }
    };

    match tokenize(&source) {
        Ok(tokens) => {
            for token in &tokens {
                token.debug();
            }
        }
        Err(error) => {
            display_error(&error, &file_path, &source);
            exit(1);
        }
    }
}

/// Parses `-i <path>` / `-input <path>`. The last occurrence wins; a flag
/// without a value or an unknown flag is a usage error.
fn parse_args(args: &[String]) -> Option<PathBuf> {
    let mut path = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-i" | "-input" => path = Some(PathBuf::from(iter.next()?)),
            _ => return None,
        }
    }

    path
}
