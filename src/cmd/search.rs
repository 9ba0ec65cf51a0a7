use super::{resolve_params, EXIT_CONFIG, EXIT_INVALID_WORD};
use crate::reports;
use clap::{ArgMatches, Args};
use std::io::{self, BufRead, Write};
use std::process;
use tracing::error;
use wordforge::{Evolution, EvolutionParams, Progress, Target, WfResult, WordForgeError};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub params: EvolutionParams,

    /// Hidden word to evolve toward. Prompted for when omitted.
    #[arg(short, long)]
    pub word: Option<String>,

    /// JSON file with evolution parameters.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the final result as JSON instead of the console report.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Prompts until the user enters a valid word.
pub fn prompt_target<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> WfResult<Target> {
    let mut line = String::new();
    loop {
        write!(output, "[+] Enter the hidden word to search for: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(WordForgeError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no word entered",
            )));
        }

        match Target::parse(line.trim()) {
            Ok(target) => return Ok(target),
            Err(WordForgeError::InvalidWord(_)) => {
                writeln!(output, "[!] Invalid word. Uppercase ASCII letters only.")?;
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn run(args: SearchArgs, matches: &ArgMatches) {
    let params = resolve_params(&args.params, args.config.as_deref(), matches).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(EXIT_CONFIG);
    });

    let target = match &args.word {
        Some(word) => Target::parse(word).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(EXIT_INVALID_WORD);
        }),
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            prompt_target(&mut input, &mut output).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(EXIT_INVALID_WORD);
            })
        }
    };

    let evolution = Evolution::new(target.clone(), &params).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(EXIT_CONFIG);
    });

    if args.json {
        let result = evolution.run(&mut |_: &Progress| {});
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("{}", e);
                process::exit(EXIT_CONFIG);
            }
        }
        return;
    }

    reports::print_banner(&target, &params);
    let mut reporter = reports::ConsoleReporter::new(&target);
    let result = evolution.run(&mut reporter);
    reports::print_outcome(&result);
    reports::print_result_summary(&target, &result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reprompts_until_valid() {
        let mut input = Cursor::new("hello\nHELLO WORLD\nHELLO\n");
        let mut output = Vec::new();

        let target = prompt_target(&mut input, &mut output).unwrap();
        assert_eq!(target.to_string(), "HELLO");

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("[!] Invalid word").count(), 2);
        assert_eq!(text.matches("[+] Enter the hidden word").count(), 3);
    }

    #[test]
    fn test_prompt_eof_is_an_error() {
        let mut input = Cursor::new("abc\n");
        let mut output = Vec::new();
        assert!(matches!(
            prompt_target(&mut input, &mut output),
            Err(WordForgeError::Io(_))
        ));
    }
}
