use super::{resolve_params, EXIT_CONFIG, EXIT_INVALID_WORD};
use crate::reports;
use clap::{ArgMatches, Args};
use std::process;
use tracing::error;
use wordforge::{EvolutionParams, Target};

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub params: EvolutionParams,

    #[arg(short, long)]
    pub word: String,

    #[arg(short, long)]
    pub config: Option<String>,
}

/// Checks the word and parameters without running the search.
pub fn run(args: ValidateArgs, matches: &ArgMatches) {
    let target = Target::parse(&args.word).unwrap_or_else(|e| {
        error!("{}", e);
        println!("[!] Invalid word. Uppercase ASCII letters only.");
        process::exit(EXIT_INVALID_WORD);
    });

    let params = resolve_params(&args.params, args.config.as_deref(), matches).unwrap_or_else(|e| {
        error!("{}", e);
        println!("[!] {}", e);
        process::exit(EXIT_CONFIG);
    });

    println!("[*] Configuration is valid.");
    reports::print_run_summary(&target, &params);
}
