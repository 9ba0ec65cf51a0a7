use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evolve a population toward the hidden word.
    Search(cmd::search::SearchArgs),
    /// Check a word and parameters without searching.
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => {
            let sub_matches = matches
                .subcommand_matches("search")
                .expect("clap matched the search subcommand");
            cmd::search::run(args, sub_matches)
        }
        Commands::Validate(args) => {
            let sub_matches = matches
                .subcommand_matches("validate")
                .expect("clap matched the validate subcommand");
            cmd::validate::run(args, sub_matches)
        }
    }
}
