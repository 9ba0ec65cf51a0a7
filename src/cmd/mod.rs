pub mod search;
pub mod validate;

use clap::ArgMatches;
use tracing::info;
use wordforge::{EvolutionParams, WfResult};

/// Exit code for a rejected target word.
pub const EXIT_INVALID_WORD: i32 = 2;
/// Exit code for invalid parameters or an unreadable config file.
pub const EXIT_CONFIG: i32 = 1;

/// Defaults, then the optional JSON file, then flags typed on the command line.
pub fn resolve_params(
    cli_params: &EvolutionParams,
    config_path: Option<&str>,
    matches: &ArgMatches,
) -> WfResult<EvolutionParams> {
    let params = match config_path {
        Some(path) => {
            info!("Loading parameters from: {}", path);
            let mut file_params = EvolutionParams::load_from_file(path)?;
            file_params.merge_from_cli(cli_params, matches);
            file_params
        }
        None => cli_params.clone(),
    };
    params.validate()?;
    Ok(params)
}
