mod console;
mod tables;

pub use self::console::{print_banner, print_outcome, ConsoleReporter};
pub use self::tables::{print_result_summary, print_run_summary};
