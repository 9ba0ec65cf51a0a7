use std::io::{self, Write};
use wordforge::evolution::{EvolutionResult, Outcome, Progress, ProgressObserver};
use wordforge::{EvolutionParams, Target};

/// VT100: clear the whole line, then return to column 0.
const CLEAR_LINE: &str = "\x1b[2K\r";
const NUMBER_WIDTH: usize = 10;

pub fn print_banner(target: &Target, params: &EvolutionParams) {
    println!(
        "[+] Starting search for a {}-character hidden word",
        target.len()
    );
    println!("[-]   Population size:       {}", params.population_size);
    println!("[-]   Mutation probability:  {}", params.mutation_probability);
    println!("[-]   Max epochs to run:     {}", params.max_epochs);
    if let Some(seed) = params.seed {
        println!("[-]   Seed:                  {}", seed);
    }
}

/// Renders progress events as a single self-overwriting stats line.
pub struct ConsoleReporter {
    genome_width: usize,
    printed_header: bool,
}

impl ConsoleReporter {
    pub fn new(target: &Target) -> Self {
        Self {
            genome_width: target.len().max("CURRENT".len()),
            printed_header: false,
        }
    }

    fn header(&self) -> String {
        format!(
            "{:<gw$}  {:<nw$}  {:<nw$}",
            "CURRENT",
            "FITNESS",
            "EPOCH #",
            gw = self.genome_width,
            nw = NUMBER_WIDTH
        )
    }

    fn row(&self, progress: &Progress) -> String {
        format!(
            "{}{:<gw$}  {:<nw$}  {:<nw$}",
            CLEAR_LINE,
            progress.genome,
            progress.fitness,
            progress.epoch,
            gw = self.genome_width,
            nw = NUMBER_WIDTH
        )
    }
}

impl ProgressObserver for ConsoleReporter {
    fn on_progress(&mut self, progress: &Progress) {
        let mut out = io::stdout().lock();
        // Progress output is best-effort; a closed stdout must not stop the run.
        if !self.printed_header {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.header());
            self.printed_header = true;
        }
        let _ = write!(out, "{}", self.row(progress));
        let _ = out.flush();
    }
}

pub fn print_outcome(result: &EvolutionResult) {
    println!();
    println!();
    match result.outcome {
        Outcome::Found => {
            println!("[*] Found the solution in {} epochs.", result.epochs_run);
            println!("[-]   Solution:       {}", result.genome);
        }
        Outcome::Exhausted => {
            println!(
                "[!] Solution not found after {} epochs.",
                result.epochs_run
            );
            println!("[-]   Best candidate: {}", result.genome);
            println!("[-]   Fitness:        {}", result.fitness);
        }
    }
}
