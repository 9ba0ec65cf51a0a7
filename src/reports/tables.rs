use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use wordforge::evolution::EvolutionResult;
use wordforge::organism::Organism;
use wordforge::{EvolutionParams, Target};

pub fn print_run_summary(target: &Target, params: &EvolutionParams) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Setting").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let seed = params
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "random".to_string());

    let rows = [
        ("Word", target.to_string()),
        ("Length", target.len().to_string()),
        ("Ideal fitness", Organism::ideal_fitness(target).to_string()),
        ("Population size", params.population_size.to_string()),
        ("Mutation probability", params.mutation_probability.to_string()),
        ("Max epochs", params.max_epochs.to_string()),
        ("Print granularity", params.print_granularity.to_string()),
        ("Seed", seed),
    ];

    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value).fg(Color::Cyan)]);
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("{}", table);
}

fn result_table(target: &Target, result: &EvolutionResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Outcome").add_attribute(Attribute::Bold),
        Cell::new("Best genome").add_attribute(Attribute::Bold),
        Cell::new("Fitness").add_attribute(Attribute::Bold),
        Cell::new("Epochs").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new(result.outcome.to_string()).fg(Color::Cyan),
        Cell::new(&result.genome),
        Cell::new(format!(
            "{}/{}",
            result.fitness,
            Organism::ideal_fitness(target)
        )),
        Cell::new(result.epochs_run),
    ]);

    for i in 2..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

pub fn print_result_summary(target: &Target, result: &EvolutionResult) {
    println!("\n{}", result_table(target, result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordforge::Outcome;

    #[test]
    fn test_result_table_lists_outcome_and_score() {
        let target = Target::parse("WORD").unwrap();
        let result = EvolutionResult {
            outcome: Outcome::Exhausted,
            genome: "WARD".to_string(),
            fitness: 3,
            epochs_run: 120,
        };
        let rendered = result_table(&target, &result).to_string();
        assert!(rendered.contains("exhausted"));
        assert!(rendered.contains("WARD"));
        assert!(rendered.contains("3/4"));
        assert!(rendered.contains("120"));
    }
}
