use fastrand::Rng;
use wordforge::{EvolutionParams, Population, Target, WordForgeError};

fn params(population_size: usize, mutation_probability: f64) -> EvolutionParams {
    EvolutionParams {
        population_size,
        mutation_probability,
        ..Default::default()
    }
}

#[test]
fn test_new_population_has_requested_size() {
    let t = Target::parse("POPULATION").unwrap();
    let pop = Population::new(t, &params(32, 0.1), Rng::with_seed(1)).unwrap();
    assert_eq!(pop.len(), 32);
    assert!(pop.organisms().iter().all(|o| o.genome().len() == 10));
}

#[test]
fn test_size_is_invariant_across_epochs() {
    let t = Target::parse("INVARIANT").unwrap();
    let mut pop = Population::new(t, &params(16, 0.3), Rng::with_seed(2)).unwrap();
    for _ in 0..200 {
        pop.epoch();
        assert_eq!(pop.len(), 16);
    }
}

#[test]
fn test_fitness_sum_is_never_stale() {
    let t = Target::parse("SUMMATION").unwrap();
    let mut pop = Population::new(t, &params(20, 0.5), Rng::with_seed(3)).unwrap();
    for _ in 0..50 {
        let expected: usize = pop.organisms().iter().map(|o| o.fitness()).sum();
        assert_eq!(pop.fitness_sum(), expected);
        pop.epoch();
    }
    pop.compute_sum();
    let expected: usize = pop.organisms().iter().map(|o| o.fitness()).sum();
    assert_eq!(pop.fitness_sum(), expected);
}

#[test]
fn test_rejects_bad_parameters() {
    let t = Target::parse("ABC").unwrap();
    for bad in [params(0, 0.1), params(7, 0.1), params(8, 1.5), params(8, -0.1)] {
        let res = Population::new(t.clone(), &bad, Rng::with_seed(4));
        assert!(matches!(res, Err(WordForgeError::Config(_))), "{:?}", bad);
    }
}

#[test]
fn test_from_genomes_checks_count_and_length() {
    let t = Target::parse("AB").unwrap();
    let p = params(2, 0.0);

    assert!(Population::from_genomes(&["AB"], t.clone(), &p, Rng::with_seed(0)).is_err());
    assert!(Population::from_genomes(&["AB", "ABC"], t.clone(), &p, Rng::with_seed(0)).is_err());
    assert!(matches!(
        Population::from_genomes(&["a\0", "!?"], t.clone(), &p, Rng::with_seed(0)),
        Err(WordForgeError::InvalidWord(_))
    ));

    let pop = Population::from_genomes(&["AB", "AZ"], t, &p, Rng::with_seed(0)).unwrap();
    assert_eq!(pop.fitness_sum(), 3);
    assert_eq!(pop.best().genome_str(), "AB");
}

#[test]
fn test_zero_fitness_population_selects_every_index() {
    let t = Target::parse("Z").unwrap();
    let genomes = ["A"; 8];
    let mut pop = Population::from_genomes(&genomes, t, &params(8, 0.0), Rng::with_seed(5)).unwrap();
    assert_eq!(pop.fitness_sum(), 0);

    let mut counts = [0u32; 8];
    for _ in 0..20_000 {
        let idx = pop.select();
        assert!(idx < 8);
        counts[idx] += 1;
    }
    // Every index owns one slot of the wheel (index 0 also owns the zero toss).
    for &c in &counts {
        assert!(c > 1_500, "selection too skewed: {:?}", counts);
    }
}

#[test]
fn test_selection_favours_fitter_organisms() {
    let t = Target::parse("AAAA").unwrap();
    let genomes = ["ZZZZ", "AAAA", "ZZZZ", "ZZZZ"];
    let mut pop = Population::from_genomes(&genomes, t, &params(4, 0.0), Rng::with_seed(6)).unwrap();

    let mut counts = [0u32; 4];
    for _ in 0..10_000 {
        let (a, b) = pop.select_parents();
        counts[a] += 1;
        counts[b] += 1;
    }
    assert!(counts[1] > counts[0]);
    assert!(counts[1] > counts[2]);
    assert!(counts[1] > counts[3]);
}

#[test]
fn test_no_mutation_keeps_genes_from_previous_generation() {
    let t = Target::parse("ABC").unwrap();
    let genomes = ["ABZ", "ZBC", "ABZ", "ZBC"];
    let mut pop = Population::from_genomes(&genomes, t, &params(4, 0.0), Rng::with_seed(7)).unwrap();

    for _ in 0..25 {
        pop.epoch();
        for o in pop.organisms() {
            let g = o.genome();
            assert!(g[0] == b'A' || g[0] == b'Z');
            assert_eq!(g[1], b'B');
            assert!(g[2] == b'C' || g[2] == b'Z');
        }
    }
}

#[test]
fn test_full_mutation_touches_population() {
    let t = Target::parse("QQQQQQQQ").unwrap();
    let genomes = ["AAAAAAAA"; 10];
    let mut pop = Population::from_genomes(&genomes, t, &params(10, 1.0), Rng::with_seed(8)).unwrap();
    pop.epoch();
    // Each organism got exactly one point mutation; the odds that every one
    // of them redrew 'A' are negligible.
    assert!(pop.organisms().iter().any(|o| o.genome_str() != "AAAAAAAA"));
    for o in pop.organisms() {
        let diffs = o.genome().iter().filter(|&&g| g != b'A').count();
        assert!(diffs <= 1);
    }
}
