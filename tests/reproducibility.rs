use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_wordforge");

fn run_json(seed: &str) -> String {
    let output = Command::new(BIN)
        .args([
            "search",
            "--word",
            "REPRODUCIBLE",
            "--seed",
            seed,
            "--population-size",
            "32",
            "--max-epochs",
            "300",
            "--json",
        ])
        .output()
        .expect("failed to launch wordforge");

    if !output.status.success() {
        println!("STDERR:\n{}", String::from_utf8_lossy(&output.stderr));
        panic!("run failed");
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_deterministic_output() {
    let a = run_json("12345");
    let b = run_json("12345");
    assert_eq!(a, b, "Determinism check failed: results differ");
    assert!(a.contains("\"epochs_run\""));
}
