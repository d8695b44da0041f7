use std::process::Command;

fn run_sim(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim(&["--games", "5", "--seed", "7"]);
    let results = v["results"].as_array().unwrap();
    assert_eq!(results.len(), 5);
    for result in results {
        assert_eq!(result["games"], 5);
        assert_eq!(result["timeouts"], 0);
        assert!(result["mean_shots"].as_f64().unwrap() >= 17.0);
    }
}

#[test]
fn sim_binary_counts_timeouts() {
    let v = run_sim(&[
        "--games", "2", "--width", "1", "--height", "1", "--strategy", "random",
    ]);
    let result = &v["results"][0];
    assert_eq!(result["strategy"], "random");
    assert_eq!(result["timeouts"], 2);
    assert!(result["min_shots"].is_null());
}

#[test]
fn sim_binary_warns_once_per_clamped_setting() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--games", "1", "--width", "30"])
        .env_remove("BATTLESHIP_LOG")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert_eq!(stderr.matches("width 30 outside").count(), 1);
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(v["width"], 26);
}
