use std::io::Write;

use tempfile::tempdir;

#[test]
fn cli_runs_with_defaults_and_writes_reports() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output");

    assert_cmd::Command::cargo_bin("outbreak_sim")
        .unwrap()
        .args(["--output-dir", output.to_str().unwrap()])
        .assert()
        .success();

    assert!(output.join("time_series.csv").exists());
    assert!(output.join("summary.csv").exists());

    // 100 default steps plus the initial state plus the header row.
    let series = std::fs::read_to_string(output.join("time_series.csv")).unwrap();
    assert_eq!(series.lines().count(), 102);
}

#[test]
fn cli_reads_parameters_from_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("params.json");
    let mut file = std::fs::File::create(&config_path).unwrap();
    write!(
        file,
        r#"{{"population": 200, "steps": 10, "vaccinated_fraction": 1.0}}"#
    )
    .unwrap();
    let output = dir.path().join("output");

    assert_cmd::Command::cargo_bin("outbreak_sim")
        .unwrap()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["--output-dir", output.to_str().unwrap()])
        .assert()
        .success();

    let series = std::fs::read_to_string(output.join("time_series.csv")).unwrap();
    assert_eq!(series.lines().count(), 12);

    // Everyone vaccinated: the susceptible column stays at zero.
    for line in series.lines().skip(1) {
        let susceptible = line.split(',').nth(1).unwrap();
        assert_eq!(susceptible.parse::<f64>().unwrap(), 0.0);
    }
}

#[test]
fn cli_fails_on_missing_config() {
    assert_cmd::Command::cargo_bin("outbreak_sim")
        .unwrap()
        .args(["--config", "does/not/exist.json"])
        .assert()
        .failure();
}
