use tempfile::tempdir;

#[test]
fn writes_a_csv_report() {
    let temp_dir = tempdir().unwrap();
    let report_path = temp_dir.path().join("report.csv");

    assert_cmd::Command::cargo_bin("outbreak")
        .unwrap()
        .args([
            "--population",
            "50",
            "--initial-infected",
            "2",
            "--days",
            "5",
            "--random-seed",
            "1",
            "--output",
            report_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(&report_path).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 5);
}

#[test]
fn prints_the_series_without_an_output_path() {
    let output = assert_cmd::Command::cargo_bin("outbreak")
        .unwrap()
        .args(["-p", "20", "-i", "1", "-d", "3", "-r", "1"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("day,infected,discovered,healed,dead"));
    assert_eq!(lines.next(), Some("0,1,0,0,0"));
    assert_eq!(stdout.lines().count(), 4);
}
