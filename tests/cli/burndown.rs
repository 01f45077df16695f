use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

const CSV_HEADER: &str = "date,needs:fix_opt_description,needs:check_deprecation_status,\
needs:check_opt_group_and_type,needs:fix_opt_description_indentation,\
needs:fix_opt_registration_consistency";

fn setup_sources(test: &CliTest, dir: &str) -> Result<()> {
    test.write_file(
        &format!("{}/api.py", dir),
        "from oslo_config import cfg\n\n# needs:fix_opt_description\n# needs:check_opt_group_and_type\napi_opts = []\n",
    )?;
    test.write_file(&format!("{}/base.py", dir), "base_opts = []\n")?;
    test.write_file(
        &format!("{}/wsgi.py", dir),
        "# needs:fix_opt_description\nwsgi_opts = []\n",
    )?;
    test.write_file(&format!("{}/README.rst", dir), "# needs:fix_opt_description\n")?;
    Ok(())
}

fn csv_rows(content: &str) -> Vec<Vec<String>> {
    content
        .lines()
        .skip(1)
        .map(|line| line.split(',').map(String::from).collect())
        .collect()
}

#[test]
fn test_burndown_writes_all_reports() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test, "nova/nova/conf")?;

    let output = test.offline_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Scanned 3 files in nova/nova/conf (1 done)"));
    assert!(stdout.contains("review service skipped"));

    let csv = test.read_file("data.csv")?;
    assert_eq!(csv.lines().next(), Some(CSV_HEADER));
    let rows = csv_rows(&csv);
    assert_eq!(rows.len(), 1);
    assert!(rows[0][0].parse::<i64>().is_ok());
    assert_eq!(&rows[0][1..], &["2", "0", "1", "0", "0"]);

    let json: Value =
        serde_json::from_str(&test.read_file("data.json")?).context("data.json is JSON")?;
    let names: Vec<&str> = json
        .as_array()
        .context("data.json is an array")?
        .iter()
        .filter_map(|record| record["filename"].as_str())
        .collect();
    assert_eq!(names, vec!["api.py", "base.py", "wsgi.py"]);
    assert_eq!(json[0]["needs:check_opt_group_and_type"], "TODO");
    assert_eq!(json[1]["needs:fix_opt_description"], "\u{2713}");

    let table = test.read_file("data.txt")?;
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        format!(
            "{:<40} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "File Name", "Description", "Deprecation", "Group/Type", "Indentation", "Consistency"
        )
    );
    assert_eq!(
        lines[1],
        format!(
            "{:<40} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "api.py", "TODO", "\u{2713}", "TODO", "\u{2713}", "\u{2713}"
        )
    );

    Ok(())
}

#[test]
fn test_rerun_appends_one_csv_row() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test, "nova/nova/conf")?;

    assert!(test.offline_command().output()?.status.success());
    let json = test.read_file("data.json")?;
    let table = test.read_file("data.txt")?;

    assert!(test.offline_command().output()?.status.success());

    assert_eq!(test.read_file("data.json")?, json);
    assert_eq!(test.read_file("data.txt")?, table);
    let csv = test.read_file("data.csv")?;
    assert_eq!(csv.lines().filter(|line| *line == CSV_HEADER).count(), 1);
    let rows = csv_rows(&csv);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][1..].to_vec(), rows[1][1..].to_vec());

    Ok(())
}

#[test]
fn test_config_file_sets_paths() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test, "src/conf")?;
    test.write_file(
        ".burndownrc.json",
        r#"{ "sourceRoot": "src/conf", "outputDir": "reports" }"#,
    )?;

    let output = test.offline_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(test.root().join("reports/data.csv").exists());
    assert!(test.root().join("reports/data.json").exists());
    assert!(test.root().join("reports/data.txt").exists());
    assert!(!test.root().join("data.csv").exists());

    Ok(())
}

#[test]
fn test_flags_override_config() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test, "other")?;
    test.write_file(".burndownrc.json", r#"{ "sourceRoot": "missing" }"#)?;

    let output = test
        .offline_command()
        .args(["--source-root", "other", "--output-dir", "out"])
        .output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("out/data.csv").exists());

    Ok(())
}

#[test]
fn test_missing_source_root_fails_without_reports() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.offline_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Source root does not exist"), "{}", stderr);
    assert!(!test.root().join("data.csv").exists());

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test, "nova/nova/conf")?;
    test.write_file(".burndownrc.json", r#"{ "jobs": 0 }"#)?;

    let output = test.offline_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("jobs"));
    assert!(!test.root().join("data.csv").exists());

    Ok(())
}
