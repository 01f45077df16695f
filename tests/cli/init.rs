use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("Created"));

    let content = test.read_file(".burndownrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for key in [
        "sourceRoot",
        "outputDir",
        "reviewUrl",
        "project",
        "pathPrefix",
        "maxAge",
        "jobs",
    ] {
        assert!(parsed.get(key).is_some(), "Config should have '{}'", key);
    }

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".burndownrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("already exists"));
    assert_eq!(test.read_file(".burndownrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("nova/nova/conf/api.py", "# needs:fix_opt_description\n")?;

    let output = test.offline_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("data.csv").exists());

    Ok(())
}
