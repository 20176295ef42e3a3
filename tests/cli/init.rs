use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [Info] Created .pgmtrc.json

    ----- stderr -----
    ");
    let config: Value = serde_json::from_str(&test.read_file(".pgmtrc.json")?)?;
    assert_eq!(config["fromLang"], "auto");
    assert_eq!(config["toLang"], "en_US");
    assert_eq!(config["engine"], "google");
    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".pgmtrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    [Error] .pgmtrc.json already exists
    ");
    assert_eq!(test.read_file(".pgmtrc.json")?, "{}");
    Ok(())
}
