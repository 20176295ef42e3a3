use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const PROJECT: &str = r#"{
    "version": "1.0",
    "gameInformation": {
        "title": "Demo",
        "language": ["ja_JP"]
    },
    "scenes": [
        { "name": "title" }
    ],
    "textList": [
        {
            "name": "menu",
            "children": [
                { "text": { "ja_JP": "はじめから" } },
                { "text": { "ja_JP": "つづきから", "en_US": "Continue" } },
                { "children": [ { "text": { "ja_JP": "おわり" } } ] }
            ]
        },
        { "name": "empty block" }
    ]
}
"#;

#[test]
fn test_run_translates_project() -> Result<()> {
    let test = CliTest::with_project(PROJECT)?;

    let mut cmd = test.run_command();
    cmd.args(["-fl", "ja_JP", "-tl", "it_IT"]);

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [Info] Selected 'project.json' path: [TEMP]/project.json
        [Info] Translation: 'ja_JP' -> 'it_IT'
        [Info] Extracting localization strings, please wait
        [Info] Added 'it_IT' to the languages supported by the game
        [Info] Translating 3 strings with the 'copy' engine, it may require some time, please wait
        [Info] All strings processed
        [Info] Saving 'project.json', it may require some time, please wait
        [Info] Operation completed
        ✓ 3 translated, 0 skipped, 0 empty, 0 failed
        525 bytes before, 1142 bytes after

        ----- stderr -----
        ");
    });

    let project = test.read_json("project.json")?;
    assert_eq!(
        project["gameInformation"]["language"],
        json!(["ja_JP", "it_IT"])
    );
    let children = &project["textList"][0]["children"];
    assert_eq!(children[0]["text"]["it_IT"], "はじめから");
    assert_eq!(children[1]["text"]["it_IT"], "つづきから");
    assert_eq!(children[2]["children"][0]["text"]["it_IT"], "おわり");
    Ok(())
}

#[test]
fn test_run_preserves_layout_and_key_order() -> Result<()> {
    let test = CliTest::with_project(PROJECT)?;

    let output = test.run_command().args(["-fl", "ja_JP"]).output()?;
    assert!(output.status.success(), "{}", stderr(&output));

    let content = test.read_file("project.json")?;
    assert!(content.starts_with("{\n    \"version\": \"1.0\",\n    \"gameInformation\""));
    let project = test.read_json("project.json")?;
    let keys: Vec<&String> = project.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["version", "gameInformation", "scenes", "textList"]);
    Ok(())
}

#[test]
fn test_run_skip_existing() -> Result<()> {
    let test = CliTest::with_project(PROJECT)?;

    let mut cmd = test.run_command();
    cmd.args(["-tl", "en_US", "-s"]);

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [Info] Selected 'project.json' path: [TEMP]/project.json
        [Info] Translation: 'auto' -> 'en_US'
        [Info] Extracting localization strings, please wait
        [Info] Added 'en_US' to the languages supported by the game
        [Info] Translating 3 strings with the 'copy' engine, it may require some time, please wait
        [Info] All strings processed
        [Info] Saving 'project.json', it may require some time, please wait
        [Info] Operation completed
        ✓ 2 translated, 1 skipped, 0 empty, 0 failed
        525 bytes before, 1090 bytes after

        ----- stderr -----
        ");
    });
    let project = test.read_json("project.json")?;
    assert_eq!(
        project["textList"][0]["children"][1]["text"]["en_US"],
        "Continue"
    );
    Ok(())
}

#[test]
fn test_run_optimize() -> Result<()> {
    let test = CliTest::with_project(PROJECT)?;

    let output = test.run_command().arg("-o").output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    let content = test.read_file("project.json")?;
    assert!(!content.contains('\n'));
    assert!(!content.contains(": "));
    assert!(content.len() < PROJECT.len());
    Ok(())
}

#[test]
fn test_run_export_and_import() -> Result<()> {
    let test = CliTest::with_project(PROJECT)?;

    let output = test
        .run_command()
        .args(["-e", "strings.json", "--dry-run"])
        .output()?;
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Strings extracted to strings.json"));
    assert_eq!(test.read_file("project.json")?, PROJECT);

    let mut strings = test.read_json("strings.json")?;
    strings[0]["children"][0]["text"]["en_US"] = json!("New game");
    test.write_file("strings.json", &strings.to_string())?;

    let output = test
        .run_command()
        .args(["-i", "strings.json", "-s"])
        .output()?;
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Importing strings from strings.json"));

    let project = test.read_json("project.json")?;
    let children = &project["textList"][0]["children"];
    assert_eq!(children[0]["text"]["en_US"], "New game");
    assert_eq!(children[1]["text"]["en_US"], "Continue");
    assert_eq!(children[2]["children"][0]["text"]["en_US"], "おわり");
    Ok(())
}

#[test]
fn test_run_export_does_not_overwrite() -> Result<()> {
    let test = CliTest::with_project(PROJECT)?;
    test.write_file("strings.json", "[]")?;

    let mut cmd = test.run_command();
    cmd.args(["-e", "strings.json"]);

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [Info] Selected 'project.json' path: [TEMP]/project.json
        [Info] Translation: 'auto' -> 'en_US'
        [Info] Extracting localization strings, please wait
        [Warn] strings.json already exists, strings were not exported
        [Info] Added 'en_US' to the languages supported by the game
        [Info] Translating 3 strings with the 'copy' engine, it may require some time, please wait
        [Info] All strings processed
        [Info] Saving 'project.json', it may require some time, please wait
        [Info] Operation completed
        ✓ 3 translated, 0 skipped, 0 empty, 0 failed
        525 bytes before, 1097 bytes after

        ----- stderr -----
        ");
    });
    assert_eq!(test.read_file("strings.json")?, "[]");
    Ok(())
}

#[test]
fn test_run_backup() -> Result<()> {
    let test = CliTest::with_project(PROJECT)?;

    let output = test.run_command().arg("--backup").output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(test.read_file("project.json.bak")?, PROJECT);
    Ok(())
}

#[test]
fn test_run_uses_config_file() -> Result<()> {
    let test = CliTest::with_project(PROJECT)?;
    test.write_file(
        ".pgmtrc.json",
        r#"{ "fromLang": "ja_JP", "toLang": "fr_FR", "engine": "copy" }"#,
    )?;

    let output = test.command().output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("'ja_JP' -> 'fr_FR'"));
    let project = test.read_json("project.json")?;
    assert_eq!(
        project["gameInformation"]["language"],
        json!(["ja_JP", "fr_FR"])
    );
    Ok(())
}

#[test]
fn test_run_explicit_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("game/data/project.json", PROJECT)?;

    let output = test
        .run_command()
        .args(["-p", "game/data/project.json"])
        .output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(test.root().join("game/data/project.json").exists());
    let project = test.read_json("game/data/project.json")?;
    assert_eq!(
        project["gameInformation"]["language"],
        json!(["ja_JP", "en_US"])
    );
    Ok(())
}

#[test]
fn test_run_missing_project() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.run_command();

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: false
        exit_code: 2
        ----- stdout -----
        [Info] Selected 'project.json' path: [TEMP]/project.json
        [Info] Translation: 'auto' -> 'en_US'

        ----- stderr -----
        [Error] The specified path does not contain the requested file, check that the path is exact: [TEMP]/project.json
        ");
    });
    Ok(())
}

#[test]
fn test_run_malformed_project() -> Result<()> {
    let test = CliTest::with_project("{ \"textList\": [")?;

    let output = test.run_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse JSON file"));
    Ok(())
}

#[test]
fn test_run_without_game_information() -> Result<()> {
    let content = r#"{"textList":[{"children":[{"text":{"ja_JP":"a"}}]}]}"#;
    let test = CliTest::with_project(content)?;

    let output = test.run_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No \"gameInformation\" object found"));
    assert!(!stdout(&output).contains("Translating"));
    assert_eq!(test.read_file("project.json")?, content);
    Ok(())
}

#[test]
fn test_run_keeps_large_numbers() -> Result<()> {
    let content = r#"{"id":18446744073709551616,"scale":1.0e2,"far":1e400,"gameInformation":{"language":["ja_JP"]},"textList":[]}"#;
    let test = CliTest::with_project(content)?;

    let output = test.run_command().arg("-o").output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        test.read_file("project.json")?,
        r#"{"id":18446744073709551616,"scale":1.0e2,"far":1e400,"gameInformation":{"language":["ja_JP","en_US"]},"textList":[]}"#
    );
    Ok(())
}

#[test]
fn test_run_unsupported_locale() -> Result<()> {
    let test = CliTest::with_project(PROJECT)?;

    let mut cmd = test.run_command();
    cmd.args(["-tl", "english"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    [Error] Invalid destination language: Unsupported locale code: "english"
    "#);
    assert_eq!(test.read_file("project.json")?, PROJECT);
    Ok(())
}

#[test]
fn test_run_missing_import() -> Result<()> {
    let test = CliTest::with_project(PROJECT)?;

    let output = test.run_command().args(["-i", "nope.json"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("import path does not exist"));
    Ok(())
}
