use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

const CONFIG_FILE: &str = ".i18nextractrc.json";

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .i18nextractrc.json"));
    assert!(test.root().join(CONFIG_FILE).exists());

    let content = test.read_file(CONFIG_FILE)?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for field in [
        "ignores",
        "includes",
        "sourceRoot",
        "ignoreTestFiles",
        "componentNames",
        "functionNames",
        "parser",
    ] {
        assert!(parsed.get(field).is_some(), "Config should have '{field}'");
    }
    assert_eq!(parsed["parser"]["syntax"], "auto");
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(CONFIG_FILE, "{}")?;

    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains(".i18nextractrc.json already exists"));
    assert_eq!(test.read_file(CONFIG_FILE)?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_used_by_extract() -> Result<()> {
    let test = CliTest::with_file(
        "src/pages/index.js",
        "import Translate from '@docusaurus/Translate';\n\
         export default () => <Translate id=\"home\">Home</Translate>;\n",
    )?;

    let mut init = test.command();
    init.arg("init");
    assert_eq!(test.run(init)?.code, Some(0));

    let output = test.run(test.extract_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"home\""));

    Ok(())
}
