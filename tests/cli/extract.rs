use anyhow::Result;
use insta::assert_snapshot;

use crate::CliTest;

const HOME_PAGE: &str = r#"import React from "react";
import Translate, { translate } from "@docusaurus/Translate";

export default function Home() {
  return (
    <main title={translate({ id: "home.title", message: "Welcome", description: "Page title" })}>
      <Translate id="home.tagline">
        Docs   that
        ship
      </Translate>
    </main>
  );
}
"#;

const CARD: &str = r#"import Translate from "@docusaurus/Translate";

export const Card = () => <Translate description="Card footer">Read more</Translate>;
"#;

#[test]
fn test_extract_scanned_source_tree() -> Result<()> {
    let test = CliTest::with_file("src/pages/index.tsx", HOME_PAGE)?;
    test.write_file("src/components/Card.jsx", CARD)?;
    test.write_file("src/components/Card.test.jsx", CARD.replace("Read more", "Test only").as_str())?;
    test.write_file("build/bundle.js", CARD)?;

    let output = test.run(test.extract_command())?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @r#"
{
  "Read more": {
    "message": "Read more",
    "description": "Card footer"
  },
  "home.title": {
    "message": "Welcome",
    "description": "Page title"
  },
  "home.tagline": {
    "message": "Docs that ship"
  }
}
"#);
    assert!(!output.stderr.contains("warning"));
    assert!(
        output
            .stderr
            .contains("Extracted 3 translations from 2 source files")
    );

    Ok(())
}

#[test]
fn test_extract_reports_diagnostics() -> Result<()> {
    let test = CliTest::with_file(
        "src/pages/index.tsx",
        "import { translate } from \"@docusaurus/Translate\";\n\
         \n\
         const label = translate({ message: \"Static\" });\n\
         const other = translate(computeSomething());\n",
    )?;

    let output = test.run(test.extract_command())?;

    // Diagnostics are warnings, the run still succeeds
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"Static\""));
    assert!(output.stderr.contains(
        "warning: translate() first arg should be a statically evaluable object.  non-static-argument"
    ));
    assert!(output.stderr.contains("--> ./src/pages/index.tsx:4"));
    assert!(output.stderr.contains("4 | translate(computeSomething())"));
    assert!(output.stderr.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_extract_explicit_files_with_alias_wrapper() -> Result<()> {
    let test = CliTest::with_file(
        "src/components/MarkdownI18n.tsx",
        r#"import Translate from "@docusaurus/Translate";

export default function MarkdownI18n({ id, children }) {
  return <Translate id={id}>{children}</Translate>;
}
"#,
    )?;
    test.write_file(
        "src/pages/intro.tsx",
        r#"import MarkdownI18n from "../components/MarkdownI18n";

export default () => <MarkdownI18n id="intro.body">Hello **world**</MarkdownI18n>;
"#,
    )?;

    let mut cmd = test.extract_command();
    cmd.args([
        "src/components/MarkdownI18n.tsx",
        "src/pages/intro.tsx",
        "--component-name",
        "MarkdownI18n",
    ]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @r#"
{
  "intro.body": {
    "message": "Hello **world**"
  }
}
"#);
    assert!(!output.stderr.contains("warning"));

    Ok(())
}

#[test]
fn test_extract_parse_failure_is_isolated() -> Result<()> {
    let test = CliTest::with_file("src/broken.tsx", "export const = <Translate")?;
    test.write_file("src/good.js", CARD)?;

    let mut cmd = test.extract_command();
    cmd.args(["src/broken.tsx", "src/good.js"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("\"Read more\""));
    assert!(output.stderr.contains(
        "error: Error while attempting to extract translations from source code file at path=src/broken.tsx"
    ));
    assert!(output.stderr.contains("parse-error"));
    assert!(output.stderr.contains("--> src/broken.tsx"));

    Ok(())
}

#[test]
fn test_extract_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.extract_command();
    cmd.arg("src/missing.tsx");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout.trim_end(), "{}");
    assert!(output.stderr.contains("Failed to read file: src/missing.tsx"));
    assert!(output.stderr.contains("io-error"));

    Ok(())
}

#[test]
fn test_extract_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nextractrc.json",
        r#"{ "includes": ["app"], "functionNames": ["tr"] }"#,
    )?;
    test.write_file(
        "app/page.js",
        "export const title = tr({ id: \"app.title\", message: \"From config\" });\n",
    )?;
    test.write_file("src/ignored.js", CARD)?;

    let output = test.run(test.extract_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"app.title\""));
    assert!(output.stdout.contains("\"From config\""));
    assert!(!output.stdout.contains("Read more"));

    Ok(())
}

#[test]
fn test_extract_invalid_config_is_error() -> Result<()> {
    let test = CliTest::with_file(".i18nextractrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.run(test.extract_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_extract_syntax_override() -> Result<()> {
    let test = CliTest::with_file(
        "src/typed.js",
        "import { translate } from \"@docusaurus/Translate\";\n\
         const label: string = translate({ message: \"Typed\" });\n",
    )?;

    let output = test.run(test.extract_command())?;
    assert_eq!(output.code, Some(1));

    let mut cmd = test.extract_command();
    cmd.args(["--syntax", "typescript"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"Typed\""));

    Ok(())
}

#[test]
fn test_extract_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("website/src/pages/index.js", CARD)?;

    let mut cmd = test.extract_command();
    cmd.args(["--source-root", "website"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"Read more\""));
    assert!(
        output
            .stderr
            .contains("Extracted 1 translation from 1 source file")
    );

    Ok(())
}
