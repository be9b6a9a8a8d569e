use std::path::Path;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use swc_common::{FileName, Globals, SourceMap, Spanned, sync::Lrc};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// Source dialect used to parse a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceSyntax {
    /// Pick the dialect from the file extension.
    #[default]
    Auto,
    /// TypeScript, with TSX enabled.
    Typescript,
    /// ECMAScript, with JSX enabled.
    Ecmascript,
}

/// Parser configuration shared by every file of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    #[serde(default)]
    pub syntax: SourceSyntax,
    #[serde(default)]
    pub decorators: bool,
}

impl ParserConfig {
    /// Resolve the swc syntax for a given file.
    ///
    /// `.ts` files are parsed without JSX since `<T>expr` type assertions
    /// are ambiguous with JSX tags there.
    pub fn syntax_for(&self, file_path: &str) -> Syntax {
        let extension = Path::new(file_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        match self.syntax {
            SourceSyntax::Typescript => self.typescript(extension != "ts"),
            SourceSyntax::Ecmascript => self.ecmascript(),
            SourceSyntax::Auto => match extension {
                "ts" | "mts" | "cts" => self.typescript(false),
                "tsx" => self.typescript(true),
                _ => self.ecmascript(),
            },
        }
    }

    fn typescript(&self, tsx: bool) -> Syntax {
        Syntax::Typescript(TsSyntax {
            tsx,
            decorators: self.decorators,
            ..Default::default()
        })
    }

    fn ecmascript(&self) -> Syntax {
        Syntax::Es(EsSyntax {
            jsx: true,
            decorators: self.decorators,
            ..Default::default()
        })
    }
}

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Lrc<SourceMap>,
}

/// Parse a source string into an AST.
///
/// Each call owns its own `SourceMap` so files can be parsed on any thread.
/// Recoverable parser errors are reported as failures too: a file that only
/// parses with recovery cannot be trusted for extraction.
pub fn parse_source(code: String, file_path: &str, config: &ParserConfig) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map: Lrc<SourceMap> = Default::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            config.syntax_for(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser
            .parse_module()
            .map_err(|e| describe_error(&source_map, &e))?;

        if let Some(error) = parser.take_errors().into_iter().next() {
            return Err(describe_error(&source_map, &error));
        }

        Ok(ParsedSource { module, source_map })
    })
}

fn describe_error(source_map: &SourceMap, error: &swc_ecma_parser::error::Error) -> anyhow::Error {
    let loc = source_map.lookup_char_pos(error.span().lo);
    anyhow!(
        "Failed to parse source at line {}, column {}: {}",
        loc.line,
        loc.col_display + 1,
        error.kind().msg()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_syntax_by_extension() {
        let config = ParserConfig::default();

        assert!(matches!(
            config.syntax_for("src/app.tsx"),
            Syntax::Typescript(TsSyntax { tsx: true, .. })
        ));
        assert!(matches!(
            config.syntax_for("src/utils.ts"),
            Syntax::Typescript(TsSyntax { tsx: false, .. })
        ));
        assert!(matches!(
            config.syntax_for("src/page.jsx"),
            Syntax::Es(EsSyntax { jsx: true, .. })
        ));
        assert!(matches!(
            config.syntax_for("src/page.js"),
            Syntax::Es(EsSyntax { jsx: true, .. })
        ));
    }

    #[test]
    fn test_forced_syntax() {
        let config = ParserConfig {
            syntax: SourceSyntax::Typescript,
            decorators: true,
        };
        assert!(matches!(
            config.syntax_for("src/page.js"),
            Syntax::Typescript(TsSyntax {
                tsx: true,
                decorators: true,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_tsx() {
        let code = r#"
            import Translate from "@docusaurus/Translate";
            export default function Page(): JSX.Element {
                return <Translate>Hello</Translate>;
            }
        "#;
        let parsed = parse_source(code.to_string(), "page.tsx", &ParserConfig::default());
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().module.body.len(), 2);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let code = "const a = ;\n";
        let result = parse_source(code.to_string(), "broken.tsx", &ParserConfig::default());
        let err = result.err().unwrap().to_string();
        assert!(err.contains("Failed to parse source at line 1"));
    }
}
