pub mod source;

pub use source::{ParsedSource, ParserConfig, SourceSyntax, parse_source};
