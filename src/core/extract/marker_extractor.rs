//! Marker extraction visitor.
//!
//! Second pass over a file. Every JSX element whose tag is a component alias
//! and every call whose callee is a function alias is turned into a catalog
//! entry or a diagnostic. The construct-specific rules live in `component`
//! and `function`; this module owns traversal and output.

use swc_common::{SourceMap, SourceMapper, Span};
use swc_ecma_ast::{CallExpr, Callee, Expr, JSXElement, JSXElementName, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::collect::AliasSet;
use crate::core::data::{Diagnostic, DiagnosticKind, TranslationCatalog, TranslationEntry};

/// Output of the extraction pass for one file.
#[derive(Debug, Default)]
pub struct ExtractionOutput {
    pub catalog: TranslationCatalog,
    pub diagnostics: Vec<Diagnostic>,
}

/// Visitor producing translation entries from resolved markers.
///
/// # Usage
///
/// ```ignore
/// let aliases = AliasSet::resolve(&module, &options);
/// let is_alias_wrapper = options.is_alias_wrapper(file_path);
///
/// let output = MarkerExtractor::new(file_path, &source_map, &aliases, is_alias_wrapper)
///     .extract(&module);
/// // output.catalog: entries in first-occurrence order
/// // output.diagnostics: markers that could not be extracted
/// ```
pub struct MarkerExtractor<'a> {
    /// Path of the file being extracted, copied into diagnostics.
    file_path: &'a str,

    /// Source map for line lookups and snippets.
    source_map: &'a SourceMap,

    /// Aliases resolved in Phase 1. Read-only here.
    aliases: &'a AliasSet,

    /// When true, suppressible diagnostics are dropped.
    is_alias_wrapper: bool,

    catalog: TranslationCatalog,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> MarkerExtractor<'a> {
    pub fn new(
        file_path: &'a str,
        source_map: &'a SourceMap,
        aliases: &'a AliasSet,
        is_alias_wrapper: bool,
    ) -> Self {
        Self {
            file_path,
            source_map,
            aliases,
            is_alias_wrapper,
            catalog: TranslationCatalog::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Run the extraction pass over `module`.
    ///
    /// Files without any alias are not traversed at all.
    pub fn extract(mut self, module: &Module) -> ExtractionOutput {
        if !self.aliases.is_empty() {
            module.visit_with(&mut self);
        }
        ExtractionOutput {
            catalog: self.catalog,
            diagnostics: self.diagnostics,
        }
    }

    /// Record an entry, or an `EmptyKey` diagnostic when the key is empty.
    pub(super) fn emit(&mut self, entry: TranslationEntry, marker: &str, span: Span) {
        if entry.key.is_empty() {
            self.report(DiagnosticKind::EmptyKey, marker, span);
            return;
        }
        self.catalog.insert(entry);
    }

    /// Record a diagnostic for the marker at `span`.
    pub(super) fn report(&mut self, kind: DiagnosticKind, marker: &str, span: Span) {
        if self.is_alias_wrapper && kind.is_suppressible() {
            return;
        }

        let line = if span.is_dummy() {
            None
        } else {
            Some(self.source_map.lookup_char_pos(span.lo).line)
        };
        let snippet = self.source_map.span_to_snippet(span).unwrap_or_default();

        self.diagnostics
            .push(Diagnostic::new(kind, marker, self.file_path, line, snippet));
    }
}

impl Visit for MarkerExtractor<'_> {
    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if let JSXElementName::Ident(ident) = &node.opening.name
            && self.aliases.is_component(&ident.sym)
        {
            self.extract_component(node, &ident.sym);
        }

        // Markers may nest other markers in attributes or children
        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(expr) = &node.callee
            && let Expr::Ident(ident) = unparen(expr)
            && self.aliases.is_function(&ident.sym)
        {
            self.extract_function(node, &ident.sym);
        }

        node.visit_children_with(self);
    }
}

/// Strip any number of parentheses: `(translate)(...)` calls `translate`.
fn unparen(mut expr: &Expr) -> &Expr {
    while let Expr::Paren(paren) = expr {
        expr = &paren.expr;
    }
    expr
}
