//! Alias resolution: which local names denote translation markers.
//!
//! First of the two passes over a file. Only import declarations are
//! inspected; the result is an immutable `AliasSet` handed to the extractor.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};
use swc_ecma_ast::{ImportDecl, ImportSpecifier, Module, ModuleExportName};
use swc_ecma_visit::{Visit, VisitWith};

/// Module exporting the translation primitives.
pub const TRANSLATE_MODULE: &str = "@docusaurus/Translate";

/// Named export of `TRANSLATE_MODULE` used as the function marker.
pub const TRANSLATE_FUNCTION: &str = "translate";

/// Extra alias names supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasOptions {
    /// Names treated as the `<Translate>` component.
    #[serde(default)]
    pub component_names: Vec<String>,
    /// Names treated as the `translate()` function.
    #[serde(default)]
    pub function_names: Vec<String>,
}

impl AliasOptions {
    /// Whether the file is itself a configured component alias.
    ///
    /// Identity is the file name without its last extension, so
    /// `src/components/MarkdownI18n.tsx` matches `MarkdownI18n`.
    pub fn is_alias_wrapper(&self, file_path: &str) -> bool {
        let Some(identity) = file_identity(file_path) else {
            return false;
        };
        self.component_names.iter().any(|name| name == identity)
    }
}

fn file_identity(file_path: &str) -> Option<&str> {
    Path::new(file_path).file_stem().and_then(|s| s.to_str())
}

/// Resolved marker names for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasSet {
    pub component_aliases: HashSet<String>,
    pub function_aliases: HashSet<String>,
}

impl AliasSet {
    /// Resolve aliases for `module`, merged with the configured names.
    pub fn resolve(module: &Module, options: &AliasOptions) -> Self {
        let mut resolver = AliasResolver::default();
        module.visit_with(&mut resolver);

        let mut component_aliases = resolver.component_aliases;
        let mut function_aliases = resolver.function_aliases;
        component_aliases.extend(options.component_names.iter().cloned());
        function_aliases.extend(options.function_names.iter().cloned());

        Self {
            component_aliases,
            function_aliases,
        }
    }

    pub fn is_component(&self, name: &str) -> bool {
        self.component_aliases.contains(name)
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.function_aliases.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.component_aliases.is_empty() && self.function_aliases.is_empty()
    }
}

/// Collects local names bound by imports of `TRANSLATE_MODULE`.
///
/// # Usage
///
/// ```ignore
/// let mut resolver = AliasResolver::default();
/// module.visit_with(&mut resolver);
///
/// // import Translate, { translate as t } from "@docusaurus/Translate";
/// assert!(resolver.component_aliases.contains("Translate"));
/// assert!(resolver.function_aliases.contains("t"));
/// ```
#[derive(Debug, Default)]
pub struct AliasResolver {
    /// Local names of default imports.
    pub component_aliases: HashSet<String>,
    /// Local names of the `translate` named import.
    pub function_aliases: HashSet<String>,
}

impl Visit for AliasResolver {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        if node.type_only || node.src.value.as_str() != Some(TRANSLATE_MODULE) {
            return;
        }

        for specifier in &node.specifiers {
            match specifier {
                ImportSpecifier::Default(default) => {
                    self.component_aliases.insert(default.local.sym.to_string());
                }
                ImportSpecifier::Named(named) => {
                    if named.is_type_only {
                        continue;
                    }
                    let local_name = named.local.sym.to_string();
                    let imported_name = named
                        .imported
                        .as_ref()
                        .map(|i| match i {
                            ModuleExportName::Ident(ident) => ident.sym.to_string(),
                            ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
                        })
                        .unwrap_or_else(|| local_name.clone());

                    if imported_name == TRANSLATE_FUNCTION {
                        self.function_aliases.insert(local_name);
                    }
                }
                ImportSpecifier::Namespace(_) => {}
            }
        }
    }
}
