//! Function markers: `translate({ message, id, description }, values)`.

use swc_ecma_ast::CallExpr;

use super::MarkerExtractor;
use crate::core::data::{DiagnosticKind, TranslationEntry};
use crate::core::evaluate::{Evaluation, StaticValue, evaluate};

impl MarkerExtractor<'_> {
    pub(super) fn extract_function(&mut self, node: &CallExpr, marker: &str) {
        let count = node.args.len();
        if !(1..=2).contains(&count) {
            self.report(DiagnosticKind::InvalidArity { count }, marker, node.span);
            return;
        }

        // The second argument holds interpolation values and is not extracted
        let first = &node.args[0];
        let evaluated = if first.spread.is_some() {
            Evaluation::NotConfident
        } else {
            evaluate(&first.expr)
        };

        let Some(StaticValue::Object(props)) = evaluated.value() else {
            self.report(DiagnosticKind::NonStaticArgument, marker, node.span);
            return;
        };

        let field = |name: &str| props.get(name).filter(|v| !v.is_nullish());
        let id = field("id");
        let message = field("message");

        let (key, message) = match (id, message) {
            (Some(id), Some(message)) => (id.to_string(), message.to_string()),
            (Some(id), None) => (id.to_string(), id.to_string()),
            (None, Some(message)) => (message.to_string(), message.to_string()),
            (None, None) => {
                self.report(DiagnosticKind::EmptyKey, marker, node.span);
                return;
            }
        };

        let description = props
            .get("description")
            .filter(|d| d.is_truthy())
            .map(|d| d.to_string());

        let entry = TranslationEntry::new(key, message).with_description(description);
        self.emit(entry, marker, node.span);
    }
}
