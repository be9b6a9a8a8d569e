//! Component markers: `<Translate id="..." description="...">text</Translate>`.

use swc_ecma_ast::{
    JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement, JSXElementChild, JSXExpr,
};

use super::MarkerExtractor;
use crate::core::data::{DiagnosticKind, TranslationEntry};
use crate::core::evaluate::{Evaluation, StaticValue, evaluate};
use crate::utils::normalize_whitespace;

impl MarkerExtractor<'_> {
    pub(super) fn extract_component(&mut self, node: &JSXElement, marker: &str) {
        let id = self.static_prop(node, "id", marker);
        let description = self
            .static_prop(node, "description", marker)
            .filter(|d| !d.is_empty());

        let children: Vec<&JSXElementChild> = node
            .children
            .iter()
            .filter(|child| !is_insignificant_child(child))
            .collect();

        let message = match children.as_slice() {
            [] => {
                match id.filter(|id| !id.is_empty()) {
                    Some(id) => {
                        let entry =
                            TranslationEntry::new(id.clone(), id).with_description(description);
                        self.emit(entry, marker, node.span);
                    }
                    None => self.report(DiagnosticKind::MissingId, marker, node.span),
                }
                return;
            }
            [child] => static_child_message(child),
            _ => None,
        };

        let Some(message) = message else {
            self.report(DiagnosticKind::NonStaticContent, marker, node.span);
            return;
        };

        let key = id.unwrap_or_else(|| message.clone());
        let entry = TranslationEntry::new(key, message).with_description(description);
        self.emit(entry, marker, node.span);
    }

    /// Read an optional attribute that must fold to a string.
    ///
    /// A missing attribute is `None`; a present but non-static one is
    /// reported and also `None`.
    fn static_prop(&mut self, node: &JSXElement, prop: &str, marker: &str) -> Option<String> {
        let attr = node.opening.attrs.iter().find_map(|attr| match attr {
            JSXAttrOrSpread::JSXAttr(attr)
                if matches!(&attr.name, JSXAttrName::Ident(name) if name.sym == prop) =>
            {
                Some(attr)
            }
            _ => None,
        })?;

        match evaluate_attr_value(attr.value.as_ref()) {
            Evaluation::Confident(StaticValue::Str(value)) => Some(value),
            _ => {
                self.report(
                    DiagnosticKind::InvalidProp {
                        prop: prop.to_string(),
                    },
                    marker,
                    node.span,
                );
                None
            }
        }
    }
}

fn evaluate_attr_value(value: Option<&JSXAttrValue>) -> Evaluation {
    match value {
        Some(JSXAttrValue::Str(s)) => match s.value.as_str() {
            Some(v) => Evaluation::Confident(StaticValue::Str(v.to_string())),
            None => Evaluation::NotConfident,
        },
        Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
            JSXExpr::Expr(expr) => evaluate(expr),
            JSXExpr::JSXEmptyExpr(_) => Evaluation::NotConfident,
        },
        // `<Translate id>` or an element as value
        _ => Evaluation::NotConfident,
    }
}

/// Children that carry no content: whitespace-only text produced by
/// formatting, and `{/* comments */}`.
fn is_insignificant_child(child: &JSXElementChild) -> bool {
    match child {
        JSXElementChild::JSXText(text) => text.value.trim().is_empty(),
        JSXElementChild::JSXExprContainer(container) => {
            matches!(container.expr, JSXExpr::JSXEmptyExpr(_))
        }
        _ => false,
    }
}

/// Message of the single meaningful child, if it is static.
fn static_child_message(child: &JSXElementChild) -> Option<String> {
    match child {
        JSXElementChild::JSXText(text) => Some(normalize_whitespace(&text.value)),
        JSXElementChild::JSXExprContainer(container) => match &container.expr {
            JSXExpr::Expr(expr) => evaluate(expr).value().map(|v| v.to_string()),
            JSXExpr::JSXEmptyExpr(_) => None,
        },
        _ => None,
    }
}
