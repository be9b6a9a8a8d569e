use indexmap::IndexMap;
use swc_ecma_ast::{
    ArrayLit, BinExpr, BinaryOp, CondExpr, Expr, Lit, ObjectLit, Prop, PropName, PropOrSpread, Tpl,
    UnaryExpr, UnaryOp,
};

use super::StaticValue;
use super::value::format_number;

/// Nesting limit for folded expressions.
///
/// Deeper trees are reported as not confident instead of risking the stack.
const MAX_DEPTH: usize = 128;

/// Result of statically evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// The expression folds to a literal value.
    Confident(StaticValue),
    /// The expression depends on something that is not a literal.
    NotConfident,
}

impl Evaluation {
    pub fn is_confident(&self) -> bool {
        matches!(self, Evaluation::Confident(_))
    }

    pub fn value(self) -> Option<StaticValue> {
        match self {
            Evaluation::Confident(value) => Some(value),
            Evaluation::NotConfident => None,
        }
    }
}

/// Fold an expression to a literal value without executing any code.
///
/// Only a fixed set of node kinds is understood:
/// - string, number, boolean and `null` literals
/// - the globals `undefined`, `NaN` and `Infinity`
/// - binary `+` with JavaScript coercion rules
/// - unary `-`, `+`, `!` and `void`
/// - template literals whose interpolations fold
/// - object and array literals
/// - conditionals with a folding test
/// - parentheses and TypeScript-only wrappers (`as`, `satisfies`, `!`)
///
/// Anything else, including identifiers bound in scope, is not confident.
///
/// # Examples
///
/// ```ignore
/// "a" + "b"               → Confident("ab")
/// `x.${1 + 1}`            → Confident("x.2")
/// { id: "a", message: m } → NotConfident
/// ```
pub fn evaluate(expr: &Expr) -> Evaluation {
    match fold(expr, 0) {
        Some(value) => Evaluation::Confident(value),
        None => Evaluation::NotConfident,
    }
}

fn fold(expr: &Expr, depth: usize) -> Option<StaticValue> {
    if depth > MAX_DEPTH {
        return None;
    }
    let depth = depth + 1;

    match expr {
        Expr::Lit(lit) => fold_lit(lit),
        Expr::Ident(ident) => match ident.sym.as_str() {
            "undefined" => Some(StaticValue::Undefined),
            "NaN" => Some(StaticValue::Num(f64::NAN)),
            "Infinity" => Some(StaticValue::Num(f64::INFINITY)),
            _ => None,
        },
        Expr::Tpl(tpl) => fold_tpl(tpl, depth),
        Expr::Bin(bin) => fold_bin(bin, depth),
        Expr::Unary(unary) => fold_unary(unary, depth),
        Expr::Cond(cond) => fold_cond(cond, depth),
        Expr::Object(obj) => fold_object(obj, depth),
        Expr::Array(arr) => fold_array(arr, depth),
        Expr::Paren(paren) => fold(&paren.expr, depth),
        Expr::TsAs(ts_as) => fold(&ts_as.expr, depth),
        Expr::TsConstAssertion(ts_const) => fold(&ts_const.expr, depth),
        Expr::TsSatisfies(ts_sat) => fold(&ts_sat.expr, depth),
        Expr::TsNonNull(ts_non_null) => fold(&ts_non_null.expr, depth),
        Expr::TsTypeAssertion(ts_assert) => fold(&ts_assert.expr, depth),
        _ => None,
    }
}

fn fold_lit(lit: &Lit) -> Option<StaticValue> {
    match lit {
        Lit::Str(s) => s.value.as_str().map(|v| StaticValue::Str(v.to_string())),
        Lit::Num(n) => Some(StaticValue::Num(n.value)),
        Lit::Bool(b) => Some(StaticValue::Bool(b.value)),
        Lit::Null(_) => Some(StaticValue::Null),
        _ => None,
    }
}

fn fold_tpl(tpl: &Tpl, depth: usize) -> Option<StaticValue> {
    let mut out = String::new();
    for (i, quasi) in tpl.quasis.iter().enumerate() {
        // An invalid escape sequence leaves `cooked` empty
        let cooked = quasi.cooked.as_ref()?.as_str()?;
        out.push_str(cooked);

        if let Some(expr) = tpl.exprs.get(i) {
            let value = fold(expr, depth)?;
            out.push_str(&value.to_string());
        }
    }
    Some(StaticValue::Str(out))
}

fn fold_bin(bin: &BinExpr, depth: usize) -> Option<StaticValue> {
    if bin.op != BinaryOp::Add {
        return None;
    }
    let left = fold(&bin.left, depth)?;
    let right = fold(&bin.right, depth)?;

    if left.concatenates() || right.concatenates() {
        Some(StaticValue::Str(format!("{}{}", left, right)))
    } else {
        Some(StaticValue::Num(left.to_number() + right.to_number()))
    }
}

fn fold_unary(unary: &UnaryExpr, depth: usize) -> Option<StaticValue> {
    let arg = fold(&unary.arg, depth)?;
    match unary.op {
        UnaryOp::Minus => Some(StaticValue::Num(-arg.to_number())),
        UnaryOp::Plus => Some(StaticValue::Num(arg.to_number())),
        UnaryOp::Bang => Some(StaticValue::Bool(!arg.is_truthy())),
        UnaryOp::Void => Some(StaticValue::Undefined),
        _ => None,
    }
}

fn fold_cond(cond: &CondExpr, depth: usize) -> Option<StaticValue> {
    let test = fold(&cond.test, depth)?;
    if test.is_truthy() {
        fold(&cond.cons, depth)
    } else {
        fold(&cond.alt, depth)
    }
}

fn fold_object(obj: &ObjectLit, depth: usize) -> Option<StaticValue> {
    let mut props = IndexMap::new();
    for prop in &obj.props {
        let PropOrSpread::Prop(prop) = prop else {
            return None;
        };
        let Prop::KeyValue(kv) = &**prop else {
            return None;
        };
        let key = fold_prop_name(&kv.key, depth)?;
        let value = fold(&kv.value, depth)?;
        props.insert(key, value);
    }
    Some(StaticValue::Object(props))
}

fn fold_prop_name(name: &PropName, depth: usize) -> Option<String> {
    match name {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|v| v.to_string()),
        PropName::Num(n) => Some(format_number(n.value)),
        PropName::Computed(computed) => fold(&computed.expr, depth).map(|v| v.to_string()),
        _ => None,
    }
}

fn fold_array(arr: &ArrayLit, depth: usize) -> Option<StaticValue> {
    let mut items = Vec::with_capacity(arr.elems.len());
    for elem in &arr.elems {
        match elem {
            None => items.push(StaticValue::Undefined),
            Some(elem) if elem.spread.is_some() => return None,
            Some(elem) => items.push(fold(&elem.expr, depth)?),
        }
    }
    Some(StaticValue::Array(items))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use swc_common::{FileName, SourceMap, sync::Lrc};
    use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

    use super::*;

    fn eval(code: &str) -> Evaluation {
        let source_map: Lrc<SourceMap> = Default::default();
        let source_file =
            source_map.new_source_file(FileName::Anon.into(), code.to_string());
        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
        let expr = parser.parse_expr().unwrap();
        evaluate(&expr)
    }

    fn eval_str(code: &str) -> Option<String> {
        eval(code).value().map(|v| v.to_string())
    }

    #[test]
    fn test_literals() {
        assert_eq!(eval_str(r#""hello""#), Some("hello".to_string()));
        assert_eq!(eval_str("42"), Some("42".to_string()));
        assert_eq!(eval_str("true"), Some("true".to_string()));
        assert_eq!(eval_str("null"), Some("null".to_string()));
        assert_eq!(eval_str("undefined"), Some("undefined".to_string()));
    }

    #[test]
    fn test_string_concatenation() {
        assert_eq!(eval_str(r#""x" + "y""#), Some("xy".to_string()));
        assert_eq!(eval_str(r#""a" + 1 + 2"#), Some("a12".to_string()));
        assert_eq!(eval_str(r#"1 + 2 + "a""#), Some("3a".to_string()));
        assert_eq!(eval_str(r#"("a" + "b") + "c""#), Some("abc".to_string()));
    }

    #[test]
    fn test_templates() {
        assert_eq!(eval_str("`plain`"), Some("plain".to_string()));
        assert_eq!(eval_str("`a.${'b'}.${1 + 1}`"), Some("a.b.2".to_string()));
        assert_eq!(eval("`a.${name}`"), Evaluation::NotConfident);
    }

    #[test]
    fn test_unary_and_conditional() {
        assert_eq!(eval_str("-5"), Some("-5".to_string()));
        assert_eq!(eval_str("!0"), Some("true".to_string()));
        assert_eq!(eval_str("void 0"), Some("undefined".to_string()));
        assert_eq!(eval_str(r#"true ? "yes" : "no""#), Some("yes".to_string()));
        assert_eq!(eval(r#"flag ? "yes" : "no""#), Evaluation::NotConfident);
        assert_eq!(eval("typeof x"), Evaluation::NotConfident);
    }

    #[test]
    fn test_object_literal() {
        let value = eval(r#"{ id: "a.b", "message": "Hi", [`desc` + "ription"]: "greeting" }"#)
            .value()
            .unwrap();
        let props = value.as_object().unwrap();
        assert_eq!(
            props.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["id", "message", "description"]
        );
        assert_eq!(props["message"].as_str(), Some("Hi"));
    }

    #[test]
    fn test_object_with_dynamic_parts_is_not_confident() {
        assert_eq!(eval("{ message }"), Evaluation::NotConfident);
        assert_eq!(eval("{ message: compute() }"), Evaluation::NotConfident);
        assert_eq!(eval("{ ...base, id: 'x' }"), Evaluation::NotConfident);
        assert_eq!(eval("{ get id() { return 'x' } }"), Evaluation::NotConfident);
    }

    #[test]
    fn test_arrays() {
        assert_eq!(eval_str(r#"["a", , 1]"#), Some("a,,1".to_string()));
        assert_eq!(eval("[...items]"), Evaluation::NotConfident);
    }

    #[test]
    fn test_typescript_wrappers() {
        assert_eq!(eval_str(r#"("id" as const)"#), Some("id".to_string()));
        assert_eq!(eval_str(r#"("id" satisfies string)"#), Some("id".to_string()));
        assert_eq!(eval_str(r#"({ id: "x" } as Props).toString"#), None);
    }

    #[test]
    fn test_unsupported_expressions() {
        assert_eq!(eval("computeSomething()"), Evaluation::NotConfident);
        assert_eq!(eval("someVariable"), Evaluation::NotConfident);
        assert_eq!(eval("a.b"), Evaluation::NotConfident);
        assert_eq!(eval(r#""a" - "b""#), Evaluation::NotConfident);
    }

    #[test]
    fn test_deep_nesting_is_bounded() {
        let code = format!("{}\"x\"{}", "(".repeat(500), ")".repeat(500));
        assert_eq!(eval(&code), Evaluation::NotConfident);
    }
}
