use proptest::prelude::*;
use quill::{
    ast::{BlockStatement, Expr, Program, Statement},
    parse,
};

/// Structural equality that ignores tokens, so trees parsed from differently
/// spelled but equivalent sources compare equal.
fn same_program(a: &Program, b: &Program) -> bool {
    same_statements(&a.statements, &b.statements)
}

fn same_statements(a: &[Statement], b: &[Statement]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| same_statement(a, b))
}

fn same_block(a: &BlockStatement, b: &BlockStatement) -> bool {
    same_statements(&a.statements, &b.statements)
}

fn same_statement(a: &Statement, b: &Statement) -> bool {
    match (a, b) {
        (Statement::Let { name: n1, value: v1, .. }, Statement::Let { name: n2, value: v2, .. }) => {
            n1.value == n2.value && same_shape(v1, v2)
        },
        (Statement::Return { value: v1, .. }, Statement::Return { value: v2, .. }) => {
            match (v1, v2) {
                (Some(v1), Some(v2)) => same_shape(v1, v2),
                (None, None) => true,
                _ => false,
            }
        },
        (Statement::Expression { expr: e1, .. }, Statement::Expression { expr: e2, .. }) => {
            same_shape(e1, e2)
        },
        _ => false,
    }
}

fn same_shape(a: &Expr, b: &Expr) -> bool {
    match (a, b) {
        (Expr::Identifier(a), Expr::Identifier(b)) => a.value == b.value,
        (Expr::Integer { value: a, .. }, Expr::Integer { value: b, .. }) => a == b,
        (Expr::Boolean { value: a, .. }, Expr::Boolean { value: b, .. }) => a == b,
        (Expr::Prefix { op: o1, right: r1, .. }, Expr::Prefix { op: o2, right: r2, .. }) => {
            o1 == o2 && same_shape(r1, r2)
        },
        (Expr::Infix { left: l1,
                       op: o1,
                       right: r1,
                       .. },
         Expr::Infix { left: l2,
                       op: o2,
                       right: r2,
                       .. }) => o1 == o2 && same_shape(l1, l2) && same_shape(r1, r2),
        (Expr::If { condition: c1,
                    consequence: t1,
                    alternative: e1,
                    .. },
         Expr::If { condition: c2,
                    consequence: t2,
                    alternative: e2,
                    .. }) => {
            same_shape(c1, c2)
            && same_block(t1, t2)
            && match (e1, e2) {
                (Some(e1), Some(e2)) => same_block(e1, e2),
                (None, None) => true,
                _ => false,
            }
        },
        (Expr::Function { parameters: p1, body: b1, .. },
         Expr::Function { parameters: p2, body: b2, .. }) => {
            p1.len() == p2.len()
            && p1.iter().zip(p2.iter()).all(|(a, b)| a.value == b.value)
            && same_block(b1, b2)
        },
        (Expr::Call { function: f1, arguments: a1, .. },
         Expr::Call { function: f2, arguments: a2, .. }) => {
            same_shape(f1, f2)
            && a1.len() == a2.len()
            && a1.iter().zip(a2).all(|(a, b)| same_shape(a, b))
        },
        _ => false,
    }
}

fn assert_round_trips(source: &str) {
    let (first, errors) = parse(source);
    assert!(errors.is_empty(), "{source:?} failed to parse: {errors:?}");
    let canonical = first.to_string();
    let (second, errors) = parse(&canonical);
    assert!(errors.is_empty(), "{canonical:?} failed to parse: {errors:?}");

    assert!(same_program(&first, &second), "{source:?} reparsed from {canonical:?} as {second:?}");
}

#[test]
fn grouping_and_spacing_do_not_change_the_tree() {
    assert_round_trips("a + b");
    assert_round_trips("(fn(x){x})(3)");
    assert_round_trips("let f = fn(a, b) { return a * -b; }; f(1, 2) == 3");
    assert_round_trips("if (!x) { return; } else { 1 - (2 - 3) }");
    assert_round_trips("a; b(c)");
}

#[test]
fn structurally_different_trees_are_told_apart() {
    let (left, _) = parse("(a + b) * c");
    let (right, _) = parse("a + b * c");
    let (call, _) = parse("f(1)");
    let (other_call, _) = parse("f(2)");

    assert!(!same_program(&left, &right));
    assert!(!same_program(&call, &other_call));
    assert!(same_program(&left, &parse("((a + b) * c)").0));
}

fn identifier() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "x", "foo", "add"]).prop_map(String::from)
}

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![identifier(),
                           (0u32..1000).prop_map(|n| n.to_string()),
                           any::<bool>().prop_map(|b| b.to_string())];

    leaf.prop_recursive(4, 48, 3, |inner| {
            let prefix = (prop::sample::select(vec!["!", "-"]), inner.clone());
            let infix = (inner.clone(),
                         prop::sample::select(vec!["+", "-", "*", "/", "==", "!=", "<", ">"]),
                         inner.clone());
            let call = (identifier(), prop::collection::vec(inner.clone(), 0..3));
            let branch = (inner.clone(), inner.clone(), inner.clone());
            let function = (prop::collection::vec(identifier(), 0..3), inner.clone());

            prop_oneof![prefix.prop_map(|(op, e)| format!("{op}{e}")),
                        infix.prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                        inner.prop_map(|e| format!("({e})")),
                        call.prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
                        branch.prop_map(|(c, t, e)| {
                                  format!("if ({c}) {{ {t} }} else {{ {e} }}")
                              }),
                        function.prop_map(|(params, body)| {
                                    format!("fn({}) {{ return {body}; }}", params.join(", "))
                                })]
        })
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![(identifier(), expression()).prop_map(|(name, e)| format!("let {name} = {e};")),
                expression().prop_map(|e| format!("return {e};")),
                Just("return;".to_string()),
                expression().prop_map(|e| format!("{e};"))]
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(statement(), 0..4).prop_map(|statements| statements.join("\n"))
}

proptest! {
    #[test]
    fn printed_programs_reparse_to_the_same_tree(source in program()) {
        let (first, errors) = parse(&source);
        prop_assert!(errors.is_empty(), "{source:?} failed to parse: {errors:?}");

        let canonical = first.to_string();
        let (second, errors) = parse(&canonical);
        prop_assert!(errors.is_empty(), "{canonical:?} failed to parse: {errors:?}");
        prop_assert!(same_program(&first, &second),
                     "{source:?} reparsed from {canonical:?} as {second:?}");
        prop_assert_eq!(second.to_string(), canonical);
    }
}
