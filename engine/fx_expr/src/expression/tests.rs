#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use fx_number::ExpressionNumber;
use pretty_assertions::assert_eq;

fn num(value: f64) -> Expression {
    Expression::number(ExpressionNumber::Binary(value))
}

// === Arity ===

#[test]
fn set_children_wrong_count_is_an_arity_error() {
    let add = Expression::add(num(1.0), num(2.0));
    assert_eq!(
        add.set_children([num(1.0)]).unwrap_err(),
        ExprError::Arity {
            expression: "AddExpression",
            expected: Arity::Exact(2),
            actual: 1,
        }
    );
    assert!(Expression::boolean(true).set_children([num(1.0)]).is_err());
    assert!(Expression::negate(num(1.0)).set_children(Vec::<Expression>::new()).is_err());
}

#[test]
fn call_needs_a_callable() {
    let call = Expression::call(num(1.0), [num(2.0)]);
    assert_eq!(
        call.set_children(Vec::<Expression>::new()).unwrap_err(),
        ExprError::Arity {
            expression: "CallExpression",
            expected: Arity::AtLeast(1),
            actual: 0,
        }
    );
    assert_eq!(call.set_children([num(1.0)]).unwrap().children().len(), 1);
}

#[test]
fn list_accepts_any_count() {
    let list = Expression::list([num(1.0)]);
    assert!(list.set_children(Vec::<Expression>::new()).unwrap().children().is_empty());
    assert_eq!(list.set_children([num(1.0), num(2.0), num(3.0)]).unwrap().children().len(), 3);
}

#[test]
fn new_checks_arity() {
    let kind = ExpressionKind::Binary(BinaryOperator::Power);
    assert!(Expression::new(kind.clone(), [num(2.0)]).is_err());
    assert_eq!(
        Expression::new(kind, [num(2.0), num(3.0)]).unwrap(),
        Expression::power(num(2.0), num(3.0))
    );
}

// === Identity and equality ===

#[test]
fn same_children_return_same_instance() {
    let node = Expression::add(num(1.0), num(2.0));
    let same = node.set_children(node.children().to_vec()).unwrap();
    assert!(same.ptr_eq(&node));

    // Equal but distinct children still keep the instance.
    let equal = node.set_children([num(1.0), num(2.0)]).unwrap();
    assert!(equal.ptr_eq(&node));
}

#[test]
fn change_then_restore_is_equal() {
    let node = Expression::add(num(1.0), num(2.0));
    let original = node.children().to_vec();
    let changed = node.set_children([num(3.0), num(4.0)]).unwrap();
    assert_ne!(changed, node);
    assert_eq!(node.children()[0], num(1.0));

    let restored = changed.set_children(original).unwrap();
    assert_eq!(restored, node);
    assert!(!restored.ptr_eq(&node));
}

#[test]
fn equality_is_structural() {
    assert_eq!(Expression::text("x"), Expression::text("x"));
    assert_ne!(Expression::text("x"), Expression::text("y"));
    assert_ne!(
        Expression::add(num(1.0), num(2.0)),
        Expression::subtract(num(1.0), num(2.0))
    );
    assert_ne!(Expression::boolean(true), Expression::text("true"));
}

#[test]
fn shared_subtrees_need_no_parent() {
    let shared = num(1.0);
    let a = Expression::negate(shared.clone());
    let b = Expression::add(shared.clone(), shared.clone());
    assert!(a.children()[0].ptr_eq(&b.children()[1]));
}

// === Edits ===

#[test]
fn replace_child_prefers_identity() {
    let first = num(1.0);
    let second = num(1.0);
    let node = Expression::add(first.clone(), second.clone());
    let replaced = node.replace_child(&second, num(9.0)).unwrap();
    assert_eq!(replaced, Expression::add(num(1.0), num(9.0)));
}

#[test]
fn replace_child_falls_back_to_equality() {
    let node = Expression::add(num(1.0), num(2.0));
    let replaced = node.replace_child(&num(2.0), num(5.0)).unwrap();
    assert_eq!(replaced, Expression::add(num(1.0), num(5.0)));
    assert_eq!(node, Expression::add(num(1.0), num(2.0)));
}

#[test]
fn replace_missing_child() {
    let node = Expression::add(num(1.0), num(2.0));
    assert_eq!(
        node.replace_child(&num(7.0), num(5.0)).unwrap_err(),
        ExprError::ChildNotFound {
            expression: "AddExpression"
        }
    );
}

// === Names ===

#[test]
fn display_names_and_suffixes() {
    let name = FunctionExpressionName::with("sum").unwrap();
    assert_eq!(Expression::named_function(name).to_string(), "NamedFunctionExpression sum");
    assert_eq!(
        Expression::reference(ExpressionReference::new("A1")).to_string(),
        "ReferenceExpression A1"
    );
    assert_eq!(
        Expression::greater_than_equals(num(1.0), num(2.0)).to_string(),
        "GreaterThanEqualsExpression"
    );
    assert_eq!(Expression::xor(num(1.0), num(2.0)).display_name(), "XorExpression");
    assert_eq!(Expression::null().suffix().as_deref(), Some("null"));
}

#[test]
fn debug_shows_structure() {
    let expr = Expression::negate(Expression::text("a"));
    assert_eq!(format!("{expr:?}"), r#"NegateExpression [ValueExpression "a"]"#);
}

#[test]
fn expressions_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expression>();
}
