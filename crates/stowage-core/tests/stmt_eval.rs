use std_util::prelude::*;
use stowage_core::stmt::{Expr, ExprAnd, Params, Row, Type, Value};

fn row() -> Row {
    [
        ("address_city", Value::from("Berlin")),
        ("address_country_name", Value::Null),
    ]
    .into_iter()
    .collect()
}

fn eval(expr: Expr) -> Value {
    expr.eval(&row(), &Params::new()).unwrap()
}

// ---------------------------------------------------------------------------
// Comparisons
// ---------------------------------------------------------------------------

#[test]
fn eq_column_value() {
    assert_eq!(
        eval(Expr::eq(Expr::column("address_city"), Expr::value("Berlin"))),
        Value::Bool(true)
    );
    assert_eq!(
        eval(Expr::ne(Expr::column("address_city"), Expr::value("Berlin"))),
        Value::Bool(false)
    );
}

#[test]
fn comparison_with_null_is_null() {
    assert_eq!(
        eval(Expr::eq(Expr::column("address_country_name"), Expr::value(Value::Null))),
        Value::Null
    );
    assert_eq!(
        eval(Expr::ne(Expr::column("address_country_name"), Expr::value("Germany"))),
        Value::Null
    );
}

#[test]
fn missing_column_reads_null() {
    assert_eq!(eval(Expr::is_null(Expr::column("not_there"))), Value::Bool(true));
}

#[test]
fn is_null() {
    assert_eq!(
        eval(Expr::is_null(Expr::column("address_country_name"))),
        Value::Bool(true)
    );
    assert_eq!(
        eval(Expr::is_null(Expr::column("address_city"))),
        Value::Bool(false)
    );
}

// ---------------------------------------------------------------------------
// Cast
// ---------------------------------------------------------------------------

#[test]
fn cast_widens_and_narrows_integers() {
    assert_eq!(eval(Expr::cast(Expr::value(7), Type::I64)), Value::I64(7));
    assert_eq!(eval(Expr::cast(Expr::value(7_i64), Type::I32)), Value::I32(7));
    assert_eq!(eval(Expr::cast(Expr::value(Value::Null), Type::I64)), Value::Null);
}

#[test]
fn cast_rejects_out_of_range_and_mismatched_values() {
    let err = assert_err!(Expr::cast(Expr::value(i64::MAX), Type::I32).eval(&row(), &Params::new()));
    assert_eq!(err.to_string(), "cannot convert I64 to I32");

    let err = assert_err!(Expr::cast(Expr::column("address_city"), Type::Bool).eval(&row(), &Params::new()));
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert String to Bool");
}

// ---------------------------------------------------------------------------
// AND
// ---------------------------------------------------------------------------

fn and(operands: Vec<Expr>) -> Expr {
    ExprAnd { operands }.into()
}

#[test]
fn and_false_wins_over_null() {
    let null = Expr::eq(Expr::column("address_country_name"), Expr::value("x"));
    let fals = Expr::eq(Expr::column("address_city"), Expr::value("Paris"));

    assert_eq!(eval(and(vec![null.clone(), fals])), Value::Bool(false));
    assert_eq!(
        eval(and(vec![null, Expr::value(true)])),
        Value::Null
    );
}

#[test]
fn empty_and_is_true() {
    assert_eq!(eval(and(vec![])), Value::Bool(true));
}

#[test]
fn and_flattens() {
    let expr = Expr::and(
        Expr::and(Expr::value(true), Expr::value(true)),
        Expr::value(true),
    );

    let Expr::And(expr_and) = expr else {
        panic!("expected AND");
    };
    assert_eq!(expr_and.operands.len(), 3);
}

#[test]
fn and_requires_bool_operands() {
    let err = assert_err!(and(vec![Expr::value("yes")]).eval(&row(), &Params::new()));
    assert!(err.is_type_conversion());
}

// ---------------------------------------------------------------------------
// Filters and parameters
// ---------------------------------------------------------------------------

#[test]
fn only_true_matches() {
    let params = Params::new();
    let null = Expr::eq(Expr::column("address_country_name"), Expr::value("x"));

    assert!(!null.eval_filter(&row(), &params).unwrap());
    assert!(Expr::value(true).eval_filter(&row(), &params).unwrap());
}

#[test]
fn bound_param() {
    let params = Params::new().bind("city", "Berlin");
    let expr = Expr::eq(Expr::column("address_city"), Expr::param("city"));

    assert!(assert_ok!(expr.eval_filter(&row(), &params)));
}

#[test]
fn unbound_param() {
    let expr = Expr::eq(Expr::column("address_city"), Expr::param("city"));
    let err = assert_err!(expr.eval(&row(), &Params::new()));

    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: parameter `city` is not bound"
    );
}

#[test]
fn unlowered_path() {
    let err = assert_err!(Expr::path("address.city").eval(&row(), &Params::new()));
    assert!(err.is_invalid_statement());
}
