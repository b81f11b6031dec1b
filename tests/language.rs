use std::{cell::RefCell, fs, rc::Rc};

use ryx::{
    interpreter::{environment::Environment, value::Value},
    run,
};

fn eval_source(src: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let env = Environment::global();
    run(src, &env)
}

fn assert_value(src: &str, expected: &Value) {
    match eval_source(src) {
        Ok(value) => assert_eq!(&value, expected, "Script: {src}"),
        Err(e) => panic!("Script failed: {e}\nScript: {src}"),
    }
}

fn assert_number(src: &str, expected: f64) {
    assert_value(src, &Value::Number(expected));
}

fn assert_failure(src: &str) {
    if eval_source(src).is_ok() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
}

#[test]
fn basic_arithmetic() {
    assert_number("1 + 2", 3.0);
    assert_number("8 - 5", 3.0);
    assert_number("7 * 9", 63.0);
    assert_number("10 / 4", 2.5);
    assert_number("7 % 3", 1.0);
}

#[test]
fn operator_precedence_and_grouping() {
    assert_number("2 + 3 * 4", 14.0);
    assert_number("(2 + 3) * 4", 20.0);
    assert_number("10 - 2 - 3", 5.0);
    assert_number("100 / 10 / 2", 5.0);
    assert_number("1 + 10 % 3", 2.0);
}

#[test]
fn division_follows_float_semantics() {
    assert_number("1 / 0", f64::INFINITY);
    assert_number("0 - 1 / 0", f64::NEG_INFINITY);
}

#[test]
fn declarations_and_lookup() {
    assert_number("val x = 5; x", 5.0);
    assert_number("cval limit = 100; limit / 4", 25.0);
    assert_value("val x; x", &Value::Null);
    assert_number("val a = 2; val b = 3; a * b", 6.0);
}

#[test]
fn empty_program_yields_null() {
    assert_value("", &Value::Null);
    assert_value(";;;", &Value::Null);
}

#[test]
fn builtin_constants() {
    assert_value("true", &Value::Bool(true));
    assert_value("false", &Value::Bool(false));
    assert_value("null", &Value::Null);
}

#[test]
fn assignment_updates_bindings() {
    assert_number("val a = 1; a = 2; a", 2.0);
    assert_number("val a = 0; val b = 0; a = b = 7; a + b", 14.0);
    assert_number("val n = 1; n = n + 1; n = n * 10; n", 20.0);
}

#[test]
fn constant_reassignment_is_error() {
    assert_failure("cval x = 5; x = 6");
    assert_failure("true = false");
    assert_failure("null = 1");
}

#[test]
fn redeclaration_in_same_scope_is_error() {
    assert_failure("val x = 1; val x = 2;");
    assert_failure("cval x = 1; val x = 2;");
    assert_failure("val true = 1;");
}

#[test]
fn constant_requires_initializer() {
    assert_failure("cval x;");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("undeclared");
    assert_failure("val a = missing + 1;");
    assert_failure("ghost = 1");
}

#[test]
fn invalid_assignment_target_is_error() {
    assert_failure("1 = 2");
    assert_failure("a + b = 3");
}

#[test]
fn non_numeric_operands_yield_null() {
    assert_value("null + 1", &Value::Null);
    assert_value("true * 2", &Value::Null);
    assert_value("val x; x - 1", &Value::Null);
    assert_value("val o = { a: 1 }; o + 1", &Value::Null);
    // Null propagates through larger expressions.
    assert_value("2 * (null + 1)", &Value::Null);
}

#[test]
fn object_literals() {
    assert_value("{}", &Value::Object(Vec::new()));
    assert_value("{ a: 1, b: 2 + 3 }",
                 &Value::Object(vec![("a".to_string(), Value::Number(1.0)),
                                     ("b".to_string(), Value::Number(5.0))]));
}

#[test]
fn object_shorthand_reads_the_environment() {
    assert_value("val a = 4; { a }",
                 &Value::Object(vec![("a".to_string(), Value::Number(4.0))]));
    assert_value("val a = 1; val b = 2; { a, b, c: a + b }",
                 &Value::Object(vec![("a".to_string(), Value::Number(1.0)),
                                     ("b".to_string(), Value::Number(2.0)),
                                     ("c".to_string(), Value::Number(3.0))]));
    assert_failure("{ missing }");
}

#[test]
fn duplicate_object_keys_keep_first_position() {
    assert_value("{ a: 1, b: 2, a: 3 }",
                 &Value::Object(vec![("a".to_string(), Value::Number(3.0)),
                                     ("b".to_string(), Value::Number(2.0))]));
}

#[test]
fn nested_objects() {
    assert_value("{ point: { x: 1, y: 2 } }",
                 &Value::Object(vec![("point".to_string(),
                                      Value::Object(vec![("x".to_string(), Value::Number(1.0)),
                                                         ("y".to_string(), Value::Number(2.0))]))]));
}

#[test]
fn member_access_is_not_evaluated_yet() {
    assert_failure("val point = { x: 1 }; point.x");
    assert_failure("val point = { x: 1 }; point[0]");
}

#[test]
fn calls_are_not_evaluated_yet() {
    assert_failure("val f = 1; f(2)");
    assert_failure("val f = 1; f()(3)");
}

#[test]
fn environment_persists_across_runs() {
    let env = Environment::global();

    run("val total = 1;", &env).unwrap();
    assert_eq!(run("total = total + 9; total", &env).unwrap(),
               Value::Number(10.0));
    assert!(run("val total = 2;", &env).is_err());
}

#[test]
fn failed_reassignment_leaves_the_constant_intact() {
    let env = Environment::global();

    run("cval x = 5;", &env).unwrap();
    assert!(run("x = 6", &env).is_err());
    assert_eq!(run("x", &env).unwrap(), Value::Number(5.0));
}

#[test]
fn child_scopes_shadow_and_write_through() {
    let parent = Environment::global();
    parent.borrow_mut()
          .declare("a", Value::Number(1.0), false, 1)
          .unwrap();

    // Shadowing an outer binding is allowed.
    let child = Rc::new(RefCell::new(Environment::with_parent(Rc::clone(&parent))));
    child.borrow_mut()
         .declare("a", Value::Number(2.0), false, 2)
         .unwrap();
    assert_eq!(Environment::lookup(&child, "a", 3).unwrap(),
               Value::Number(2.0));
    assert_eq!(Environment::lookup(&parent, "a", 3).unwrap(),
               Value::Number(1.0));

    // Assignment reaches the scope that owns the binding.
    let inner = Rc::new(RefCell::new(Environment::with_parent(Rc::clone(&parent))));
    Environment::assign(&inner, "a", Value::Number(5.0), 4).unwrap();
    assert_eq!(Environment::lookup(&parent, "a", 5).unwrap(),
               Value::Number(5.0));
}

#[test]
fn value_display_formats() {
    assert_eq!(eval_source("2 + 12").unwrap().to_string(), "14");
    assert_eq!(eval_source("10 / 4").unwrap().to_string(), "2.5");
    assert_eq!(eval_source("null").unwrap().to_string(), "null");
    assert_eq!(eval_source("{ a: 1, b: true }").unwrap().to_string(),
               "{ a: 1, b: true }");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.ryx").expect("missing file");
    assert_value(&contents,
                 &Value::Object(vec![("total".to_string(), Value::Number(16.0)),
                                     ("doubled".to_string(), Value::Number(32.0)),
                                     ("flag".to_string(), Value::Bool(true))]));
}
