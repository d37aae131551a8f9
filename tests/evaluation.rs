use std::cell::{Cell, RefCell};

use expsolver::{
    ast::{BinaryOperator, ComparisonOperator, Expr, MAX_ARGUMENTS},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, Strictness},
        resolver::Resolution,
    },
    solve,
};
use proptest::prelude::*;

fn value_of(src: &str) -> f64 {
    solve(src).unwrap_or_else(|| panic!("{src} failed to parse"))
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(value_of("2+3*4"), 14.0);
    assert_eq!(value_of("(2+3)*4"), 20.0);
    assert_eq!(value_of("8-2-1"), 5.0);
    assert_eq!(value_of("1+2*3-4/2"), 5.0);
    assert_eq!(value_of("-4+-1"), -5.0);
}

#[test]
fn shifts_truncate_their_operands() {
    assert_eq!(value_of("1<<4"), 16.0);
    assert_eq!(value_of("8>>2"), 2.0);
    assert_eq!(value_of("1<<2+1"), 8.0);
    assert_eq!(value_of("5.9<<1"), 10.0);
    assert_eq!(value_of("-8>>1"), -4.0);
    assert_eq!(value_of("$ff>>4"), 15.0);
}

#[test]
fn division_follows_floating_point() {
    assert_eq!(value_of("1/4"), 0.25);
    assert_eq!(value_of("1/0"), f64::INFINITY);
    assert!(value_of("0/0").is_nan());
}

#[test]
fn comparisons_truncate_the_right_operand() {
    assert_eq!(value_of("4>1"), 1.0);
    assert_eq!(value_of("4<1"), 0.0);
    assert_eq!(value_of("1.5>1.9"), 1.0);
    assert_eq!(value_of("1<1.9"), 0.0);
    assert_eq!(value_of("1<<3>7"), 1.0);
}

#[test]
fn hand_built_equality_truncates_both_sides() {
    let context = Context::new();
    let equal = Expr::comparison(ComparisonOperator::Equal, Expr::Constant(2.7), Expr::Constant(2.1));
    let not_equal =
        Expr::comparison(ComparisonOperator::NotEqual, Expr::Constant(2.7), Expr::Constant(3.0));
    assert_eq!(context.eval(&equal), Ok(1.0));
    assert_eq!(context.eval(&not_equal), Ok(1.0));
}

#[test]
fn conditional_selects_on_strictly_positive() {
    assert_eq!(value_of("4<1?4*2+1:3*2+1"), 7.0);
    assert_eq!(value_of("4>1?4*2+1:3*2+1"), 9.0);
    assert_eq!(value_of("0?1:2"), 2.0);
    assert_eq!(value_of("-1?1:2"), 2.0);
    assert_eq!(value_of("0.5?1:2"), 1.0);
    assert_eq!(value_of("0/0?1:2"), 2.0);
}

#[test]
fn incomplete_conditionals_do_not_solve() {
    assert_eq!(solve("4<1?3*2+1"), None);
    assert_eq!(solve("4<1?"), None);
}

#[test]
fn only_the_selected_branch_is_evaluated() {
    let seen = RefCell::new(Vec::new());
    let variables = |name: &str| {
        seen.borrow_mut().push(name.to_string());
        Resolution::found(1.0)
    };
    let context = Context::new().with_variables(&variables);

    let tree = Expr::conditional(Expr::variable("c"), Expr::variable("a"), Expr::variable("b"));
    assert_eq!(context.eval(&tree), Ok(1.0));
    assert_eq!(*seen.borrow(), ["c", "a"]);
}

#[test]
fn arguments_are_evaluated_left_to_right_before_the_call() {
    let log = RefCell::new(Vec::new());
    let variables = |name: &str| {
        log.borrow_mut().push(name.to_string());
        Resolution::found(1.0)
    };
    let functions = |name: &str, arguments: &[f64]| {
        log.borrow_mut().push(format!("{name}/{}", arguments.len()));
        Resolution::found(arguments.iter().sum())
    };
    let context = Context::new().with_variables(&variables).with_functions(&functions);

    let tree = Expr::call("f", vec![Expr::variable("a"), Expr::variable("b"), Expr::variable("c")]);
    assert_eq!(context.eval(&tree), Ok(3.0));
    assert_eq!(*log.borrow(), ["a", "b", "c", "f/3"]);
}

#[test]
fn calls_receive_exactly_their_arguments() {
    let functions = |_: &str, arguments: &[f64]| Resolution::found(arguments.len() as f64);
    let context = Context::new().with_functions(&functions);

    assert_eq!(context.eval(&Expr::call("f", vec![])), Ok(0.0));
    let full = Expr::call("f", vec![Expr::Constant(1.0); MAX_ARGUMENTS]);
    assert_eq!(context.eval(&full), Ok(32.0));
}

#[test]
fn oversized_hand_built_calls_are_rejected() {
    let functions = |_: &str, _: &[f64]| Resolution::found(0.0);
    let context = Context::new().with_functions(&functions);

    let tree = Expr::call("f", vec![Expr::Constant(1.0); MAX_ARGUMENTS + 1]);
    assert_eq!(context.eval(&tree),
               Err(RuntimeError::TooManyArguments { name:  "f".to_string(),
                                                    count: MAX_ARGUMENTS + 1, }));
}

#[test]
fn variables_are_resolved_on_every_evaluation() {
    let calls = Cell::new(0);
    let variables = |_: &str| {
        calls.set(calls.get() + 1);
        Resolution::found(f64::from(calls.get()))
    };
    let context = Context::new().with_variables(&variables);

    let tree = Expr::variable("t");
    assert_eq!(context.eval(&tree), Ok(1.0));
    assert_eq!(context.eval(&tree), Ok(2.0));
}

#[test]
fn lenient_mode_uses_the_value_of_a_failed_resolution() {
    let variables = |_: &str| Resolution::failed(7.0);
    let functions = |_: &str, _: &[f64]| Resolution::failed(3.0);
    let context = Context::new().with_variables(&variables).with_functions(&functions);

    let tree = Expr::binary(BinaryOperator::Add,
                            Expr::variable("t"),
                            Expr::call("g", vec![Expr::Constant(1.0)]));
    assert_eq!(context.eval(&tree), Ok(10.0));
}

#[test]
fn strict_mode_stops_at_the_first_failed_resolution() {
    let variables = |name: &str| {
        if name == "t" { Resolution::found(4.0) } else { Resolution::failed(7.0) }
    };
    let functions = |_: &str, _: &[f64]| Resolution::failed(0.0);
    let context = Context::new().with_variables(&variables)
                                .with_functions(&functions)
                                .with_strictness(Strictness::Strict);

    assert_eq!(context.eval(&Expr::variable("t")), Ok(4.0));
    assert_eq!(context.eval(&Expr::variable("u")),
               Err(RuntimeError::UnresolvedVariable { name:  "u".to_string(),
                                                      value: 7.0, }));

    let call = Expr::call("g", vec![Expr::Constant(1.0), Expr::variable("t")]);
    assert_eq!(context.eval(&call),
               Err(RuntimeError::FunctionFailed { name:      "g".to_string(),
                                                  arguments: vec![1.0, 4.0], }));
}

#[test]
fn missing_resolvers_depend_on_strictness() {
    let tree = Expr::binary(BinaryOperator::Add, Expr::variable("t"), Expr::Constant(1.0));
    assert_eq!(Context::new().eval(&tree), Ok(1.0));

    let strict = Context::new().with_strictness(Strictness::Strict);
    assert!(strict.is_strict());
    assert_eq!(strict.eval(&tree),
               Err(RuntimeError::MissingResolver { name: "t".to_string() }));
}

#[test]
fn runtime_errors_render_a_message() {
    let error = RuntimeError::FunctionFailed { name:      "g".to_string(),
                                               arguments: vec![1.0], };
    assert!(error.to_string().contains("'g'"));
    assert!(RuntimeError::NotPrepared.to_string().contains("prepared"));
}

proptest! {
    #[test]
    fn comparisons_yield_exactly_zero_or_one(a in -1000i32..1000, b in -1000i32..1000) {
        let greater = value_of(&format!("{a}>{b}"));
        let less = value_of(&format!("{a}<{b}"));
        prop_assert_eq!(greater, if a > b { 1.0 } else { 0.0 });
        prop_assert_eq!(less, if a < b { 1.0 } else { 0.0 });
    }

    #[test]
    fn integer_arithmetic_matches_precedence(a in 0i32..1000, b in 0i32..1000, c in 0i32..1000) {
        prop_assert_eq!(value_of(&format!("{a}+{b}*{c}")), f64::from(a + b * c));
        prop_assert_eq!(value_of(&format!("({a}+{b})*{c}")), f64::from((a + b) * c));
    }

    #[test]
    fn shifts_match_integer_shifts(a in 0i32..1024, s in 0u32..16) {
        prop_assert_eq!(value_of(&format!("{a}<<{s}")), f64::from(a << s));
        prop_assert_eq!(value_of(&format!("{a}>>{s}")), f64::from(a >> s));
    }
}
