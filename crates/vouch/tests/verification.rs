//! End-to-end verification of step-style checks.

use std::sync::Arc;

use vouch::prelude::*;
use vouch::{CheckStatus, OutcomeSummary, PendingStrategy, VerificationConfig};
use vouch_test::{Circle, Shape, Square, Stack, Tag};

fn given_a_stack_with(items: &[&str]) -> Stack {
    let mut stack = Stack::with_capacity(4);
    for item in items {
        stack.push(*item);
    }
    stack
}

#[test]
fn test_labelled_failure_message_is_exact() {
    let failure = ensure_that_with(&3, integer_equal_to(5), "count").unwrap_err();
    assert_eq!(
        failure.message(),
        "[count] Expected: integer type equal to 5\nbut got:  3"
    );
}

#[test]
fn test_stack_scenario_passes() {
    let mut stack = given_a_stack_with(&["one", "two"]);

    let step = || -> CheckResult {
        ensure_that_with(&stack.len(), integer_equal_to(2), "size")?;
        ensure_value_with(stack.is_empty(), bool_equal_to(false), "empty")?;
        ensure_that(&stack.peek(), equal_to(Some(&"two".to_string())))?;
        Ok(())
    };
    assert!(step().is_ok());

    assert_eq!(stack.pop().as_deref(), Some("two"));
    assert!(ensure_that(&stack.len(), integer_equal_to(1_u64)).is_ok());
}

#[test]
fn test_stack_size_checked_against_item_count() {
    let items = ["a", "b", "c"];
    let stack = given_a_stack_with(&items);

    assert!(ensure_that(&stack.len(), integer_equal_to(items.len())).is_ok());

    let failure = ensure_value_with(stack.len() as u8, integer_equal_to(items.len() + 1), "size")
        .unwrap_err();
    assert_eq!(
        failure.message(),
        "[size] Expected: integer type equal to 4\nbut got:  3"
    );
}

#[test]
fn test_peek_returns_stored_instance() {
    let stack = given_a_stack_with(&["top"]);
    let peeked = stack.peek().unwrap();
    let copy = peeked.clone();

    assert!(ensure_that(peeked, same_instance_as(stack.peek().unwrap())).is_ok());

    let failure = ensure_that(&copy, same_instance_as(peeked)).unwrap_err();
    assert_eq!(
        failure.message(),
        "Expected: same instance as <\"top\">\nbut got:  \"top\""
    );
}

#[test]
fn test_full_stack_rejects_push() {
    let mut stack = given_a_stack_with(&["a", "b", "c", "d"]);
    let pushed = stack.push("e");

    let failure = ensure_condition_with(pushed, "push onto full stack").unwrap_err();
    assert_eq!(
        failure.message(),
        "push onto full stack: expected condition was not met"
    );
    assert!(ensure_condition(!pushed).is_ok());
}

#[test]
fn test_shapes_are_members_of_their_declared_supertype() {
    let circle = Circle::new(1.0);
    let square = Square::new(2.0);
    let tag = Tag("round".to_string());

    assert!(ensure_that(&circle, is_a::<dyn Shape>()).is_ok());
    assert!(ensure_that(&square, a::<dyn Shape>()).is_ok());
    assert!(ensure_that(&circle, is_a::<Circle>()).is_ok());
    assert!(ensure_that(&circle, not(is_a::<Square>())).is_ok());

    let failure = ensure_that(&tag, is_a::<dyn Shape>()).unwrap_err();
    assert!(failure
        .expected()
        .unwrap()
        .starts_with("object of type dyn "));
    assert_eq!(failure.actual(), Some("Tag(\"round\")"));
}

#[test]
fn test_heterogeneous_shapes_checked_through_trait_objects() {
    let shapes: Vec<Box<dyn Instance>> = vec![
        Box::new(Circle::new(1.0)),
        Box::new(Square::new(1.0)),
        Box::new(Tag("x".to_string())),
    ];

    let statuses: Vec<bool> = shapes
        .iter()
        .map(|s| is_a::<dyn Shape>().matches(&**s))
        .collect();
    assert_eq!(statuses, vec![true, true, false]);
}

#[test]
fn test_area_within_tolerance() {
    let circle = Circle::new(1.0);
    assert!(ensure_value(circle.area(), close_to(3.1416, 0.0001)).is_ok());

    let failure = ensure_value(Square::new(2.0).area(), float_equal_to(4.5)).unwrap_err();
    assert_eq!(
        failure.message(),
        "Expected: floating point number equal to 4.5\nbut got:  4.0"
    );
}

#[test]
fn test_todo_is_pending_never_failed() {
    fn then_the_stack_is_persisted() -> CheckResult {
        ensure_condition(true)?;
        todo_with("write me")?;
        ensure_condition(false)?;
        Ok(())
    }

    let err = then_the_stack_is_persisted().unwrap_err();
    assert!(err.is_pending());
    assert!(!err.is_failure());
    assert_eq!(err.message(), "write me");
    assert!(matches!(err, CheckError::Pending(_)));
}

#[test]
fn test_failed_step_stops_at_first_failure() {
    fn then_item_names_are_short(stack: &Stack) -> CheckResult {
        ensure_that_with(stack.peek().unwrap(), not(contains(" ")), "top")?;
        todo()?;
        Ok(())
    }

    let stack = given_a_stack_with(&["two words"]);
    let err = then_item_names_are_short(&stack).unwrap_err();
    assert!(err.is_failure());
    assert_eq!(
        err.message(),
        "[top] Expected: not (string containing \" \")\nbut got:  \"two words\""
    );
}

#[test]
fn test_summary_follows_pending_strategy() {
    let results: Vec<CheckResult> = vec![
        ensure_that(&1, integer_equal_to(1)).map_err(CheckError::from),
        todo().map_err(CheckError::from),
        ensure_that("x", starts_with("x")).map_err(CheckError::from),
    ];

    let summary: OutcomeSummary = results.iter().map(CheckStatus::of).collect();
    assert_eq!(summary.passed(), 2);
    assert_eq!(summary.pending(), 1);
    assert_eq!(summary.failed(), 0);

    assert!(summary.is_successful(&VerificationConfig::default()));
    assert!(!summary.is_successful(
        &VerificationConfig::new().with_pending_strategy(PendingStrategy::Failing)
    ));
}

#[test]
fn test_constraint_reused_across_threads() {
    let short_name = Arc::new(and(
        not(contains(" ")),
        satisfying("at most 8 bytes", |s: &str| s.len() <= 8),
    ));

    let handles: Vec<_> = ["alpha", "two words", "longerthan8"]
        .into_iter()
        .map(|name| {
            let c = Arc::clone(&short_name);
            std::thread::spawn(move || ensure_that(name, &*c).is_ok())
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false, false]);
}

#[test]
fn test_config_file_drives_summary() {
    let config = VerificationConfig::from_toml_str(
        r#"
        pending_strategy = "failing"
        ignore_failures = true
        "#,
    )
    .unwrap();

    let mut summary = OutcomeSummary::new();
    summary.record_result(&ensure_condition(false));
    assert!(summary.is_successful(&config));

    summary.record_result(&todo());
    assert!(!summary.is_successful(&config));
}
