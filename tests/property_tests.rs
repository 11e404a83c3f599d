//! Property-based tests for the calculator engine and history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use calcore::core::{HistoryEntry, HistoryLog};
use calcore::engine::{BinaryOperator, ExpressionEngine};
use calcore::eval::{evaluate, format_number, round_to};
use calcore::storage::{HistoryStore, MemoryStorage};
use proptest::prelude::*;

fn type_digits(engine: &mut ExpressionEngine, digits: &str) {
    for c in digits.chars() {
        engine.input_digit_or_point(c);
    }
}

prop_compose! {
    fn arbitrary_entry()(
        lhs in 0..1000u32,
        rhs in 0..1000u32,
    ) -> HistoryEntry {
        HistoryEntry::new(format!("{lhs} + {rhs}"), (lhs + rhs).to_string())
    }
}

proptest! {
    #[test]
    fn typed_digits_appear_verbatim(digits in "[1-9][0-9]{0,12}") {
        let mut engine = ExpressionEngine::new();
        type_digits(&mut engine, &digits);
        prop_assert_eq!(engine.display(), digits.as_str());
    }

    #[test]
    fn second_point_is_ignored(
        whole in "[1-9][0-9]{0,5}",
        fraction in "[0-9]{1,5}",
    ) {
        let mut engine = ExpressionEngine::new();
        type_digits(&mut engine, &format!("{whole}.{fraction}"));
        let before = engine.display().to_string();

        engine.input_digit_or_point('.');
        prop_assert_eq!(engine.display(), before.as_str());
    }

    #[test]
    fn toggle_sign_is_an_involution(digits in "[1-9][0-9]{0,8}") {
        let mut engine = ExpressionEngine::new();
        type_digits(&mut engine, &digits);

        engine.toggle_sign();
        let negated = format!("-{digits}");
        prop_assert_eq!(engine.display(), negated.as_str());

        engine.toggle_sign();
        prop_assert_eq!(engine.display(), digits.as_str());
    }

    #[test]
    fn delete_undoes_typing(
        prefix in "[1-9][0-9]{0,6}",
        suffix in "[0-9]{1,6}",
    ) {
        let mut engine = ExpressionEngine::new();
        type_digits(&mut engine, &format!("{prefix}{suffix}"));

        for _ in 0..suffix.len() {
            engine.delete_last_char();
        }
        prop_assert_eq!(engine.display(), prefix.as_str());
    }

    #[test]
    fn integer_addition_matches_arithmetic(lhs in 1..100_000u64, rhs in 1..100_000u64) {
        let mut engine = ExpressionEngine::new();
        type_digits(&mut engine, &lhs.to_string());
        engine.apply_binary_operator(BinaryOperator::Add);
        type_digits(&mut engine, &rhs.to_string());

        let entry = engine.evaluate().unwrap();
        let sum = (lhs + rhs).to_string();
        prop_assert_eq!(entry.result.as_str(), sum.as_str());
        prop_assert_eq!(engine.display(), sum.as_str());
        prop_assert_eq!(engine.expression(), "");
    }

    #[test]
    fn multiplication_binds_tighter(a in 1..1000i64, b in 1..1000i64, c in 1..1000i64) {
        let value = evaluate(&format!("{a} + {b} * {c}")).unwrap();
        prop_assert_eq!(value, (a + b * c) as f64);
    }

    #[test]
    fn integers_format_without_fraction(n in -1_000_000_000_000i64..1_000_000_000_000i64) {
        prop_assert_eq!(format_number(n as f64), n.to_string());
    }

    #[test]
    fn rounding_is_idempotent(value in -1.0e6..1.0e6f64, places in 0..10u32) {
        let once = round_to(value, places);
        prop_assert_eq!(round_to(once, places), once);
    }

    #[test]
    fn history_record_is_pure(entry in arbitrary_entry()) {
        let log = HistoryLog::new();
        let recorded = log.record(entry);

        // Original log unchanged
        prop_assert_eq!(log.len(), 0);
        prop_assert_eq!(recorded.len(), 1);
    }

    #[test]
    fn history_is_newest_first(entries in prop::collection::vec(arbitrary_entry(), 1..10)) {
        let log = entries
            .iter()
            .cloned()
            .fold(HistoryLog::new(), |log, entry| log.record(entry));

        prop_assert_eq!(log.len(), entries.len());
        for (stored, appended) in log.entries().iter().zip(entries.iter().rev()) {
            prop_assert_eq!(stored, appended);
        }
    }

    #[test]
    fn history_survives_restart(entries in prop::collection::vec(arbitrary_entry(), 0..8)) {
        let mut store = HistoryStore::open(MemoryStorage::new());
        for entry in &entries {
            store.append(entry.clone());
        }
        let before = store.log().clone();

        let reopened = HistoryStore::open(store.into_storage());
        prop_assert_eq!(reopened.log(), &before);
    }
}
