//! End-to-end calculator sessions driven through button labels.

use calcore::config::CalculatorConfig;
use calcore::storage::{FileStorage, HistoryStorage, MemoryStorage};
use calcore::Calculator;
use std::fs;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("calcore=debug")
        .with_test_writer()
        .try_init();
}

fn press_all<S: HistoryStorage>(calc: &mut Calculator<S>, labels: &[&str]) {
    for label in labels {
        calc.press_label(label).unwrap();
    }
}

#[test]
fn simple_addition() {
    init_tracing();
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["2", "+", "3", "="]);

    assert_eq!(calc.display(), "5");
    assert_eq!(calc.expression(), "");
    assert_eq!(calc.history().len(), 1);
    assert_eq!(calc.history()[0].expression, "2 + 3");
    assert_eq!(calc.history()[0].result, "5");
}

#[test]
fn precedence_is_respected() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["2", "+", "3", "×", "4", "="]);
    assert_eq!(calc.display(), "14");
}

#[test]
fn power_then_chained_operator() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["2", "xʸ", "1", "0"]);
    assert_eq!(calc.expression(), "2 ** ");

    press_all(&mut calc, &["−", "2", "4", "="]);
    assert_eq!(calc.display(), "1000");
    assert_eq!(calc.history()[0].expression, "2 ** 10 - 24");
}

#[test]
fn square_root_is_rounded() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["2", "√"]);

    assert_eq!(calc.display(), "1.41421356");
    assert_eq!(calc.history()[0].expression, "sqrt(2)");
    assert_eq!(calc.history()[0].result, "1.41421356");
}

#[test]
fn division_by_zero_is_recorded() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["5", "÷", "0", "="]);

    assert_eq!(calc.display(), "Infinity");
    assert_eq!(calc.history().len(), 1);
    assert_eq!(calc.history()[0].result, "Infinity");
}

#[test]
fn result_feeds_next_calculation() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["5", "÷", "0", "=", "−", "1", "="]);
    assert_eq!(calc.display(), "Infinity");

    press_all(&mut calc, &["AC", "1", "÷", "4", "=", "×", "2", "="]);
    assert_eq!(calc.display(), "0.5");
    assert_eq!(calc.history()[0].expression, "0.25 * 2");
}

#[test]
fn syntax_error_is_not_recorded() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["7", "×", ".", "="]);

    assert_eq!(calc.display(), "Error");
    assert_eq!(calc.expression(), "");
    assert!(calc.history().is_empty());

    // Typing recovers from the error
    press_all(&mut calc, &["8"]);
    assert_eq!(calc.display(), "8");
}

#[test]
fn function_of_invalid_operand_shows_error() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["0", "ln"]);
    assert_eq!(calc.display(), "Error");

    press_all(&mut calc, &["1", "0", "0", "log"]);
    assert_eq!(calc.display(), "2");
    assert_eq!(calc.history().len(), 1);
}

#[test]
fn delete_walks_back_to_zero() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["5", "⌫"]);
    assert_eq!(calc.display(), "0");

    press_all(&mut calc, &["4", "2", "⌫"]);
    assert_eq!(calc.display(), "4");
}

#[test]
fn toggle_sign_and_clear() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["9", "+/−"]);
    assert_eq!(calc.display(), "-9");

    press_all(&mut calc, &["+", "AC"]);
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.expression(), "");
}

#[test]
fn newest_entry_comes_first() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["1", "+", "1", "="]);
    press_all(&mut calc, &["AC", "2", "+", "2", "="]);
    press_all(&mut calc, &["AC", "3", "+", "3", "="]);

    let results: Vec<_> = calc.history().iter().map(|e| e.result.as_str()).collect();
    assert_eq!(results, ["6", "4", "2"]);
}

#[test]
fn history_entry_can_be_reloaded() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["1", "2", "×", "1", "2", "="]);
    let id = calc.history()[0].id.clone();

    press_all(&mut calc, &["AC", "7"]);
    calc.press_label(&format!("history:{id}")).unwrap();
    assert_eq!(calc.display(), "144");

    // Loaded values behave like fresh results
    press_all(&mut calc, &["1"]);
    assert_eq!(calc.display(), "1");
}

#[test]
fn cleared_history_stays_cleared_after_restart() {
    let mut calc = Calculator::new(MemoryStorage::new());
    press_all(&mut calc, &["1", "+", "2", "="]);
    calc.clear_history();
    assert!(calc.history().is_empty());

    let calc = Calculator::new(calc.into_storage());
    assert!(calc.history().is_empty());
}

#[test]
fn file_history_survives_restart() {
    init_tracing();
    let dir = TempDir::new().unwrap();

    let mut calc = Calculator::new(FileStorage::in_dir(dir.path()));
    press_all(&mut calc, &["6", "×", "7", "="]);
    press_all(&mut calc, &["AC", "9", "√"]);
    let before = calc.history().to_vec();
    drop(calc);

    let path = dir.path().join("calculator-history.json");
    assert!(path.exists());

    let restarted = Calculator::new(FileStorage::new(&path));
    assert_eq!(restarted.history(), before.as_slice());
    assert_eq!(restarted.history()[0].expression, "sqrt(9)");
    assert_eq!(restarted.display(), "0");
}

#[test]
fn corrupt_file_starts_empty() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calculator-history.json");
    fs::write(&path, "{not json").unwrap();

    let mut calc = Calculator::new(FileStorage::new(&path));
    assert!(calc.history().is_empty());

    // The next calculation overwrites the corrupt snapshot
    press_all(&mut calc, &["3", "+", "4", "="]);
    let restarted = Calculator::new(FileStorage::new(&path));
    assert_eq!(restarted.history().len(), 1);
}

#[test]
fn config_drives_precision_and_location() {
    let dir = TempDir::new().unwrap();
    let toml = format!(
        "decimal_places = 3\nhistory_dir = {:?}\n",
        dir.path().join("data").display().to_string()
    );
    let config = CalculatorConfig::from_toml_str(&toml).unwrap();

    let mut calc = Calculator::from_config(&config);
    press_all(&mut calc, &["2", "√"]);
    assert_eq!(calc.display(), "1.414");

    assert!(dir.path().join("data/calculator-history.json").exists());
}
