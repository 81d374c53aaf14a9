// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetbuddy::app::App;
use budgetbuddy::error::BudgetError;
use budgetbuddy::predict::Trend;
use budgetbuddy::store::{MemoryStore, Store};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn app() -> App {
    App::load(Box::new(MemoryStore::new())).with_clock(|| d(2025, 3, 15))
}

#[test]
fn goal_completes_and_further_contributions_are_ignored() {
    let mut app = app();
    app.add_goal("Laptop", dec("2000"), Some("2025-12-31".into()), "");

    let g = app.update_goal_progress("Laptop", dec("500")).unwrap();
    assert_eq!(g.current_amount, dec("500"));
    assert!(!g.is_completed);

    let g = app.update_goal_progress("Laptop", dec("1500")).unwrap();
    assert!(g.is_completed);

    assert!(app.update_goal_progress("Laptop", dec("100")).is_none());
    assert_eq!(app.goals.goals[0].current_amount, dec("2000"));
    assert!(app.store().load_goals().unwrap()[0].is_completed);
}

#[test]
fn contributions_go_to_first_open_goal_with_name() {
    let mut app = app();
    app.add_goal("Trip", dec("100"), None, "first");
    app.add_goal("Trip", dec("300"), None, "second");
    app.update_goal_progress("Trip", dec("100"));
    let g = app.update_goal_progress("Trip", dec("50")).unwrap();
    assert_eq!(g.description, "second");
    assert_eq!(g.current_amount, dec("50"));

    let status = app.goals_status();
    assert_eq!(status[0].progress, Decimal::ONE_HUNDRED);
    assert_eq!(status[1].remaining, dec("250"));
}

#[test]
fn unknown_goal_is_not_found() {
    let mut app = app();
    assert!(app.update_goal_progress("Nope", dec("10")).is_none());
}

#[test]
fn prediction_extends_trend_over_three_months() {
    let mut app = app();
    app.add_expense("rent", dec("100"), "", Some(d(2025, 1, 10)));
    app.add_expense("rent", dec("150"), "", Some(d(2025, 2, 10)));
    app.add_expense("rent", dec("120"), "", Some(d(2025, 3, 3)));
    app.add_expense("dining", dec("80"), "", Some(d(2025, 3, 4)));

    let p = app.predict_next_month().unwrap();
    let periods: Vec<&str> = p.based_on_months.iter().map(|t| t.period.as_str()).collect();
    assert_eq!(periods, vec!["2025-01", "2025-02", "2025-03"]);
    assert_eq!(p.trend_amount, dec("100"));
    assert_eq!(p.trend, Trend::Increasing);
    assert_eq!(p.predicted_total.round_dp(2), dec("233.33"));
    assert_eq!(p.predicted_by_category.len(), 2);
}

#[test]
fn prediction_needs_three_expenses() {
    let mut app = app();
    app.add_expense("rent", dec("100"), "", Some(d(2025, 1, 10)));
    app.add_expense("rent", dec("150"), "", Some(d(2025, 2, 10)));
    let err = app.predict_next_month().unwrap_err();
    assert!(matches!(
        err,
        BudgetError::InsufficientHistory {
            required: 3,
            found: 2
        }
    ));
}

#[test]
fn falling_spend_predicts_decrease_and_never_negative() {
    let mut app = app();
    app.add_expense("rent", dec("900"), "", Some(d(2025, 1, 10)));
    app.add_expense("rent", dec("10"), "", Some(d(2025, 3, 1)));
    app.add_expense("dining", dec("5"), "", Some(d(2025, 3, 2)));
    let p = app.predict_next_month().unwrap();
    assert_eq!(p.trend, Trend::Decreasing);
    assert_eq!(p.predicted_total, Decimal::ZERO);
}

#[test]
fn zero_target_goal_reports_zero_progress() {
    let mut app = app();
    app.add_goal("Nothing", Decimal::ZERO, None, "");
    let status = app.goals_status();
    assert_eq!(status[0].progress, Decimal::ZERO);
    assert_eq!(status[0].remaining, Decimal::ZERO);
}

#[test]
fn three_expenses_on_one_old_day_are_enough_history() {
    let mut app = app();
    for amount in ["10", "20", "30"] {
        app.add_expense("rent", dec(amount), "", Some(d(2024, 1, 1)));
    }
    let p = app.predict_next_month().unwrap();
    assert_eq!(p.trend, Trend::Stable);
    assert_eq!(p.trend_amount, Decimal::ZERO);
    assert_eq!(p.predicted_total, Decimal::ZERO);
    assert!(p.predicted_by_category.is_empty());
    assert!(p.based_on_months.iter().all(|t| t.total.is_zero()));
}

#[test]
fn flat_spend_predicts_same_total_without_trailing_zeros() {
    let mut app = app();
    app.add_expense("dining", dec("20"), "", Some(d(2025, 1, 10)));
    app.add_expense("dining", dec("5"), "", Some(d(2025, 2, 10)));
    app.add_expense("dining", dec("20"), "", Some(d(2025, 3, 10)));
    let p = app.predict_next_month().unwrap();
    assert_eq!(p.trend, Trend::Stable);
    assert_eq!(p.predicted_total.to_string(), "20");
    assert_eq!(p.predicted_by_category["dining"].to_string(), "20");
}
