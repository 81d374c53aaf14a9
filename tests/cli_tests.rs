// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetbuddy::app::App;
use budgetbuddy::budget::Allocation;
use budgetbuddy::cli;
use budgetbuddy::commands::{budgets, categories, doctor, expenses, goals, incomes};
use budgetbuddy::models::BudgetType;
use budgetbuddy::store::MemoryStore;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn app() -> App {
    App::load(Box::new(MemoryStore::new()))
        .with_clock(|| NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Parses `line` as if typed after `budgetbuddy` and dispatches it.
fn run(app: &mut App, line: &str) -> anyhow::Result<()> {
    let args = std::iter::once("budgetbuddy").chain(line.split_whitespace());
    let matches = cli::build_cli().try_get_matches_from(args)?;
    match matches.subcommand() {
        Some(("budget", sub)) => budgets::handle(app, sub),
        Some(("expense", sub)) => expenses::handle(app, sub),
        Some(("income", sub)) => incomes::handle(app, sub),
        Some(("category", sub)) => categories::handle(app, sub),
        Some(("goal", sub)) => goals::handle(app, sub),
        other => panic!("unexpected subcommand {:?}", other.map(|(n, _)| n)),
    }
}

fn expense_rows(app: &App, line: &str) -> Vec<expenses::ExpenseRow> {
    let args = std::iter::once("budgetbuddy").chain(line.split_whitespace());
    let matches = cli::build_cli().get_matches_from(args);
    if let Some(("expense", m)) = matches.subcommand() {
        if let Some(("list", l)) = m.subcommand() {
            expenses::query_rows(app, l).unwrap()
        } else {
            panic!("expected list subcommand");
        }
    } else {
        panic!("expected expense subcommand");
    }
}

#[test]
fn global_data_dir_is_accepted_after_subcommand() {
    let matches = cli::build_cli().get_matches_from([
        "budgetbuddy",
        "expense",
        "list",
        "--data-dir",
        "/tmp/bb",
        "--json",
    ]);
    assert_eq!(
        matches.get_one::<String>("data_dir").map(String::as_str),
        Some("/tmp/bb")
    );
    if let Some(("expense", m)) = matches.subcommand() {
        if let Some(("list", l)) = m.subcommand() {
            assert!(l.get_flag("json"));
        } else {
            panic!("expected list subcommand");
        }
    } else {
        panic!("expected expense subcommand");
    }
}

#[test]
fn budget_set_uses_default_split() {
    let mut app = app();
    run(&mut app, "budget set --income 2000").unwrap();
    let b = app.budget.clone().unwrap();
    assert_eq!(b.month, "2025-03");
    assert_eq!(b.wants_amount, dec("600"));

    run(
        &mut app,
        "budget set --income 1000 --needs 70 --wants 20 --savings 10",
    )
    .unwrap();
    assert_eq!(
        app.budget.as_ref().unwrap().allocation(),
        Allocation::new(dec("70"), dec("20"), dec("10"))
    );
}

#[test]
fn budget_rejects_bad_percentages_and_amounts() {
    let mut app = app();
    assert!(run(&mut app, "budget set --income abc").is_err());
    assert!(run(&mut app, "budget set --income 100 --needs 120").is_err());
    assert!(app.budget.is_none());
}

#[test]
fn expense_add_edit_rm_flow() {
    let mut app = app();
    run(
        &mut app,
        "expense add --category rent --amount 800 --date 2025-03-01",
    )
    .unwrap();
    run(&mut app, "expense add --category dining --amount 25.5").unwrap();
    assert_eq!(
        app.ledger.expenses[1].date,
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    );

    let rows = expense_rows(&app, "expense list --limit 1");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].index, 1);
    assert_eq!(rows[0].amount, "25.50");

    run(&mut app, "expense edit --index 0 --amount 850").unwrap();
    assert_eq!(app.ledger.expenses[0].amount, dec("850"));
    run(&mut app, "expense rm --index 0").unwrap();
    assert_eq!(app.ledger.expenses.len(), 1);
    assert!(run(&mut app, "expense rm --index 4").is_err());
    assert!(run(&mut app, "expense add --category rent --amount -5").is_err());
}

#[test]
fn single_digit_month_filter_is_padded() {
    let mut app = app();
    run(
        &mut app,
        "expense add --category rent --amount 800 --date 2025-03-01",
    )
    .unwrap();
    run(
        &mut app,
        "expense add --category rent --amount 800 --date 2025-02-01",
    )
    .unwrap();

    let rows = expense_rows(&app, "expense list --month 2025-3");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2025-03-01");
    assert!(run(&mut app, "expense list --month 2025-13").is_err());
}

#[test]
fn income_add_defaults_category_to_salary() {
    let mut app = app();
    run(&mut app, "income add --source Acme --amount 3000").unwrap();
    assert_eq!(app.ledger.incomes[0].category, "salary");
    run(&mut app, "income summary --json").unwrap();
}

#[test]
fn category_add_update_rm() {
    let mut app = app();
    run(
        &mut app,
        "category add --name pets --color #AABBCC --type needs",
    )
    .unwrap();
    let pets = app.categories.get("pets").unwrap();
    assert_eq!(pets.color, "#aabbcc");
    assert_eq!(pets.budget_type, BudgetType::Needs);

    run(&mut app, "category update --name pets --type wants").unwrap();
    assert_eq!(
        app.categories.get("pets").unwrap().budget_type,
        BudgetType::Wants
    );
    assert!(run(&mut app, "category add --name x --color red").is_err());
    assert!(run(&mut app, "category update --name nope").is_err());

    run(&mut app, "category rm --name pets").unwrap();
    assert!(!app.categories.contains("pets"));
}

#[test]
fn goal_add_and_contribute() {
    let mut app = app();
    run(
        &mut app,
        "goal add --name Laptop --target 2000 --deadline 2025-12-31",
    )
    .unwrap();
    run(&mut app, "goal contribute --name Laptop --amount 2000").unwrap();
    assert!(app.goals.goals[0].is_completed);
    assert!(run(&mut app, "goal contribute --name Laptop --amount 1").is_err());
    assert!(run(&mut app, "goal add --name Car --target 1 --deadline soon").is_err());
}

#[test]
fn doctor_flags_inconsistencies() {
    let mut app = app();
    assert!(doctor::check(&app).is_empty());

    app.add_expense("gym", dec("40"), "", None);
    app.set_budget(
        dec("1000"),
        Allocation::new(dec("50"), dec("30"), dec("30")),
    );
    app.add_goal("Trip", dec("500"), Some("2025-01-01".into()), "");
    run(&mut app, "category update --name rent --type wants").unwrap();

    let issues: Vec<&str> = doctor::check(&app).iter().map(|f| f.issue).collect();
    assert_eq!(
        issues,
        vec![
            "expense_unknown_category",
            "category_type_mismatch",
            "budget_split_not_100",
            "goal_overdue",
        ]
    );
}
