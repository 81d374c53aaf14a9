// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::budget::Allocation;
use crate::progress::BudgetProgress;
use crate::utils::{
    arg, fmt_money, json_flags, maybe_print_json, opt_arg, parse_amount, parse_month,
    parse_percentage, pretty_table,
};
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(app, sub)?,
        Some(("show", sub)) => show(app, sub)?,
        Some(("progress", sub)) => progress(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let income = parse_amount(arg(sub, "income")?)?;
    let split = Allocation::new(
        parse_percentage(arg(sub, "needs")?)?,
        parse_percentage(arg(sub, "wants")?)?,
        parse_percentage(arg(sub, "savings")?)?,
    );
    let budget = app.set_budget(income, split);
    println!("Budget set for {}:", budget.month);
    println!("{}", budget_table(&budget));
    if !split.sums_to_hundred() {
        println!(
            "Note: percentages add up to {}%, not 100%.",
            split.total().normalize()
        );
    }
    Ok(())
}

fn budget_table(b: &crate::models::Budget) -> comfy_table::Table {
    pretty_table(
        &["Bucket", "Percent", "Amount"],
        vec![
            vec!["Income".into(), "".into(), fmt_money(&b.total_income)],
            vec![
                "Needs".into(),
                format!("{}%", b.needs_percentage.normalize()),
                fmt_money(&b.needs_amount),
            ],
            vec![
                "Wants".into(),
                format!("{}%", b.wants_percentage.normalize()),
                fmt_money(&b.wants_amount),
            ],
            vec![
                "Savings".into(),
                format!("{}%", b.savings_percentage.normalize()),
                fmt_money(&b.savings_amount),
            ],
        ],
    )
}

fn show(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    if maybe_print_json(json_flag, jsonl_flag, &app.budget)? {
        return Ok(());
    }
    match &app.budget {
        Some(b) => {
            println!("Budget for {}:", b.month);
            println!("{}", budget_table(b));
        }
        None => println!("No budget set. Run `budgetbuddy budget set --income <amount>`."),
    }
    Ok(())
}

fn progress(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let month = opt_arg(sub, "month").map(parse_month).transpose()?;
    let p: BudgetProgress = app.budget_progress(month.as_deref())?;
    if maybe_print_json(json_flag, jsonl_flag, &p)? {
        return Ok(());
    }
    let rows = [("Needs", &p.needs), ("Wants", &p.wants), ("Total", &p.total)]
        .into_iter()
        .map(|(label, line)| {
            vec![
                label.to_string(),
                fmt_money(&line.budget),
                fmt_money(&line.spent),
                fmt_money(&line.remaining),
                format!("{:.1}%", line.percent),
            ]
        })
        .collect();
    println!("Budget progress for {}:", p.month);
    println!(
        "{}",
        pretty_table(&["Bucket", "Budget", "Spent", "Remaining", "Used"], rows)
    );
    Ok(())
}
