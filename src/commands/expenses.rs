// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::ledger::ExpensePatch;
use crate::utils::{
    arg, fmt_money, json_flags, maybe_print_json, opt_arg, parse_amount, parse_date, parse_month,
    pretty_table,
};
use anyhow::{Result, bail};
use serde::Serialize;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        Some(("edit", sub)) => edit(app, sub)?,
        Some(("rm", sub)) => remove(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let category = arg(sub, "category")?;
    if category.is_empty() {
        bail!("Category must not be empty");
    }
    let amount = parse_amount(arg(sub, "amount")?)?;
    let description = opt_arg(sub, "description").unwrap_or_default();
    let date = opt_arg(sub, "date").map(parse_date).transpose()?;
    let expense = app.add_expense(category, amount, description, date);
    println!(
        "Expense added: {} for {} on {}",
        fmt_money(&expense.amount),
        expense.category,
        expense.date
    );
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub index: usize,
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

pub fn query_rows(app: &App, sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let month = opt_arg(sub, "month").map(parse_month).transpose()?;
    let limit = sub.get_one::<usize>("limit").copied();
    Ok(app
        .list_expenses(month.as_deref(), limit)
        .into_iter()
        .map(|(index, e)| ExpenseRow {
            index,
            date: e.date.to_string(),
            category: e.category,
            amount: fmt_money(&e.amount),
            description: e.description,
        })
        .collect())
}

fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let data = query_rows(app, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.index.to_string(),
                    r.date.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["#", "Date", "Category", "Amount", "Description"], rows)
        );
    }
    Ok(())
}

fn edit(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub
        .get_one::<usize>("index")
        .ok_or_else(|| anyhow::anyhow!("Missing required argument 'index'"))?;
    let patch = ExpensePatch {
        date: opt_arg(sub, "date").map(parse_date).transpose()?,
        category: opt_arg(sub, "category").map(str::to_string),
        amount: opt_arg(sub, "amount").map(parse_amount).transpose()?,
        description: sub.get_one::<String>("description").map(|s| s.trim().to_string()),
    };
    match app.edit_expense(index, patch) {
        Some(e) => println!(
            "Expense #{} updated: {} {} on {}",
            index,
            fmt_money(&e.amount),
            e.category,
            e.date
        ),
        None => bail!("No expense at index {}", index),
    }
    Ok(())
}

fn remove(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub
        .get_one::<usize>("index")
        .ok_or_else(|| anyhow::anyhow!("Missing required argument 'index'"))?;
    if !app.delete_expense(index) {
        bail!("No expense at index {}", index);
    }
    println!("Removed expense #{}", index);
    Ok(())
}
