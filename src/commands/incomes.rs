// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::INCOME_CATEGORIES;
use crate::utils::{
    arg, fmt_money, json_flags, maybe_print_json, opt_arg, parse_amount, parse_date, parse_month,
    pretty_table,
};
use anyhow::{Result, bail};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        Some(("summary", sub)) => summary(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let source = arg(sub, "source")?;
    if source.is_empty() {
        bail!("Source must not be empty");
    }
    let amount = parse_amount(arg(sub, "amount")?)?;
    let category = opt_arg(sub, "category").unwrap_or("salary");
    let description = opt_arg(sub, "description").unwrap_or_default();
    let date = opt_arg(sub, "date").map(parse_date).transpose()?;
    let income = app.add_income(source, amount, category, description, date);
    println!(
        "Income added: {} from {} ({}) on {}",
        fmt_money(&income.amount),
        income.source,
        income.category,
        income.date
    );
    if !INCOME_CATEGORIES.contains(&category) {
        println!(
            "Note: '{}' is not one of {}.",
            category,
            INCOME_CATEGORIES.join(", ")
        );
    }
    Ok(())
}

fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let month = opt_arg(sub, "month").map(parse_month).transpose()?;
    let limit = sub.get_one::<usize>("limit").copied();
    let data = app.list_incomes(month.as_deref(), limit);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .into_iter()
            .map(|i| {
                vec![
                    i.date.to_string(),
                    i.source,
                    i.category,
                    fmt_money(&i.amount),
                    i.description,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Source", "Category", "Amount", "Description"], rows)
        );
    }
    Ok(())
}

fn summary(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let month = opt_arg(sub, "month").map(parse_month).transpose()?;
    let s = app.income_summary(month.as_deref());
    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }
    println!(
        "Income for {}: {} across {} entries",
        s.month,
        fmt_money(&s.total_income),
        s.income_count
    );
    let rows = s
        .source_totals
        .iter()
        .map(|(source, amt)| vec![source.clone(), fmt_money(amt)])
        .collect();
    println!("{}", pretty_table(&["Source", "Amount"], rows));
    Ok(())
}
