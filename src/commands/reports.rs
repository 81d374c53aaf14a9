// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::utils::{
    fmt_money, json_flags, maybe_print_json, opt_arg, parse_date, parse_month, parse_year,
    pretty_table,
};
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(app, sub)?,
        Some(("weekly", sub)) => weekly(app, sub)?,
        Some(("yearly", sub)) => yearly(app, sub)?,
        Some(("suggest", sub)) => suggest(app, sub)?,
        Some(("predict", sub)) => predict(app, sub)?,
        Some(("stats", sub)) => stats(app, sub)?,
        Some(("chart", sub)) => chart(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn totals_table(totals: &BTreeMap<String, Decimal>, first: &str) -> comfy_table::Table {
    let mut items: Vec<_> = totals.iter().collect();
    items.sort_by(|a, b| b.1.cmp(a.1));
    let data = items
        .into_iter()
        .map(|(name, amt)| vec![name.clone(), fmt_money(amt)])
        .collect();
    pretty_table(&[first, "Spent"], data)
}

fn monthly(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let month = opt_arg(sub, "month").map(parse_month).transpose()?;
    let s = app.monthly_summary(month.as_deref());
    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }
    println!(
        "{}: {} spent across {} expenses",
        s.month,
        fmt_money(&s.total_spent),
        s.expense_count
    );
    println!("{}", totals_table(&s.category_totals, "Category"));
    Ok(())
}

fn weekly(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let start = opt_arg(sub, "start").map(parse_date).transpose()?;
    let s = app.weekly_summary(start);
    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }
    println!(
        "{} to {}: {} spent across {} expenses",
        s.week_start,
        s.week_end,
        fmt_money(&s.total_spent),
        s.expense_count
    );
    println!("{}", totals_table(&s.category_totals, "Category"));
    Ok(())
}

fn yearly(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let year = opt_arg(sub, "year").map(parse_year).transpose()?;
    let s = app.yearly_summary(year);
    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }
    println!(
        "{}: {} spent across {} expenses, {} per month on average",
        s.year,
        fmt_money(&s.total_spent),
        s.expense_count,
        fmt_money(&s.average_monthly)
    );
    let months = s
        .monthly_totals
        .iter()
        .map(|(m, amt)| vec![m.clone(), fmt_money(amt)])
        .collect();
    println!("{}", pretty_table(&["Month", "Spent"], months));
    println!("{}", totals_table(&s.category_totals, "Category"));
    Ok(())
}

fn suggest(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let month = opt_arg(sub, "month").map(parse_month).transpose()?;
    let suggestions = app.check_overspending(month.as_deref());
    if !maybe_print_json(json_flag, jsonl_flag, &suggestions)? {
        for s in &suggestions {
            println!("- {}", s);
        }
    }
    Ok(())
}

fn predict(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let p = app.predict_next_month()?;
    if maybe_print_json(json_flag, jsonl_flag, &p)? {
        return Ok(());
    }
    println!(
        "Predicted spending next month: {} (trend {}, {} per month)",
        fmt_money(&p.predicted_total),
        p.trend,
        fmt_money(&p.trend_amount)
    );
    let history = p
        .based_on_months
        .iter()
        .map(|t| vec![t.period.clone(), fmt_money(&t.total)])
        .collect();
    println!("{}", pretty_table(&["Month", "Spent"], history));
    if !p.predicted_by_category.is_empty() {
        let data = p
            .predicted_by_category
            .iter()
            .map(|(c, amt)| vec![c.clone(), fmt_money(amt)])
            .collect();
        println!("{}", pretty_table(&["Category", "Predicted"], data));
    }
    Ok(())
}

fn stats(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let month = opt_arg(sub, "month").map(parse_month).transpose()?;
    let s = app.statistics(month.as_deref())?;
    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }
    let largest = &s.largest_expense;
    let data = vec![
        vec!["Total spent".into(), fmt_money(&s.total_spent)],
        vec!["Expenses".into(), s.expense_count.to_string()],
        vec!["Average".into(), fmt_money(&s.average_expense)],
        vec!["Median".into(), fmt_money(&s.median_expense)],
        vec![
            "Largest".into(),
            format!(
                "{} {} on {}",
                fmt_money(&largest.amount),
                largest.category,
                largest.date
            ),
        ],
        vec![
            "Most frequent".into(),
            format!(
                "{} ({} times)",
                s.most_frequent_category.name, s.most_frequent_category.count
            ),
        ],
        vec![
            "Top category".into(),
            format!(
                "{} ({})",
                s.top_category.name,
                fmt_money(&s.top_category.amount)
            ),
        ],
    ];
    println!("{}", pretty_table(&["Statistic", "Value"], data));
    Ok(())
}

fn chart(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let kind = opt_arg(sub, "kind").unwrap_or("category");
    let month = opt_arg(sub, "month").map(parse_month).transpose()?;
    match kind {
        "trend" => {
            let months = sub.get_one::<u32>("months").copied().unwrap_or(6);
            let data = app.monthly_trend(months);
            if !maybe_print_json(json_flag, jsonl_flag, &data)? {
                let rows = data
                    .into_iter()
                    .map(|t| vec![t.period, fmt_money(&t.total)])
                    .collect();
                println!("{}", pretty_table(&["Month", "Spent"], rows));
            }
        }
        "budget" => {
            let data = app.budget_vs_actual(month.as_deref())?;
            if !maybe_print_json(json_flag, jsonl_flag, &data)? {
                let rows = data
                    .into_iter()
                    .map(|c| {
                        vec![
                            c.bucket.to_string(),
                            fmt_money(&c.budgeted),
                            fmt_money(&c.actual),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Bucket", "Budgeted", "Actual"], rows));
            }
        }
        _ => {
            let data = app.category_breakdown(month.as_deref());
            if !maybe_print_json(json_flag, jsonl_flag, &data)? {
                let rows = data
                    .into_iter()
                    .map(|p| vec![p.label, fmt_money(&p.value)])
                    .collect();
                println!("{}", pretty_table(&["Category", "Spent"], rows));
            }
        }
    }
    Ok(())
}
