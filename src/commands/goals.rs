// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::utils::{
    arg, fmt_money, json_flags, maybe_print_json, opt_arg, parse_amount, parse_date, pretty_table,
};
use anyhow::{Result, bail};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("contribute", sub)) => contribute(app, sub)?,
        Some(("status", sub)) => status(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let name = arg(sub, "name")?;
    if name.is_empty() {
        bail!("Goal name must not be empty");
    }
    let target = parse_amount(arg(sub, "target")?)?;
    let deadline = opt_arg(sub, "deadline")
        .map(|d| parse_date(d).map(|d| d.to_string()))
        .transpose()?;
    let description = opt_arg(sub, "description").unwrap_or_default();
    if app.goals.goals.iter().any(|g| g.name == name && !g.is_completed) {
        println!(
            "Note: an open goal named '{}' already exists; contributions go to the first one.",
            name
        );
    }
    let goal = app.add_goal(name, target, deadline, description);
    println!("Goal '{}' added: target {}", goal.name, fmt_money(&goal.target_amount));
    Ok(())
}

fn contribute(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let name = arg(sub, "name")?;
    let amount = parse_amount(arg(sub, "amount")?)?;
    let Some(goal) = app.update_goal_progress(name, amount) else {
        bail!("No open goal named '{}'", name);
    };
    println!(
        "'{}': {} of {}",
        goal.name,
        fmt_money(&goal.current_amount),
        fmt_money(&goal.target_amount)
    );
    if goal.is_completed {
        println!("Goal '{}' completed!", goal.name);
    }
    Ok(())
}

fn status(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let data = app.goals_status();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .into_iter()
            .map(|g| {
                vec![
                    g.name,
                    fmt_money(&g.current_amount),
                    fmt_money(&g.target_amount),
                    fmt_money(&g.remaining),
                    format!("{:.1}%", g.progress),
                    g.deadline.unwrap_or_default(),
                    if g.is_completed { "done" } else { "open" }.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Goal", "Saved", "Target", "Remaining", "Progress", "Deadline", "Status"],
                rows,
            )
        );
    }
    Ok(())
}
