// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::{BudgetType, Category};
use crate::registry::CategoryPatch;
use crate::utils::{arg, json_flags, maybe_print_json, opt_arg, parse_color, pretty_table};
use anyhow::{Result, anyhow, bail};

fn parse_budget_type(s: &str) -> Result<BudgetType> {
    s.parse::<BudgetType>().map_err(|e| anyhow!(e))
}

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = arg(sub, "name")?;
            if name.is_empty() {
                bail!("Category name must not be empty");
            }
            let category = app.add_category(Category {
                name: name.to_string(),
                color: parse_color(arg(sub, "color")?)?,
                icon: arg(sub, "icon")?.to_string(),
                budget_type: parse_budget_type(arg(sub, "type")?)?,
            });
            println!(
                "Added category '{}' ({})",
                category.name, category.budget_type
            );
        }
        Some(("update", sub)) => {
            let name = arg(sub, "name")?;
            let patch = CategoryPatch {
                color: opt_arg(sub, "color").map(parse_color).transpose()?,
                icon: opt_arg(sub, "icon").map(str::to_string),
                budget_type: opt_arg(sub, "type").map(parse_budget_type).transpose()?,
            };
            match app.update_category(name, patch) {
                Some(c) => println!(
                    "Updated category '{}': {} {} ({})",
                    c.name, c.icon, c.color, c.budget_type
                ),
                None => bail!("Category '{}' not found", name),
            }
        }
        Some(("list", sub)) => {
            let (json_flag, jsonl_flag) = json_flags(sub);
            let cats = app.list_categories();
            if !maybe_print_json(json_flag, jsonl_flag, &cats)? {
                let data = cats
                    .into_iter()
                    .map(|c| vec![c.icon, c.name, c.budget_type.to_string(), c.color])
                    .collect();
                println!("{}", pretty_table(&["", "Category", "Type", "Color"], data));
            }
        }
        Some(("rm", sub)) => {
            let name = arg(sub, "name")?;
            if !app.remove_category(name) {
                bail!("Category '{}' not found", name);
            }
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
