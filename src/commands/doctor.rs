// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::BudgetType;
use crate::progress::{Classification, classify};
use crate::utils::pretty_table;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub issue: &'static str,
    pub detail: String,
}

impl Finding {
    fn new(issue: &'static str, detail: impl Into<String>) -> Self {
        Self {
            issue,
            detail: detail.into(),
        }
    }
}

fn counted_as(class: Classification) -> Option<BudgetType> {
    match class {
        Classification::Needs => Some(BudgetType::Needs),
        Classification::Wants => Some(BudgetType::Wants),
        Classification::Other => None,
    }
}

/// Read-only consistency checks over the loaded state.
pub fn check(app: &App) -> Vec<Finding> {
    let mut findings = Vec::new();

    // 1) Expenses filed under categories the registry does not know
    let unknown: BTreeSet<&str> = app
        .ledger
        .expenses
        .iter()
        .map(|e| e.category.as_str())
        .filter(|c| !app.categories.contains(c))
        .collect();
    for c in unknown {
        let count = app.ledger.expenses.iter().filter(|e| e.category == c).count();
        findings.push(Finding::new(
            "expense_unknown_category",
            format!("{} ({} expenses)", c, count),
        ));
    }

    // 2) Registry type that progress tracking will not honour
    for c in app.categories.list() {
        let counted = counted_as(classify(&c.name));
        let agrees = match counted {
            Some(t) => t == c.budget_type,
            None => c.budget_type == BudgetType::Savings,
        };
        if !agrees {
            let counted = counted.map_or("neither needs nor wants".to_string(), |t| t.to_string());
            findings.push(Finding::new(
                "category_type_mismatch",
                format!("{} is {} but counted as {}", c.name, c.budget_type, counted),
            ));
        }
    }

    // 3) Allocation not covering exactly 100%
    if let Some(b) = &app.budget {
        let split = b.allocation();
        if !split.sums_to_hundred() {
            findings.push(Finding::new(
                "budget_split_not_100",
                format!("{} sums to {}%", b.month, split.total().normalize()),
            ));
        }
    }

    // 4) Open goals past their deadline
    let today = app.today();
    for g in app.goals.goals.iter().filter(|g| !g.is_completed) {
        let Some(deadline) = g.deadline.as_deref() else {
            continue;
        };
        match NaiveDate::parse_from_str(deadline, "%Y-%m-%d") {
            Ok(d) if d < today => {
                findings.push(Finding::new(
                    "goal_overdue",
                    format!("{} (deadline {})", g.name, deadline),
                ));
            }
            Ok(_) => {}
            Err(_) => findings.push(Finding::new(
                "goal_invalid_deadline",
                format!("{} ({})", g.name, deadline),
            )),
        }
    }

    findings
}

pub fn handle(app: &App) -> Result<()> {
    let findings = check(app);
    if findings.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = findings
            .into_iter()
            .map(|f| vec![f.issue.to_string(), f.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
