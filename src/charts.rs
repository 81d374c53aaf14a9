// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Tabular series for chart renderers. Nothing here draws.

use crate::error::{BudgetError, Result};
use crate::ledger::Ledger;
use crate::models::{Budget, BudgetType};
use crate::predict::PeriodTotal;
use crate::progress::{Classification, classify};
use crate::summary::{month_key, monthly_summary};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetComparison {
    pub bucket: BudgetType,
    pub budgeted: Decimal,
    pub actual: Decimal,
}

/// Spend per category for `month`, largest first.
pub fn category_breakdown(ledger: &Ledger, month: &str) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = monthly_summary(ledger, month)
        .category_totals
        .into_iter()
        .map(|(label, value)| ChartPoint { label, value })
        .collect();
    points.sort_by(|a, b| b.value.cmp(&a.value));
    points
}

/// Totals for the `months` calendar months ending with the month of `today`,
/// oldest first.
pub fn monthly_trend(ledger: &Ledger, today: NaiveDate, months: u32) -> Vec<PeriodTotal> {
    (0..months)
        .rev()
        .filter_map(|back| today.checked_sub_months(Months::new(back)))
        .map(|day| {
            let period = month_key(day);
            let total = monthly_summary(ledger, &period).total_spent;
            PeriodTotal { period, total }
        })
        .collect()
}

/// Budgeted versus actual per bucket. Actual savings is income left over
/// after all spending, floored at zero.
pub fn budget_vs_actual(
    ledger: &Ledger,
    budget: Option<&Budget>,
    month: &str,
) -> Result<Vec<BudgetComparison>> {
    let budget = budget.ok_or(BudgetError::NoBudget)?;
    let summary = monthly_summary(ledger, month);
    let mut needs = Decimal::ZERO;
    let mut wants = Decimal::ZERO;
    for (category, amount) in &summary.category_totals {
        match classify(category) {
            Classification::Needs => needs += *amount,
            Classification::Wants => wants += *amount,
            Classification::Other => {}
        }
    }
    Ok(vec![
        BudgetComparison {
            bucket: BudgetType::Needs,
            budgeted: budget.needs_amount,
            actual: needs,
        },
        BudgetComparison {
            bucket: BudgetType::Wants,
            budgeted: budget.wants_amount,
            actual: wants,
        },
        BudgetComparison {
            bucket: BudgetType::Savings,
            budgeted: budget.savings_amount,
            actual: (budget.total_income - summary.total_spent).max(Decimal::ZERO),
        },
    ])
}
