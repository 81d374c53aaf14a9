// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Spending against the needs/wants/savings targets.
//!
//! Classification uses the fixed category-name lists below, not the
//! `budget_type` stored in the category registry.

use crate::error::{BudgetError, Result};
use crate::ledger::Ledger;
use crate::models::Budget;
use crate::summary::{MonthlySummary, monthly_summary};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

pub const NEEDS_CATEGORIES: [&str; 5] =
    ["rent", "groceries", "utilities", "transport", "insurance"];
pub const WANTS_CATEGORIES: [&str; 4] = ["entertainment", "dining", "shopping", "hobbies"];

/// Pattern suggestions need at least this many expenses in the whole ledger.
pub const PATTERN_MIN_HISTORY: usize = 5;
/// Number of most recent expenses inspected for spending patterns.
pub const PATTERN_WINDOW: usize = 10;
/// Average amount above which a category counts as high spending.
pub const HIGH_SPENDING_THRESHOLD: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Needs,
    Wants,
    Other,
}

/// Exact, case-sensitive match against the fixed lists.
pub fn classify(category: &str) -> Classification {
    if NEEDS_CATEGORIES.contains(&category) {
        Classification::Needs
    } else if WANTS_CATEGORIES.contains(&category) {
        Classification::Wants
    } else {
        Classification::Other
    }
}

fn spent_in(summary: &MonthlySummary, class: Classification) -> Decimal {
    summary
        .category_totals
        .iter()
        .filter(|(name, _)| classify(name) == class)
        .map(|(_, amount)| *amount)
        .sum()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    NoBudget,
    Overspent { excess: Decimal },
    NeedsExceeded { excess: Decimal },
    WantsExceeded { excess: Decimal },
    HighSpending { category: String, average: Decimal },
    OnTrack,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::NoBudget => write!(f, "No budget set. Please set up your budget first."),
            Suggestion::Overspent { excess } => {
                write!(f, "You've overspent by {:.2} this month!", excess)
            }
            Suggestion::NeedsExceeded { excess } => write!(
                f,
                "Needs spending exceeded by {:.2}. Consider: cheaper groceries, energy-saving tips, or public transport.",
                excess
            ),
            Suggestion::WantsExceeded { excess } => write!(
                f,
                "Wants spending exceeded by {:.2}. Try: cooking at home, free entertainment, or delayed gratification.",
                excess
            ),
            Suggestion::HighSpending { category, average } => write!(
                f,
                "High spending in {}: {:.2} average. Consider reducing frequency or finding alternatives.",
                category, average
            ),
            Suggestion::OnTrack => write!(f, "Great job! You're staying within your budget."),
        }
    }
}

/// Categories whose average amount among the most recent expenses exceeds the
/// threshold, in order of first appearance within that window.
fn high_spending_patterns(ledger: &Ledger) -> Vec<Suggestion> {
    if ledger.expenses.len() < PATTERN_MIN_HISTORY {
        return Vec::new();
    }
    let mut groups: Vec<(&str, Vec<Decimal>)> = Vec::new();
    for e in ledger.recent_expenses(PATTERN_WINDOW) {
        match groups.iter_mut().find(|g| g.0 == e.category) {
            Some(group) => group.1.push(e.amount),
            None => groups.push((e.category.as_str(), vec![e.amount])),
        }
    }
    let threshold = Decimal::from(HIGH_SPENDING_THRESHOLD);
    groups
        .into_iter()
        .filter_map(|(category, amounts)| {
            let average = amounts.iter().sum::<Decimal>() / Decimal::from(amounts.len());
            (average > threshold).then(|| Suggestion::HighSpending {
                category: category.to_string(),
                average,
            })
        })
        .collect()
}

/// Warnings in display order: total overspend, needs, wants, then patterns.
pub fn check_overspending(
    ledger: &Ledger,
    budget: Option<&Budget>,
    month: &str,
) -> Vec<Suggestion> {
    let Some(budget) = budget else {
        return vec![Suggestion::NoBudget];
    };
    let summary = monthly_summary(ledger, month);
    let mut out = Vec::new();

    if summary.total_spent > budget.total_income {
        out.push(Suggestion::Overspent {
            excess: summary.total_spent - budget.total_income,
        });
    }
    let needs_spent = spent_in(&summary, Classification::Needs);
    if needs_spent > budget.needs_amount {
        out.push(Suggestion::NeedsExceeded {
            excess: needs_spent - budget.needs_amount,
        });
    }
    let wants_spent = spent_in(&summary, Classification::Wants);
    if wants_spent > budget.wants_amount {
        out.push(Suggestion::WantsExceeded {
            excess: wants_spent - budget.wants_amount,
        });
    }
    out.extend(high_spending_patterns(ledger));

    if out.is_empty() {
        out.push(Suggestion::OnTrack);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressLine {
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percent: Decimal,
}

impl ProgressLine {
    pub fn new(budget: Decimal, spent: Decimal) -> Self {
        let percent = if budget.is_zero() {
            Decimal::ZERO
        } else {
            (spent / budget * Decimal::ONE_HUNDRED).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        };
        Self {
            budget,
            spent,
            remaining: (budget - spent).max(Decimal::ZERO),
            percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub month: String,
    pub needs: ProgressLine,
    pub wants: ProgressLine,
    pub total: ProgressLine,
}

pub fn budget_progress(
    ledger: &Ledger,
    budget: Option<&Budget>,
    month: &str,
) -> Result<BudgetProgress> {
    let budget = budget.ok_or(BudgetError::NoBudget)?;
    let summary = monthly_summary(ledger, month);
    Ok(BudgetProgress {
        month: month.to_string(),
        needs: ProgressLine::new(budget.needs_amount, spent_in(&summary, Classification::Needs)),
        wants: ProgressLine::new(budget.wants_amount, spent_in(&summary, Classification::Wants)),
        total: ProgressLine::new(budget.total_income, summary.total_spent),
    })
}
