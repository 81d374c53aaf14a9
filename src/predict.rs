// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Next-month spending extrapolation.
//!
//! The three sample months are the months containing `today`, `today - 30d`
//! and `today - 60d`. Near month boundaries two offsets can land in the same
//! calendar month; that is accepted.

use crate::error::{BudgetError, Result};
use crate::ledger::Ledger;
use crate::summary::{month_key, monthly_summary};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_HISTORY: usize = 3;
const SAMPLE_MONTHS: i64 = 3;
const MONTH_OFFSET_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotal {
    pub period: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub predicted_total: Decimal,
    pub predicted_by_category: BTreeMap<String, Decimal>,
    /// Oldest first.
    pub based_on_months: Vec<PeriodTotal>,
    pub trend_amount: Decimal,
    pub trend: Trend,
}

/// Fails when the ledger holds fewer than three expenses in total, however
/// they are spread across months.
pub fn predict_next_month(ledger: &Ledger, today: NaiveDate) -> Result<Prediction> {
    if ledger.expenses.len() < MIN_HISTORY {
        return Err(BudgetError::InsufficientHistory {
            required: MIN_HISTORY,
            found: ledger.expenses.len(),
        });
    }

    let summaries: Vec<_> = (0..SAMPLE_MONTHS)
        .rev()
        .map(|i| {
            let day = today - Duration::days(MONTH_OFFSET_DAYS * i);
            monthly_summary(ledger, &month_key(day))
        })
        .collect();
    let (Some(oldest), Some(newest)) = (summaries.first(), summaries.last()) else {
        return Err(BudgetError::InsufficientHistory {
            required: MIN_HISTORY,
            found: ledger.expenses.len(),
        });
    };

    let trend_amount = newest.total_spent - oldest.total_spent;
    let predicted_total =
        (newest.total_spent + trend_amount / Decimal::from(SAMPLE_MONTHS))
            .max(Decimal::ZERO)
            .normalize();

    let ratio = if newest.total_spent.is_zero() {
        Decimal::ZERO
    } else {
        predicted_total / newest.total_spent
    };
    let predicted_by_category = newest
        .category_totals
        .iter()
        .map(|(category, amount)| (category.clone(), (*amount * ratio).normalize()))
        .collect();

    let trend = if trend_amount > Decimal::ZERO {
        Trend::Increasing
    } else if trend_amount < Decimal::ZERO {
        Trend::Decreasing
    } else {
        Trend::Stable
    };

    Ok(Prediction {
        predicted_total,
        predicted_by_category,
        based_on_months: summaries
            .iter()
            .map(|s| PeriodTotal {
                period: s.month.clone(),
                total: s.total_spent,
            })
            .collect(),
        trend_amount,
        trend,
    })
}
