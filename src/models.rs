// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conventional income categories. Any other string is accepted as-is.
pub const INCOME_CATEGORIES: [&str; 4] = ["salary", "part_time", "bonus", "other"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub date: NaiveDate,
    pub source: String,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub month: String, // YYYY-MM
    pub total_income: Decimal,
    pub needs_percentage: Decimal,
    pub wants_percentage: Decimal,
    pub savings_percentage: Decimal,
    pub needs_amount: Decimal,
    pub wants_amount: Decimal,
    pub savings_amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetType {
    Needs,
    Wants,
    Savings,
}

impl BudgetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetType::Needs => "needs",
            BudgetType::Wants => "wants",
            BudgetType::Savings => "savings",
        }
    }
}

impl fmt::Display for BudgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "needs" => Ok(BudgetType::Needs),
            "wants" => Ok(BudgetType::Wants),
            "savings" => Ok(BudgetType::Savings),
            other => Err(format!(
                "Invalid budget type '{}', expected needs|wants|savings",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: String, // #rrggbb
    pub icon: String,
    pub budget_type: BudgetType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: Option<String>,
    pub description: String,
    pub is_completed: bool,
}
