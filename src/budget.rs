// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Needs/wants/savings allocation.

use crate::models::Budget;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Percentage split applied to total income. Defaults to the 50/30/20 rule.
///
/// The three values are not required to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub needs: Decimal,
    pub wants: Decimal,
    pub savings: Decimal,
}

impl Default for Allocation {
    fn default() -> Self {
        Self {
            needs: Decimal::from(50),
            wants: Decimal::from(30),
            savings: Decimal::from(20),
        }
    }
}

impl Allocation {
    pub fn new(needs: Decimal, wants: Decimal, savings: Decimal) -> Self {
        Self {
            needs,
            wants,
            savings,
        }
    }

    pub fn total(&self) -> Decimal {
        self.needs + self.wants + self.savings
    }

    pub fn sums_to_hundred(&self) -> bool {
        self.total() == Decimal::ONE_HUNDRED
    }
}

impl Budget {
    /// Derive a budget for `month`. Amounts are exact products, never rounded.
    pub fn allocate(month: impl Into<String>, total_income: Decimal, split: Allocation) -> Self {
        let share = |pct: Decimal| total_income * pct / Decimal::ONE_HUNDRED;
        Budget {
            month: month.into(),
            total_income,
            needs_percentage: split.needs,
            wants_percentage: split.wants,
            savings_percentage: split.savings,
            needs_amount: share(split.needs),
            wants_amount: share(split.wants),
            savings_amount: share(split.savings),
        }
    }

    pub fn allocation(&self) -> Allocation {
        Allocation::new(
            self.needs_percentage,
            self.wants_percentage,
            self.savings_percentage,
        )
    }
}
