// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Named savings goals.
//!
//! Names are not unique. A contribution always lands on the first goal with
//! that name that is not yet completed.

use crate::models::Goal;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalStatus {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub remaining: Decimal,
    pub progress: Decimal,
    pub deadline: Option<String>,
    pub description: String,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalTracker {
    pub goals: Vec<Goal>,
}

impl GoalTracker {
    pub fn new(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    pub fn add_goal(
        &mut self,
        name: &str,
        target_amount: Decimal,
        deadline: Option<String>,
        description: &str,
    ) -> Goal {
        let goal = Goal {
            name: name.to_string(),
            target_amount,
            current_amount: Decimal::ZERO,
            deadline,
            description: description.to_string(),
            is_completed: false,
        };
        self.goals.push(goal.clone());
        goal
    }

    pub fn update_progress(&mut self, name: &str, amount: Decimal) -> Option<&Goal> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.name == name && !g.is_completed)?;
        goal.current_amount += amount;
        if goal.current_amount >= goal.target_amount {
            goal.is_completed = true;
        }
        Some(goal)
    }

    pub fn status(&self) -> Vec<GoalStatus> {
        self.goals
            .iter()
            .map(|g| {
                let progress = if g.target_amount.is_zero() {
                    Decimal::ZERO
                } else {
                    (g.current_amount / g.target_amount * Decimal::ONE_HUNDRED)
                        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
                };
                GoalStatus {
                    name: g.name.clone(),
                    target_amount: g.target_amount,
                    current_amount: g.current_amount,
                    remaining: (g.target_amount - g.current_amount).max(Decimal::ZERO),
                    progress,
                    deadline: g.deadline.clone(),
                    description: g.description.clone(),
                    is_completed: g.is_completed,
                }
            })
            .collect()
    }
}
