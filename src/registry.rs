// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Category metadata keyed by name.

use crate::models::{BudgetType, Category};
use std::collections::BTreeMap;

const DEFAULTS: [(&str, &str, &str, BudgetType); 10] = [
    ("rent", "#e74c3c", "🏠", BudgetType::Needs),
    ("groceries", "#27ae60", "🛒", BudgetType::Needs),
    ("utilities", "#f39c12", "💡", BudgetType::Needs),
    ("transport", "#3498db", "🚌", BudgetType::Needs),
    ("insurance", "#16a085", "🛡", BudgetType::Needs),
    ("entertainment", "#9b59b6", "🎬", BudgetType::Wants),
    ("dining", "#e67e22", "🍽", BudgetType::Wants),
    ("shopping", "#e91e63", "🛍", BudgetType::Wants),
    ("hobbies", "#1abc9c", "🎨", BudgetType::Wants),
    ("savings", "#2ecc71", "💰", BudgetType::Savings),
];

/// Fields to overwrite on an existing category.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub color: Option<String>,
    pub icon: Option<String>,
    pub budget_type: Option<BudgetType>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryRegistry {
    categories: BTreeMap<String, Category>,
}

impl CategoryRegistry {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: categories
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
        }
    }

    pub fn defaults() -> Vec<Category> {
        DEFAULTS
            .iter()
            .map(|(name, color, icon, budget_type)| Category {
                name: name.to_string(),
                color: color.to_string(),
                icon: icon.to_string(),
                budget_type: *budget_type,
            })
            .collect()
    }

    /// Returns true when the defaults were inserted.
    pub fn seed_if_empty(&mut self) -> bool {
        if !self.categories.is_empty() {
            return false;
        }
        *self = Self::new(Self::defaults());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Ordered by name.
    pub fn list(&self) -> Vec<&Category> {
        self.categories.values().collect()
    }

    pub fn to_vec(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }

    /// Inserts or replaces.
    pub fn add(&mut self, category: Category) -> Category {
        self.categories
            .insert(category.name.clone(), category.clone());
        category
    }

    pub fn update(&mut self, name: &str, patch: CategoryPatch) -> Option<&Category> {
        let category = self.categories.get_mut(name)?;
        if let Some(color) = patch.color {
            category.color = color;
        }
        if let Some(icon) = patch.icon {
            category.icon = icon;
        }
        if let Some(budget_type) = patch.budget_type {
            category.budget_type = budget_type;
        }
        Some(category)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.categories.remove(name).is_some()
    }
}
