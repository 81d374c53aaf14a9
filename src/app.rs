// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Application state: ledger, budget, categories and goals backed by a store.
//!
//! Every mutating operation writes the affected record kind through to the
//! store before returning. Store failures never abort an operation: loads fall
//! back to empty state and failed saves are logged.

use crate::backup;
use crate::budget::Allocation;
use crate::charts::{self, BudgetComparison, ChartPoint};
use crate::error::Result;
use crate::export::{self, Snapshot};
use crate::goals::{GoalStatus, GoalTracker};
use crate::ledger::{ExpensePatch, IncomeSummary, Ledger};
use crate::models::{Budget, Category, Expense, Goal, Income};
use crate::predict::{self, PeriodTotal, Prediction};
use crate::progress::{self, BudgetProgress, Suggestion};
use crate::registry::{CategoryPatch, CategoryRegistry};
use crate::store::{RecordKind, Store};
use crate::summary::{self, MonthlySummary, Statistics, WeeklySummary, YearlySummary};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub type Clock = Box<dyn Fn() -> NaiveDate>;

pub fn system_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn load_or_default<T: Default>(kind: RecordKind, loaded: Result<T>) -> T {
    match loaded {
        Ok(v) => v,
        Err(err) => {
            warn!(%kind, error = %err, "failed to load records, starting empty");
            T::default()
        }
    }
}

pub struct App {
    pub ledger: Ledger,
    pub budget: Option<Budget>,
    pub categories: CategoryRegistry,
    pub goals: GoalTracker,
    store: Box<dyn Store>,
    clock: Clock,
}

impl App {
    /// Loads every record kind from `store`, seeding the default categories
    /// when none are stored.
    pub fn load(store: Box<dyn Store>) -> Self {
        let ledger = Ledger::new(
            load_or_default(RecordKind::Expenses, store.load_expenses()),
            load_or_default(RecordKind::Incomes, store.load_incomes()),
        );
        let budget = load_or_default(RecordKind::Budget, store.load_budget());
        let categories =
            CategoryRegistry::new(load_or_default(RecordKind::Categories, store.load_categories()));
        let goals = GoalTracker::new(load_or_default(RecordKind::Goals, store.load_goals()));
        debug!(
            expenses = ledger.expenses.len(),
            incomes = ledger.incomes.len(),
            categories = categories.len(),
            goals = goals.goals.len(),
            "state loaded"
        );

        let mut app = Self {
            ledger,
            budget,
            categories,
            goals,
            store,
            clock: Box::new(system_today),
        };
        if app.categories.seed_if_empty() {
            info!("seeded default categories");
            app.persist(RecordKind::Categories);
        }
        app
    }

    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn current_month(&self) -> String {
        summary::month_key(self.today())
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Writes one record kind through to the store. Returns false on failure.
    pub fn persist(&mut self, kind: RecordKind) -> bool {
        let saved = match kind {
            RecordKind::Expenses => self.store.save_expenses(&self.ledger.expenses),
            RecordKind::Incomes => self.store.save_incomes(&self.ledger.incomes),
            RecordKind::Budget => self.store.save_budget(self.budget.as_ref()),
            RecordKind::Categories => self.store.save_categories(&self.categories.to_vec()),
            RecordKind::Goals => self.store.save_goals(&self.goals.goals),
        };
        match saved {
            Ok(()) => {
                debug!(%kind, "saved");
                true
            }
            Err(err) => {
                warn!(%kind, error = %err, "failed to save records");
                false
            }
        }
    }

    fn month_or_current(&self, month: Option<&str>) -> String {
        month.map_or_else(|| self.current_month(), str::to_string)
    }

    // ---- budget -------------------------------------------------------

    /// Always keyed to the current month; replaces any previous budget.
    pub fn set_budget(&mut self, total_income: Decimal, split: Allocation) -> Budget {
        if !split.sums_to_hundred() {
            warn!(total = %split.total(), "budget percentages do not sum to 100");
        }
        let budget = Budget::allocate(self.current_month(), total_income, split);
        self.budget = Some(budget.clone());
        self.persist(RecordKind::Budget);
        info!(month = %budget.month, income = %total_income, "budget set");
        budget
    }

    // ---- expenses -----------------------------------------------------

    pub fn add_expense(
        &mut self,
        category: &str,
        amount: Decimal,
        description: &str,
        date: Option<NaiveDate>,
    ) -> Expense {
        let date = date.unwrap_or_else(|| self.today());
        let expense = self.ledger.add_expense(Expense {
            date,
            category: category.to_string(),
            amount,
            description: description.to_string(),
        });
        self.persist(RecordKind::Expenses);
        expense
    }

    pub fn list_expenses(
        &self,
        month: Option<&str>,
        limit: Option<usize>,
    ) -> Vec<(usize, Expense)> {
        self.ledger
            .list_expenses(month, limit)
            .into_iter()
            .map(|(i, e)| (i, e.clone()))
            .collect()
    }

    pub fn edit_expense(&mut self, index: usize, patch: ExpensePatch) -> Option<Expense> {
        let edited = self.ledger.edit_expense(index, patch).cloned()?;
        self.persist(RecordKind::Expenses);
        Some(edited)
    }

    pub fn delete_expense(&mut self, index: usize) -> bool {
        let deleted = self.ledger.delete_expense(index);
        if deleted {
            self.persist(RecordKind::Expenses);
        }
        deleted
    }

    // ---- incomes ------------------------------------------------------

    pub fn add_income(
        &mut self,
        source: &str,
        amount: Decimal,
        category: &str,
        description: &str,
        date: Option<NaiveDate>,
    ) -> Income {
        let date = date.unwrap_or_else(|| self.today());
        let income = self.ledger.add_income(Income {
            date,
            source: source.to_string(),
            amount,
            category: category.to_string(),
            description: description.to_string(),
        });
        self.persist(RecordKind::Incomes);
        income
    }

    pub fn list_incomes(&self, month: Option<&str>, limit: Option<usize>) -> Vec<Income> {
        self.ledger
            .list_incomes(month, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn income_summary(&self, month: Option<&str>) -> IncomeSummary {
        self.ledger.income_summary(&self.month_or_current(month))
    }

    // ---- aggregation --------------------------------------------------

    pub fn monthly_summary(&self, month: Option<&str>) -> MonthlySummary {
        summary::monthly_summary(&self.ledger, &self.month_or_current(month))
    }

    pub fn weekly_summary(&self, week_start: Option<NaiveDate>) -> WeeklySummary {
        let start = week_start.unwrap_or_else(|| summary::week_start_for(self.today()));
        summary::weekly_summary(&self.ledger, start)
    }

    pub fn yearly_summary(&self, year: Option<i32>) -> YearlySummary {
        summary::yearly_summary(&self.ledger, year.unwrap_or_else(|| self.today().year()))
    }

    pub fn statistics(&self, month: Option<&str>) -> Result<Statistics> {
        summary::statistics(&self.ledger, month)
    }

    // ---- progress -----------------------------------------------------

    pub fn check_overspending(&self, month: Option<&str>) -> Vec<Suggestion> {
        progress::check_overspending(
            &self.ledger,
            self.budget.as_ref(),
            &self.month_or_current(month),
        )
    }

    pub fn budget_progress(&self, month: Option<&str>) -> Result<BudgetProgress> {
        progress::budget_progress(&self.ledger, self.budget.as_ref(), &self.month_or_current(month))
    }

    pub fn predict_next_month(&self) -> Result<Prediction> {
        predict::predict_next_month(&self.ledger, self.today())
    }

    // ---- charts -------------------------------------------------------

    pub fn category_breakdown(&self, month: Option<&str>) -> Vec<ChartPoint> {
        charts::category_breakdown(&self.ledger, &self.month_or_current(month))
    }

    pub fn monthly_trend(&self, months: u32) -> Vec<PeriodTotal> {
        charts::monthly_trend(&self.ledger, self.today(), months)
    }

    pub fn budget_vs_actual(&self, month: Option<&str>) -> Result<Vec<BudgetComparison>> {
        charts::budget_vs_actual(&self.ledger, self.budget.as_ref(), &self.month_or_current(month))
    }

    // ---- categories ---------------------------------------------------

    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.to_vec()
    }

    pub fn add_category(&mut self, category: Category) -> Category {
        let added = self.categories.add(category);
        self.persist(RecordKind::Categories);
        added
    }

    pub fn update_category(&mut self, name: &str, patch: CategoryPatch) -> Option<Category> {
        let updated = self.categories.update(name, patch).cloned()?;
        self.persist(RecordKind::Categories);
        Some(updated)
    }

    pub fn remove_category(&mut self, name: &str) -> bool {
        let removed = self.categories.remove(name);
        if removed {
            self.persist(RecordKind::Categories);
        }
        removed
    }

    // ---- goals --------------------------------------------------------

    pub fn add_goal(
        &mut self,
        name: &str,
        target_amount: Decimal,
        deadline: Option<String>,
        description: &str,
    ) -> Goal {
        let goal = self.goals.add_goal(name, target_amount, deadline, description);
        self.persist(RecordKind::Goals);
        goal
    }

    pub fn update_goal_progress(&mut self, name: &str, amount: Decimal) -> Option<Goal> {
        let goal = self.goals.update_progress(name, amount).cloned()?;
        self.persist(RecordKind::Goals);
        if goal.is_completed {
            info!(goal = %goal.name, "goal completed");
        }
        Some(goal)
    }

    pub fn goals_status(&self) -> Vec<GoalStatus> {
        self.goals.status()
    }

    // ---- whole-state --------------------------------------------------

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            budget: self.budget.clone(),
            expenses: self.ledger.expenses.clone(),
            incomes: self.ledger.incomes.clone(),
            categories: self.categories.to_vec(),
            goals: self.goals.goals.clone(),
        }
    }

    /// Replaces all in-memory state and writes every kind through.
    pub fn replace_state(&mut self, snapshot: Snapshot) -> bool {
        self.ledger = Ledger::new(snapshot.expenses, snapshot.incomes);
        self.budget = snapshot.budget;
        self.categories = CategoryRegistry::new(snapshot.categories);
        self.goals = GoalTracker::new(snapshot.goals);
        let mut all_saved = true;
        for kind in RecordKind::ALL {
            all_saved &= self.persist(kind);
        }
        info!(saved = all_saved, "state replaced");
        all_saved
    }

    pub fn create_backup(&self, root: &Path, now: NaiveDateTime) -> Result<PathBuf> {
        backup::create_backup(self.store(), root, now)
    }

    pub fn restore_backup(&mut self, dir: &Path) -> Result<bool> {
        let snapshot = backup::read_backup(dir)?;
        info!(path = %dir.display(), "restoring backup");
        Ok(self.replace_state(snapshot))
    }

    pub fn import_json(&mut self, path: &Path) -> Result<bool> {
        let snapshot = export::import_json_file(path)?;
        Ok(self.replace_state(snapshot))
    }
}
