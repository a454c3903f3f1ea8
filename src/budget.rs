// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::BudgetStatus;
use rust_decimal::Decimal;

/// Compares a month's expenses with the budget. A budget of 0 is "unset":
/// usage reads 0% and it is never exceeded. `percentage_used` is not clamped,
/// but saturates at `Decimal::MAX` when the ratio is not representable.
pub fn evaluate(budget: Decimal, month_expenses: Decimal) -> BudgetStatus {
    let percentage_used = if budget > Decimal::ZERO {
        month_expenses
            .checked_div(budget)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    };
    BudgetStatus {
        budget,
        spent: month_expenses,
        percentage_used,
        is_over_budget: budget > Decimal::ZERO && month_expenses > budget,
        overage_amount: month_expenses.saturating_sub(budget).max(Decimal::ZERO),
        remaining_amount: budget.saturating_sub(month_expenses),
    }
}

impl BudgetStatus {
    pub fn is_set(&self) -> bool {
        self.budget > Decimal::ZERO
    }
}
