//! Expenses
//!
//! Additional per-product costs. An expense is either a fixed amount or a percentage of the
//! product's starting price; a [`CostSet`] groups the expenses of one product.

use std::slice;

use rust_decimal::Decimal;

use crate::{
    money::Money,
    rounding::{INTERNAL_PRECISION, round_to},
};

/// How an expense amount is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseKind {
    /// A fixed amount, independent of the product price.
    Fixed(Decimal),

    /// Percentage points of the product's starting price (e.g. `1` for 1%).
    Percentage(Decimal),
}

/// A single named expense line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    description: String,
    kind: ExpenseKind,
}

impl Expense {
    /// Create a fixed expense. Negative amounts clamp to zero.
    pub fn fixed(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            kind: ExpenseKind::Fixed(amount.max(Decimal::ZERO)),
        }
    }

    /// Create a percentage expense. Negative rates clamp to zero.
    pub fn percentage(description: impl Into<String>, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            kind: ExpenseKind::Percentage(rate.max(Decimal::ZERO)),
        }
    }

    /// Expense description, used as the report label.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Expense kind and configured value.
    pub fn kind(&self) -> ExpenseKind {
        self.kind
    }

    /// Amount of this expense for a product with the given starting price.
    ///
    /// The result is labelled with the starting price's currency.
    pub fn calculate_expense(&self, starting_price: &Money) -> Money {
        Money::new(starting_price.currency(), self.raw_amount(starting_price))
    }

    fn raw_amount(&self, starting_price: &Money) -> Decimal {
        match self.kind {
            ExpenseKind::Fixed(amount) => amount,
            ExpenseKind::Percentage(rate) => {
                (rate / Decimal::ONE_HUNDRED).saturating_mul(starting_price.amount())
            }
        }
    }
}

/// All expenses of a product, in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostSet {
    expenses: Vec<Expense>,
}

impl CostSet {
    /// Create a cost set from the given expenses.
    pub fn new(expenses: impl IntoIterator<Item = Expense>) -> Self {
        Self {
            expenses: expenses.into_iter().collect(),
        }
    }

    /// Append an expense.
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Number of expenses.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Returns `true` if there are no expenses.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Iterate over the expenses in order.
    pub fn iter(&self) -> slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    /// Sum of every expense for the given starting price, at internal precision.
    ///
    /// Always computed against the original starting price, never a discounted one. Totals
    /// beyond [`Decimal::MAX`] saturate.
    pub fn calculate_expense(&self, starting_price: &Money) -> Money {
        let total = self
            .expenses
            .iter()
            .map(|expense| expense.raw_amount(starting_price))
            .fold(Decimal::ZERO, Decimal::saturating_add);

        Money::new(starting_price.currency(), round_to(total, INTERNAL_PRECISION))
    }
}

impl FromIterator<Expense> for CostSet {
    fn from_iter<I: IntoIterator<Item = Expense>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a CostSet {
    type Item = &'a Expense;
    type IntoIter = slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
