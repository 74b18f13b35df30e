//! Receipt
//!
//! The rounded result of pricing a product and its console report.

use std::{fmt, io};

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    expenses::CostSet,
    money::Money,
    rounding::{REPORT_PRECISION, round_to},
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The report sink could not be written to.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// One line of a price report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    /// Starting price, always present
    Cost(Money),

    /// Tax, present when non-zero
    Tax(Money),

    /// Total discount, present when non-zero
    Discounts(Money),

    /// A single non-zero expense
    Expense {
        /// Expense description
        description: String,

        /// Expense amount for the starting price
        amount: Money,
    },

    /// Final price, always present
    Total(Money),
}

impl ReportLine {
    /// Label printed before the amount.
    pub fn label(&self) -> &str {
        match self {
            Self::Cost(_) => "Cost",
            Self::Tax(_) => "Tax",
            Self::Discounts(_) => "Discounts",
            Self::Expense { description, .. } => description.as_str(),
            Self::Total(_) => "TOTAL",
        }
    }

    /// Amount of the line.
    pub fn amount(&self) -> Money {
        match self {
            Self::Cost(amount)
            | Self::Tax(amount)
            | Self::Discounts(amount)
            | Self::Expense { amount, .. }
            | Self::Total(amount) => *amount,
        }
    }

    /// Returns `true` for expense lines.
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense { .. })
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.label(), self.amount())
    }
}

/// Final, rounded result of a price calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    starting_price: Money,
    tax_amount: Money,
    total_discount: Money,
    total_expenses: Money,
    total_price: Money,
    costs: CostSet,
}

impl Receipt {
    /// Create a new receipt with the given details.
    pub fn new(
        starting_price: Money,
        tax_amount: Money,
        total_discount: Money,
        total_expenses: Money,
        total_price: Money,
        costs: CostSet,
    ) -> Self {
        Self {
            starting_price,
            tax_amount,
            total_discount,
            total_expenses,
            total_price,
            costs,
        }
    }

    /// Price before tax, discounts and expenses
    pub fn starting_price(&self) -> Money {
        self.starting_price
    }

    /// Tax amount
    pub fn tax_amount(&self) -> Money {
        self.tax_amount
    }

    /// Capped total of all discounts
    pub fn total_discount(&self) -> Money {
        self.total_discount
    }

    /// Sum of all expenses
    pub fn total_expenses(&self) -> Money {
        self.total_expenses
    }

    /// Final price
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Product expenses, for line item reporting
    pub fn costs(&self) -> &CostSet {
        &self.costs
    }

    /// Report lines in print order, omitting tax, discount and expense lines that round to zero.
    ///
    /// Expense lines are recalculated from the starting price rather than taken from
    /// [`Receipt::total_expenses`].
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines = vec![ReportLine::Cost(self.starting_price)];

        if !self.tax_amount.is_zero() {
            lines.push(ReportLine::Tax(self.tax_amount));
        }

        if !self.total_discount.is_zero() {
            lines.push(ReportLine::Discounts(self.total_discount));
        }

        lines.extend(self.costs.iter().filter_map(|expense| {
            let amount = expense.calculate_expense(&self.starting_price);

            let shown = !round_to(amount.amount(), REPORT_PRECISION).is_zero();

            shown.then(|| ReportLine::Expense {
                description: expense.description().to_string(),
                amount,
            })
        }));

        lines.push(ReportLine::Total(self.total_price));

        lines
    }

    /// The report text without expense lines.
    pub fn report(&self) -> String {
        self.lines()
            .iter()
            .filter(|line| !line.is_expense())
            .map(|line| format!("{line}\n"))
            .collect()
    }

    /// Writes every report line, including expenses, to `out`.
    ///
    /// Returns the same text as [`Receipt::report`].
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be written to.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<String, ReceiptError> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }

        Ok(self.report())
    }

    /// Writes the report lines as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be written to.
    pub fn write_table(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Amount"]);

        for line in self.lines() {
            builder.push_record([line.label().to_string(), line.amount().to_string()]);
        }

        let mut table = builder.build();

        table.with(Style::rounded());
        table.modify(Columns::new(1..), Alignment::right());

        writeln!(out, "{table}")?;

        Ok(())
    }
}
