//! Financial transaction entity - Money in or out of the business.
//!
//! Each transaction has a `transaction_type` (income/expense), a free-text
//! `category`, a positive `amount` and a date. `project` optionally points at
//! a project id; the reference is not enforced and may dangle after the
//! project is deleted. `status` is only meaningful for income.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Record, string_enum};
use crate::core::ids::EntityKind;

/// Direction of the money flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionType {
    /// Money received
    Income,
    /// Money spent
    Expense,
}

string_enum!(TransactionType {
    Income => "income",
    Expense => "expense",
});

/// Collection state of an income transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    /// Received
    Paid,
    /// Invoiced, not yet due
    Pending,
    /// Past due
    Overdue,
}

string_enum!(PaymentStatus {
    Paid => "paid",
    Pending => "pending",
    Overdue => "overdue",
});

/// Financial transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTransaction {
    /// `TRX-NNN`
    pub id: String,
    /// Human-readable description
    pub description: String,
    /// Income or expense
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Free-text category (e.g. "Materials", "Labor")
    pub category: String,
    /// Always positive; the direction comes from `transaction_type`
    pub amount: f64,
    /// Booking date
    pub date: NaiveDate,
    /// Related project id, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Payment state, for income
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
}

impl FinancialTransaction {
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Amount with the sign of its direction: positive for income,
    /// negative for expense.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl Record for FinancialTransaction {
    const KIND: EntityKind = EntityKind::Transaction;

    fn id(&self) -> &str {
        &self.id
    }
}
