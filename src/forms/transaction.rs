//! Financial transaction dialog form.

use crate::{
    entities::{FinancialTransaction, PaymentStatus, TransactionType},
    errors::{Error, Result, ValidationErrors},
};

use super::{
    RecordForm, choice, optional_text, positive_amount, require_text, required_date,
};

/// Raw input of the transaction dialog. `project` and `status` may be left
/// blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    /// Set when editing an existing transaction
    pub id: Option<String>,
    pub description: String,
    pub transaction_type: String,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub project: String,
    pub status: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            id: None,
            description: String::new(),
            transaction_type: TransactionType::Income.as_str().to_string(),
            category: String::new(),
            amount: String::new(),
            date: String::new(),
            project: String::new(),
            status: PaymentStatus::Pending.as_str().to_string(),
        }
    }
}

impl From<&FinancialTransaction> for TransactionForm {
    fn from(transaction: &FinancialTransaction) -> Self {
        Self {
            id: Some(transaction.id.clone()),
            description: transaction.description.clone(),
            transaction_type: transaction.transaction_type.as_str().to_string(),
            category: transaction.category.clone(),
            amount: transaction.amount.to_string(),
            date: transaction.date.to_string(),
            project: transaction.project.clone().unwrap_or_default(),
            status: transaction
                .status
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

impl RecordForm for TransactionForm {
    type Output = FinancialTransaction;

    fn editing_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self, id: &str) -> Result<FinancialTransaction> {
        let mut errors = ValidationErrors::default();

        let description = require_text(
            &mut errors,
            "description",
            &self.description,
            2,
            "Description must be at least 2 characters.",
        );
        let transaction_type = choice(
            &mut errors,
            "type",
            &self.transaction_type,
            TransactionType::from_value,
            "Please select a type.",
        );
        let category = require_text(
            &mut errors,
            "category",
            &self.category,
            1,
            "Please select a category.",
        );
        let amount = positive_amount(
            &mut errors,
            "amount",
            &self.amount,
            "Amount must be a positive number.",
        );
        let date = required_date(&mut errors, "date", &self.date, "Please select a date.");
        let status = if self.status.trim().is_empty() {
            None
        } else {
            choice(
                &mut errors,
                "status",
                &self.status,
                PaymentStatus::from_value,
                "Please select a valid status.",
            )
        };

        match (transaction_type, amount, date) {
            (Some(transaction_type), Some(amount), Some(date)) => {
                errors.into_result(FinancialTransaction {
                    id: id.to_string(),
                    description,
                    transaction_type,
                    category,
                    amount,
                    date,
                    project: optional_text(&self.project),
                    status,
                })
            }
            _ => Err(Error::Validation(errors)),
        }
    }
}
