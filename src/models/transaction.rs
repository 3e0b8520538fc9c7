//! Transaction record model

use serde::Deserialize;

/// A single transaction payload as stored under the `transactions` node.
///
/// Every field can be absent in the stored data. The rendering default
/// for `date`, `description` and `amount` is an empty slot; a missing
/// `timestamp` counts as 0 for ordering.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub timestamp: Option<f64>,
}

impl Transaction {
    /// Ordering key for the newest-first sort.
    pub fn ordering_key(&self) -> f64 {
        self.timestamp.unwrap_or(0.0)
    }

    pub fn date_label(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }

    pub fn description_label(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Amount rendered with two decimals, empty when absent.
    pub fn amount_label(&self) -> String {
        self.amount
            .map(|amount| format!("{:.2}", amount))
            .unwrap_or_default()
    }
}

/// Formatted report for display
#[derive(Debug)]
pub struct TransactionListResult {
    pub formatted_message: String,
    pub is_empty: bool,
}
