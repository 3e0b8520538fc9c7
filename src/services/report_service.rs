use std::collections::BTreeMap;

use crate::models::{Transaction, TransactionListResult};

/// Header printed above the record lines.
const REPORT_HEADER: &str = "Last 10 transactions:";

/// Fixed line for an empty or absent result.
const EMPTY_MESSAGE: &str = "No transactions found.";

/// Build the printable report for a query result.
///
/// The service-assigned keys are discarded for display, but the key
/// order of the map is what breaks ties between equal timestamps: the
/// sort below is stable, so tied records keep ascending key order.
pub fn build_transaction_report(
    result: Option<BTreeMap<String, Transaction>>,
) -> TransactionListResult {
    let records = match result {
        Some(records) if !records.is_empty() => records,
        _ => {
            return TransactionListResult {
                formatted_message: format!("{}\n", EMPTY_MESSAGE),
                is_empty: true,
            }
        }
    };

    let mut transactions: Vec<Transaction> = records.into_values().collect();
    transactions.sort_by(|a, b| b.ordering_key().total_cmp(&a.ordering_key()));

    let mut message = format!("{}\n", REPORT_HEADER);
    for tx in &transactions {
        message.push_str(&format_line(tx));
    }

    TransactionListResult {
        formatted_message: message,
        is_empty: false,
    }
}

/// One report line: `- <date>: <description> (<amount> EUR)`
fn format_line(tx: &Transaction) -> String {
    format!(
        "- {}: {} ({} EUR)\n",
        tx.date_label(),
        tx.description_label(),
        tx.amount_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(date: &str, description: &str, amount: f64, timestamp: f64) -> Transaction {
        Transaction {
            date: Some(date.to_string()),
            description: Some(description.to_string()),
            amount: Some(amount),
            timestamp: Some(timestamp),
        }
    }

    #[test]
    fn test_absent_result_reports_no_transactions() {
        let report = build_transaction_report(None);

        assert!(report.is_empty);
        assert_eq!(report.formatted_message, "No transactions found.\n");
    }

    #[test]
    fn test_empty_mapping_reports_no_transactions() {
        let report = build_transaction_report(Some(BTreeMap::new()));

        assert!(report.is_empty);
        assert_eq!(report.formatted_message, "No transactions found.\n");
    }

    #[test]
    fn test_records_print_newest_first() {
        let mut records = BTreeMap::new();
        records.insert("-Na".to_string(), tx("2024-01-01", "Rent", 900.0, 100.0));
        records.insert("-Nb".to_string(), tx("2024-01-03", "Groceries", 54.2, 300.0));
        records.insert("-Nc".to_string(), tx("2024-01-02", "Coffee", 4.5, 200.0));

        let report = build_transaction_report(Some(records));

        assert!(!report.is_empty);
        assert_eq!(
            report.formatted_message,
            "Last 10 transactions:\n\
             - 2024-01-03: Groceries (54.20 EUR)\n\
             - 2024-01-02: Coffee (4.50 EUR)\n\
             - 2024-01-01: Rent (900.00 EUR)\n"
        );
    }

    #[test]
    fn test_one_line_per_record() {
        let mut records = BTreeMap::new();
        for i in 0..7 {
            records.insert(
                format!("-N{}", i),
                tx("2024-01-01", "Item", 1.0, i as f64),
            );
        }

        let report = build_transaction_report(Some(records));

        assert_eq!(report.formatted_message.lines().count(), 8);
        assert!(report.formatted_message.starts_with("Last 10 transactions:\n"));
    }

    #[test]
    fn test_missing_fields_render_as_empty_slots() {
        let mut records = BTreeMap::new();
        records.insert(
            "-Na".to_string(),
            Transaction {
                date: Some("2024-01-01".to_string()),
                description: Some("Coffee".to_string()),
                amount: None,
                timestamp: Some(100.0),
            },
        );
        records.insert(
            "-Nb".to_string(),
            Transaction {
                date: None,
                description: None,
                amount: Some(12.0),
                timestamp: Some(200.0),
            },
        );

        let report = build_transaction_report(Some(records));

        assert_eq!(
            report.formatted_message,
            "Last 10 transactions:\n\
             - :  (12.00 EUR)\n\
             - 2024-01-01: Coffee ( EUR)\n"
        );
    }

    #[test]
    fn test_missing_timestamp_sorts_as_zero() {
        let mut records = BTreeMap::new();
        records.insert(
            "-Na".to_string(),
            Transaction {
                date: Some("2023-12-31".to_string()),
                description: Some("Unknown".to_string()),
                amount: Some(1.0),
                timestamp: None,
            },
        );
        records.insert("-Nb".to_string(), tx("2024-01-01", "Rent", 900.0, 50.0));

        let report = build_transaction_report(Some(records));

        assert_eq!(
            report.formatted_message,
            "Last 10 transactions:\n\
             - 2024-01-01: Rent (900.00 EUR)\n\
             - 2023-12-31: Unknown (1.00 EUR)\n"
        );
    }

    #[test]
    fn test_equal_timestamps_keep_key_order() {
        let mut records = BTreeMap::new();
        records.insert("-Nc".to_string(), tx("2024-01-01", "Third", 3.0, 100.0));
        records.insert("-Na".to_string(), tx("2024-01-01", "First", 1.0, 100.0));
        records.insert("-Nb".to_string(), tx("2024-01-01", "Second", 2.0, 100.0));

        let report = build_transaction_report(Some(records));

        assert_eq!(
            report.formatted_message,
            "Last 10 transactions:\n\
             - 2024-01-01: First (1.00 EUR)\n\
             - 2024-01-01: Second (2.00 EUR)\n\
             - 2024-01-01: Third (3.00 EUR)\n"
        );
    }

    #[test]
    fn test_report_is_idempotent() {
        let mut records = BTreeMap::new();
        records.insert("-Na".to_string(), tx("2024-01-01", "Rent", 900.0, 100.0));
        records.insert("-Nb".to_string(), tx("2024-01-02", "Coffee", 4.5, 200.0));

        let first = build_transaction_report(Some(records.clone()));
        let second = build_transaction_report(Some(records));

        assert_eq!(first.formatted_message, second.formatted_message);
    }
}
