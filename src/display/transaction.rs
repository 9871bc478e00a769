//! Transaction display formatting
//!
//! Tables for transaction listings and the detail view of a single record.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Transaction, TransactionType};

use super::truncate;

/// One row of the transaction table
#[derive(Debug, Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            id: txn.id.to_string(),
            date: settings.format_date(txn.date),
            description: truncate(&txn.description, 30),
            category: txn.category_name().to_string(),
            kind: txn.kind.to_string(),
            amount: format_signed_amount(txn, settings),
        }
    }
}

/// Amount with a leading `+` for income and `-` for expenses
pub fn format_signed_amount(txn: &Transaction, settings: &Settings) -> String {
    let sign = match txn.kind {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };
    format!("{}{}", sign, settings.format_money(txn.amount))
}

/// Format transactions as a table, in the order given
pub fn format_transaction_table(transactions: &[&Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, settings))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::single(5)).with(Alignment::right()));

    format!("{}\n", table)
}

/// One page of a longer listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number actually shown
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice `items` into pages of `page_size` and return page `page` (1-based)
///
/// Out-of-range page numbers are clamped to the first or last page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let number = page.clamp(1, total_pages);

    let start = (number - 1) * page_size;
    let end = (start + page_size).min(items.len());

    Page {
        items: &items[start.min(items.len())..end],
        number,
        total_pages,
        total_items: items.len(),
    }
}

/// Format one page of a listing with a position footer
pub fn format_transaction_page(
    transactions: &[&Transaction],
    page: usize,
    settings: &Settings,
) -> String {
    let page = paginate(transactions, page, settings.page_size);
    let mut output = format_transaction_table(page.items, settings);

    if page.total_items > 0 {
        let first = (page.number - 1) * settings.page_size.max(1) + 1;
        output.push_str(&format!(
            "Showing {}-{} of {} (page {} of {})\n",
            first,
            first + page.items.len() - 1,
            page.total_items,
            page.number,
            page.total_pages
        ));
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Full ID:     {}\n", txn.id.as_str()));
    output.push_str(&format!("Date:        {}\n", settings.format_date(txn.date)));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category_name()));
    output.push_str(&format!("Amount:      {}\n", format_signed_amount(txn, settings)));
    output.push_str(&format!(
        "Created:     {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if txn.updated_at != txn.created_at {
        output.push_str(&format!(
            "Updated:     {}\n",
            txn.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionFields};
    use chrono::{NaiveDate, Utc};

    fn coffee() -> Transaction {
        Transaction::new(
            TransactionFields {
                description: "Coffee".into(),
                amount: Money::from_cents(350),
                kind: TransactionType::Expense,
                category: "food".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_table() {
        let output = format_transaction_table(&[], &Settings::default());
        assert_eq!(output, "No transactions found.\n");
    }

    #[test]
    fn test_table_contains_row_values() {
        let txn = coffee();
        let output = format_transaction_table(&[&txn], &Settings::default());

        assert!(output.contains("Description"));
        assert!(output.contains("Coffee"));
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("-$3.50"));
        assert!(output.contains("Jan 1, 2024"));
        assert!(output.contains(&txn.id.to_string()));
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=7).collect();

        let first = paginate(&items, 1, 3);
        assert_eq!(first.items, &[1, 2, 3]);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 3, 3);
        assert_eq!(last.items, &[7]);

        let clamped = paginate(&items, 99, 3);
        assert_eq!(clamped.number, 3);

        let zero = paginate(&items, 0, 3);
        assert_eq!(zero.number, 1);
    }

    #[test]
    fn test_paginate_empty() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 15);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_page_footer() {
        let txn = coffee();
        let list = vec![&txn, &txn, &txn];
        let settings = Settings {
            page_size: 2,
            ..Settings::default()
        };

        let output = format_transaction_page(&list, 2, &settings);
        assert!(output.contains("Showing 3-3 of 3 (page 2 of 2)"));
    }

    #[test]
    fn test_details() {
        let txn = coffee();
        let output = format_transaction_details(&txn, &Settings::default());
        assert!(output.contains("Description: Coffee"));
        assert!(output.contains("Type:        Expense"));
        assert!(!output.contains("Updated:"));
    }
}
