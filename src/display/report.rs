//! Report formatting for terminal output
//!
//! Summary cards, the category breakdown, the monthly bar chart and the
//! combined dashboard.

use crate::config::Settings;
use crate::models::{Category, TransactionType};
use crate::reports::{CategoryBreakdown, DashboardReport, FinancialSummary, MonthlyData};

use super::transaction::format_transaction_page;
use super::truncate;

const WIDTH: usize = 72;
const BAR_WIDTH: usize = 30;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// The three summary cards: income, expenses, balance
pub fn format_summary(summary: &FinancialSummary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Summary: {} to {}\n",
        settings.format_date(summary.period.start),
        settings.format_date(summary.period.end)
    ));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "{:<18} {:>20}\n",
        "Total Income",
        settings.format_money(summary.total_income)
    ));
    output.push_str(&format!(
        "{:<18} {:>20}\n",
        "Total Expenses",
        settings.format_money(summary.total_expenses)
    ));
    output.push_str(&format!(
        "{:<18} {:>20}\n",
        "Balance",
        settings.format_money(summary.total_balance)
    ));
    output.push_str(&format!(
        "{:<18} {:>20}\n",
        "Transactions", summary.transaction_count
    ));

    output
}

/// Expense breakdown with proportional bars
pub fn format_breakdown(rows: &[CategoryBreakdown], settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Expenses by Category\n");
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    if rows.is_empty() {
        output.push_str("No expense data available.\n");
        return output;
    }

    let max = rows.iter().map(|r| r.percentage).fold(0.0, f64::max);

    for row in rows {
        output.push_str(&format!(
            "{:<18} {:>12} {:>6} {}\n",
            truncate(&row.category, 18),
            settings.format_money(row.amount),
            format_percentage(row.percentage),
            format_bar(row.percentage, max, BAR_WIDTH).trim_end()
        ));
    }

    output
}

/// Income and expense bars per month, oldest first
pub fn format_monthly(series: &[MonthlyData], settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Monthly Overview\n");
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    if series.is_empty() {
        output.push_str("No monthly data available.\n");
        return output;
    }

    let max = series
        .iter()
        .flat_map(|m| [m.income.cents(), m.expenses.cents()])
        .max()
        .unwrap_or(0) as f64;

    for month in series {
        output.push_str(&format!(
            "{:<15} {:<9} {:>12} {}\n",
            month.month,
            "Income",
            settings.format_money(month.income),
            format_bar(month.income.cents() as f64, max, BAR_WIDTH).trim_end()
        ));
        output.push_str(&format!(
            "{:<15} {:<9} {:>12} {}\n",
            "",
            "Expenses",
            settings.format_money(month.expenses),
            format_bar(month.expenses.cents() as f64, max, BAR_WIDTH).trim_end()
        ));
    }

    output
}

/// Every dashboard view in one page of output
pub fn format_dashboard(report: &DashboardReport<'_>, page: usize, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format_summary(&report.summary, settings));
    output.push('\n');
    output.push_str(&format_breakdown(&report.breakdown, settings));
    output.push('\n');
    output.push_str(&format_monthly(&report.monthly, settings));
    output.push('\n');
    output.push_str("Transactions\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format_transaction_page(&report.transactions, page, settings));

    output
}

/// The category table, optionally for one type only
pub fn format_categories(kind: Option<TransactionType>) -> String {
    let mut output = String::new();

    for section in [TransactionType::Income, TransactionType::Expense] {
        if kind.is_some_and(|k| k != section) {
            continue;
        }

        output.push_str(&format!("{} categories\n", section));
        output.push_str(&separator(40));
        output.push('\n');
        for category in Category::for_kind(section) {
            output.push_str(&format!(
                "  {:<15} {:<18} {}\n",
                category.id, category.name, category.color
            ));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::DateRange;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 4), "    ");
        assert_eq!(format_bar(3.0, 0.0, 2), "  ");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.27), "5.3%");
        assert_eq!(format_percentage(100.0), "100%");
    }

    #[test]
    fn test_summary_cards() {
        let summary = FinancialSummary {
            total_income: Money::from_cents(100_000),
            total_expenses: Money::from_cents(30_000),
            total_balance: Money::from_cents(70_000),
            period: DateRange::new(date(2024, 1, 1), date(2024, 1, 31)),
            transaction_count: 2,
        };

        let output = format_summary(&summary, &Settings::default());
        assert!(output.contains("Jan 1, 2024 to Jan 31, 2024"));
        assert!(output.contains("$1,000.00"));
        assert!(output.contains("$300.00"));
        assert!(output.contains("$700.00"));
    }

    #[test]
    fn test_empty_breakdown() {
        let output = format_breakdown(&[], &Settings::default());
        assert!(output.contains("No expense data available."));
    }

    #[test]
    fn test_breakdown_rows() {
        let rows = vec![CategoryBreakdown {
            category_id: "food".into(),
            category: "Food & Dining".into(),
            amount: Money::from_cents(30_000),
            percentage: 100.0,
            color: "#ef4444",
        }];

        let output = format_breakdown(&rows, &Settings::default());
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("100%"));
        assert!(output.contains(&"█".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_monthly_labels() {
        let series = vec![MonthlyData {
            month: "January 2024".into(),
            year: 2024,
            month_number: 1,
            income: Money::from_cents(100_000),
            expenses: Money::from_cents(30_000),
        }];

        let output = format_monthly(&series, &Settings::default());
        assert!(output.contains("January 2024"));
        assert!(output.contains("Expenses"));
    }

    #[test]
    fn test_categories_by_type() {
        let output = format_categories(Some(TransactionType::Income));
        assert!(output.contains("salary"));
        assert!(!output.contains("food"));

        let all = format_categories(None);
        assert!(all.contains("other-expense"));
    }
}
