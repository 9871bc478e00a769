//! Category reference table
//!
//! Categories are fixed at compile time. Their ids are a stable vocabulary
//! shared by filters and persisted transactions: renaming one orphans every
//! stored transaction that refers to it.

use std::fmt;

use super::transaction::TransactionType;

/// Color used for category ids that are not in the table
pub const NEUTRAL_COLOR: &str = "#6b7280";

/// A fixed classification tag with display metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier stored in transactions
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Whether this category classifies income or expenses
    pub kind: TransactionType,
    /// Display color (hex)
    pub color: &'static str,
}

const fn category(
    id: &'static str,
    name: &'static str,
    kind: TransactionType,
    color: &'static str,
) -> Category {
    Category {
        id,
        name,
        kind,
        color,
    }
}

/// The complete category table, income categories first
pub const CATEGORIES: &[Category] = &[
    category("salary", "Salary", TransactionType::Income, "#22c55e"),
    category("freelance", "Freelance", TransactionType::Income, "#3b82f6"),
    category("investment", "Investment", TransactionType::Income, "#8b5cf6"),
    category("business", "Business", TransactionType::Income, "#f59e0b"),
    category("other-income", "Other Income", TransactionType::Income, "#6b7280"),
    category("food", "Food & Dining", TransactionType::Expense, "#ef4444"),
    category("shopping", "Shopping", TransactionType::Expense, "#f97316"),
    category("transport", "Transportation", TransactionType::Expense, "#eab308"),
    category("utilities", "Utilities", TransactionType::Expense, "#84cc16"),
    category("entertainment", "Entertainment", TransactionType::Expense, "#06b6d4"),
    category("healthcare", "Healthcare", TransactionType::Expense, "#0ea5e9"),
    category("education", "Education", TransactionType::Expense, "#6366f1"),
    category("housing", "Housing", TransactionType::Expense, "#8b5cf6"),
    category("savings", "Savings", TransactionType::Expense, "#a855f7"),
    category("other-expense", "Other Expenses", TransactionType::Expense, "#6b7280"),
];

impl Category {
    /// All categories in table order
    pub fn all() -> &'static [Category] {
        CATEGORIES
    }

    /// Look up a category by id
    pub fn find(id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id == id)
    }

    /// Categories that classify the given transaction type
    pub fn for_kind(kind: TransactionType) -> impl Iterator<Item = &'static Category> {
        CATEGORIES.iter().filter(move |c| c.kind == kind)
    }

    /// Display name for an id, falling back to the raw id when unknown
    pub fn display_name(id: &str) -> &str {
        Self::find(id).map_or(id, |c| c.name)
    }

    /// Display color for an id, falling back to the neutral color when unknown
    pub fn display_color(id: &str) -> &'static str {
        Self::find(id).map(|c| c.color).unwrap_or(NEUTRAL_COLOR)
    }

    /// Check whether a category id may be used with a transaction type
    pub fn accepts(id: &str, kind: TransactionType) -> bool {
        Self::find(id).is_some_and(|c| c.kind == kind)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
