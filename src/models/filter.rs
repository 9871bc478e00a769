//! Filter state
//!
//! A user-selected predicate over transactions: type, category and time
//! period. Held in memory only; the default shows everything in the current
//! month.

use std::fmt;
use std::str::FromStr;

use super::transaction::TransactionType;

/// Restrict by transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeFilter {
    pub fn accepts(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == kind,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<TransactionType>()
            .map(Self::Only)
            .map_err(|_| format!("Invalid type filter: '{}'. Use all, income, or expense", s))
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(kind) => write!(f, "{}", kind.as_str()),
        }
    }
}

/// Restrict by category id
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(id) => write!(f, "{}", id),
        }
    }
}

/// Which time window a filter covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    CurrentMonth,
    LastMonth,
    Custom,
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current-month" | "current" | "this-month" => Ok(Self::CurrentMonth),
            "last-month" | "last" | "previous-month" => Ok(Self::LastMonth),
            "custom" => Ok(Self::Custom),
            other => Err(format!(
                "Invalid period: '{}'. Use current-month, last-month, or custom",
                other
            )),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentMonth => write!(f, "current-month"),
            Self::LastMonth => write!(f, "last-month"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// The complete filter selection
///
/// Custom bounds are kept as the raw strings the user typed; an absent or
/// unparsable bound falls back to the current month when the period is
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub kind: TypeFilter,
    pub category: CategoryFilter,
    pub period: Period,
    pub custom_start: Option<String>,
    pub custom_end: Option<String>,
}

impl FilterState {
    /// Create the default filter (everything in the current month)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by transaction type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = TypeFilter::Only(kind);
        self
    }

    /// Filter by category id
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Only(category.into());
        self
    }

    /// Select the previous calendar month
    pub fn last_month(mut self) -> Self {
        self.period = Period::LastMonth;
        self
    }

    /// Select a custom inclusive range from `YYYY-MM-DD` strings
    pub fn custom(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.period = Period::Custom;
        self.custom_start = Some(start.into());
        self.custom_end = Some(end.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = FilterState::default();
        assert_eq!(filter.kind, TypeFilter::All);
        assert_eq!(filter.category, CategoryFilter::All);
        assert_eq!(filter.period, Period::CurrentMonth);
        assert!(filter.custom_start.is_none());
    }

    #[test]
    fn test_builder() {
        let filter = FilterState::new()
            .kind(TransactionType::Expense)
            .category("food")
            .custom("2024-01-01", "2024-01-31");

        assert!(filter.kind.accepts(TransactionType::Expense));
        assert!(!filter.kind.accepts(TransactionType::Income));
        assert!(filter.category.accepts("food"));
        assert!(!filter.category.accepts("transport"));
        assert_eq!(filter.period, Period::Custom);
        assert_eq!(filter.custom_end.as_deref(), Some("2024-01-31"));
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!("all".parse::<TypeFilter>(), Ok(TypeFilter::All));
        assert_eq!(
            "income".parse::<TypeFilter>(),
            Ok(TypeFilter::Only(TransactionType::Income))
        );
        assert!("both".parse::<TypeFilter>().is_err());

        assert_eq!("ALL".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "food".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only("food".into()))
        );

        assert_eq!("last-month".parse::<Period>(), Ok(Period::LastMonth));
        assert!("yesterday".parse::<Period>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for period in [Period::CurrentMonth, Period::LastMonth, Period::Custom] {
            assert_eq!(period.to_string().parse::<Period>(), Ok(period));
        }
    }
}
