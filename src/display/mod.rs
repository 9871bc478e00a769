//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the CLI layer.

pub mod report;
pub mod transaction;

pub use report::{
    format_breakdown, format_categories, format_dashboard, format_monthly, format_summary,
};
pub use transaction::{
    format_signed_amount, format_transaction_details, format_transaction_page,
    format_transaction_table, paginate, Page,
};

use crate::audit::AuditEntry;

/// Truncate a string to at most `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Audit entries, one block per entry, oldest first
pub fn format_audit_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries found.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Coffee", 10), "Coffee");
        assert_eq!(truncate("Weekly groceries run", 10), "Weekly ...");
        assert_eq!(truncate("Café au lait", 7), "Café...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_no_audit_entries() {
        assert_eq!(format_audit_entries(&[]), "No audit entries found.\n");
    }
}
