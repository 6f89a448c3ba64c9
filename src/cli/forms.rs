//! Validation for the add-expense form. The store accepts anything; these rules
//! only gate what the shell lets through.

use std::fmt;

use crate::domain::{ExpenseItem, BUILT_IN_CATEGORIES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    EmptyName,
    UnknownCategory(String),
    InvalidAmount(String),
    NonPositiveAmount,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::EmptyName => f.write_str("Name cannot be empty."),
            FormError::UnknownCategory(value) => write!(
                f,
                "Unknown type `{}`. Choose one of: {}.",
                value,
                BUILT_IN_CATEGORIES.join(", ")
            ),
            FormError::InvalidAmount(value) => write!(f, "`{}` is not a valid amount.", value),
            FormError::NonPositiveAmount => f.write_str("Amount must be greater than zero."),
        }
    }
}

impl std::error::Error for FormError {}

/// Raw values collected for a new expense.
#[derive(Debug, Clone)]
pub struct ExpenseForm<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub amount: &'a str,
}

impl ExpenseForm<'_> {
    /// Checks the form and builds a fresh record with a new id.
    pub fn submit(&self) -> Result<ExpenseItem, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        let category = canonical_category(self.category)
            .ok_or_else(|| FormError::UnknownCategory(self.category.trim().to_string()))?;
        let amount = parse_amount(self.amount)?;
        Ok(ExpenseItem::new(name, category, amount))
    }
}

/// Matches a built-in category case-insensitively and returns its canonical label.
pub fn canonical_category(value: &str) -> Option<&'static str> {
    let value = value.trim();
    BUILT_IN_CATEGORIES
        .iter()
        .copied()
        .find(|category| category.eq_ignore_ascii_case(value))
}

fn parse_amount(raw: &str) -> Result<f64, FormError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '_'))
        .collect();
    let amount: f64 = cleaned
        .parse()
        .map_err(|_| FormError::InvalidAmount(raw.trim().to_string()))?;
    if !amount.is_finite() {
        return Err(FormError::InvalidAmount(raw.trim().to_string()));
    }
    if amount <= 0.0 {
        return Err(FormError::NonPositiveAmount);
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BUSINESS, PERSONAL};

    fn form<'a>(name: &'a str, category: &'a str, amount: &'a str) -> ExpenseForm<'a> {
        ExpenseForm {
            name,
            category,
            amount,
        }
    }

    #[test]
    fn valid_form_builds_item() {
        let item = form(" Lunch ", "personal", "12.50").submit().expect("valid");
        assert_eq!(item.name, "Lunch");
        assert_eq!(item.category, PERSONAL);
        assert_eq!(item.amount, 12.5);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            form("   ", BUSINESS, "5").submit(),
            Err(FormError::EmptyName)
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert_eq!(
            form("Flight", "Travel", "300").submit(),
            Err(FormError::UnknownCategory("Travel".into()))
        );
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        assert_eq!(
            form("Refund", PERSONAL, "0").submit(),
            Err(FormError::NonPositiveAmount)
        );
        assert_eq!(
            form("Refund", PERSONAL, "-4").submit(),
            Err(FormError::NonPositiveAmount)
        );
    }

    #[test]
    fn malformed_amounts_are_rejected() {
        assert!(matches!(
            form("Snack", PERSONAL, "abc").submit(),
            Err(FormError::InvalidAmount(_))
        ));
        assert!(matches!(
            form("Snack", PERSONAL, "inf").submit(),
            Err(FormError::InvalidAmount(_))
        ));
    }

    #[test]
    fn currency_decorations_are_tolerated() {
        let item = form("Laptop", BUSINESS, "$1,299.99").submit().expect("valid");
        assert_eq!(item.amount, 1299.99);
    }
}
