//! The expense record and the cosmetic magnitude tiers used when listing it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

pub const PERSONAL: &str = "Personal";
pub const BUSINESS: &str = "Business";

/// Categories offered by the add form, in display order.
pub const BUILT_IN_CATEGORIES: [&str; 2] = [PERSONAL, BUSINESS];

/// A single expense entry. Records are immutable once created.
///
/// The category is stored as an opaque string and serialized under `type`, so
/// the persisted shape is `{"id", "name", "type", "amount"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseItem {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub amount: f64,
}

impl ExpenseItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            amount,
        }
    }

    pub fn is_in(&self, category: &str) -> bool {
        self.category == category
    }

    pub fn tier(&self) -> AmountTier {
        AmountTier::for_amount(self.amount)
    }
}

impl Identifiable for ExpenseItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for ExpenseItem {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}

/// Magnitude buckets driving color and weight in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountTier {
    /// Below 10.
    Low,
    /// From 10 up to, not including, 100.
    Medium,
    /// 100 and above.
    High,
}

impl AmountTier {
    pub fn for_amount(amount: f64) -> Self {
        if amount < 10.0 {
            AmountTier::Low
        } else if amount < 100.0 {
            AmountTier::Medium
        } else {
            AmountTier::High
        }
    }
}
