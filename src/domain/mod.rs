pub mod common;
pub mod expense;

pub use common::{Displayable, Identifiable};
pub use expense::{AmountTier, ExpenseItem, BUILT_IN_CATEGORIES, BUSINESS, PERSONAL};
