//! Canteen menu
//!
//! The form submits a position into this list; nothing else identifies an item.

use shared::models::{MenuEntry, MenuItem};

use super::ValidationError;

/// Items offered when no other menu is configured
pub const DEFAULT_MENU: &[(&str, i64)] = &[
    ("Veg Sandwich", 40),
    ("Cheese Sandwich", 60),
    ("Masala Dosa", 80),
    ("Idli (2 pcs)", 35),
    ("Samosa (2 pcs)", 30),
    ("Pav Bhaji", 90),
    ("Maggi", 45),
    ("Aloo Paratha", 50),
    ("Fruit Bowl", 55),
    ("Cold Coffee", 70),
    ("Lassi", 50),
    ("Water Bottle", 20),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    /// Resolve the raw `item` form value to a menu entry
    ///
    /// Anything that is not a non-negative integer inside the list is
    /// [`ValidationError::InvalidItem`].
    pub fn resolve(&self, raw_index: &str) -> Result<&MenuItem, ValidationError> {
        raw_index
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| self.get(index))
            .ok_or(ValidationError::InvalidItem)
    }

    pub fn entries(&self) -> Vec<MenuEntry> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| MenuEntry {
                index,
                name: item.name.clone(),
                price: item.price,
            })
            .collect()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(
            DEFAULT_MENU
                .iter()
                .map(|(name, price)| MenuItem::new(*name, *price))
                .collect(),
        )
    }
}
