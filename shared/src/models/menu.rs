//! Menu Model

use serde::{Deserialize, Serialize};

/// A (name, price) pair offered on the order form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Price in whole currency units
    pub price: i64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Menu item together with the index the order form submits for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub index: usize,
    pub name: String,
    pub price: i64,
}
