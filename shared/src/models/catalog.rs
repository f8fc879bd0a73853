//! Catalog Model

use serde::{Deserialize, Serialize};

/// A sellable item with a fixed unit price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub unit_price: i64,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, unit_price: i64) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }

    /// Picker label, e.g. `Alternagel - ₹200`
    pub fn label(&self, symbol: &str) -> String {
        format!("{} - {}", self.name, crate::money::format_amount(symbol, self.unit_price))
    }
}

/// Fixed, ordered list of items the till can sell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            CatalogItem::new("Alternagel", 200),
            CatalogItem::new("Bepanthen", 560),
            CatalogItem::new("Item 3", 300),
        ])
    }
}
