use serde::{Deserialize, Serialize};
use slipscan_core::{Money, Quad};

/// One region read by the text detection engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub text: String,
    /// Recognition confidence (0.0–1.0) as reported by the engine.
    pub confidence: f32,
    pub quad: Quad,
}

impl Token {
    pub fn new(text: impl Into<String>, confidence: f32, quad: Quad) -> Self {
        Self { text: text.into(), confidence, quad }
    }
}

/// Token texts judged to sit on one physical row of the receipt.
///
/// Lines come out of clustering bottom row first, and the texts within a
/// line are in the reverse of the engine's detection order.
pub type Line = Vec<String>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptItem {
    pub name: String,
    pub price: Money,
}

/// Purchased items and the tax read off a receipt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    pub tax: Money,
    /// Unique names, in the order each name was first seen.
    pub items: Vec<ReceiptItem>,
}

impl Receipt {
    /// Set the price for `name`. A name seen before keeps its position and
    /// takes the new price.
    pub fn insert(&mut self, name: impl Into<String>, price: Money) {
        let name = name.into();
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(existing) => existing.price = price,
            None => self.items.push(ReceiptItem { name, price }),
        }
    }

    pub fn get(&self, name: &str) -> Option<Money> {
        self.items.iter().find(|item| item.name == name).map(|item| item.price)
    }

    pub fn remove(&mut self, name: &str) -> Option<Money> {
        let idx = self.items.iter().position(|item| item.name == name)?;
        Some(self.items.remove(idx).price)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices, tax excluded.
    pub fn items_total(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }
}
