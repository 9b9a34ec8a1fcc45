use crate::price::{count_alpha, has_price};

/// Word-like tokens: longer than two characters, no readable price, and more
/// than three ASCII letters.
pub fn is_item(text: &str) -> bool {
    text.chars().count() > 2 && !has_price(text) && count_alpha(text) > 3
}

/// Exactly one token, and it holds a price.
pub fn is_single_price_line(line: &[String]) -> bool {
    matches!(line, [only] if has_price(only))
}

/// The first token reads as an item name.
pub fn is_item_line(line: &[String]) -> bool {
    line.first().is_some_and(|first| is_item(first))
}

/// A price followed by an item name and nothing else.
pub fn is_valid_receipt_line(line: &[String]) -> bool {
    matches!(line, [price, name] if has_price(price) && is_item(name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    SinglePrice,
    /// `[price, item]`
    PriceItem,
    /// Starts with an item name and carries no leading price.
    ItemOnly,
    Other,
}

/// Summarise a line. The individual predicates above can overlap in
/// principle; this picks the first that holds, in the order listed on
/// [`LineKind`].
pub fn classify(line: &[String]) -> LineKind {
    if line.is_empty() {
        LineKind::Empty
    } else if is_single_price_line(line) {
        LineKind::SinglePrice
    } else if is_valid_receipt_line(line) {
        LineKind::PriceItem
    } else if is_item_line(line) {
        LineKind::ItemOnly
    } else {
        LineKind::Other
    }
}
