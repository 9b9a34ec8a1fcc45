use crate::classify::{classify, is_item_line};
use crate::fuzzy::is_close_match;
use crate::price::extract_price;
use crate::types::{Line, Receipt};

const TAX_LABELS: &[&str] = &["tax"];
const TAX_CUTOFF: f64 = 0.66;

/// Summary rows that are not purchases.
const EXTRA_INFO_LABELS: &[&str] = &["total", "balance", "count", "subtotal", "discount"];
const EXTRA_INFO_CUTOFF: f64 = 0.7;

pub fn is_tax(name: &str) -> bool {
    is_close_match(&name.to_lowercase(), TAX_LABELS, TAX_CUTOFF)
}

pub fn is_extra_info(name: &str) -> bool {
    is_close_match(&name.to_lowercase(), EXTRA_INFO_LABELS, EXTRA_INFO_CUTOFF)
}

/// Turn clustered lines into a receipt.
///
/// Lines are read in the order clustering produced them, with the price as
/// the first token and the item name as the second. A lone price followed
/// by a line opening with an item name is treated as one row the detector
/// split in two. Later prices for the same name replace earlier ones.
///
/// Afterwards the first tax-like entry moves into [`Receipt::tax`], and
/// totals, subtotals, balances, counts and discounts are dropped.
pub fn assemble(lines: &[Line]) -> Receipt {
    let mut receipt = Receipt::default();

    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        let Some(first) = line.first() else {
            i += 1;
            continue;
        };

        match (extract_price(first), lines.get(i + 1)) {
            (Some(price), Some(next)) if line.len() == 1 && is_item_line(next) => {
                tracing::debug!(price = %price, name = %next[0], "merged split line");
                receipt.insert(next[0].clone(), price);
                i += 2;
                continue;
            }
            (Some(price), _) if line.len() >= 2 => {
                receipt.insert(line[1].clone(), price);
            }
            _ => tracing::trace!(?line, kind = ?classify(line), "discarded line"),
        }
        i += 1;
    }

    extract_tax(&mut receipt);
    drop_extra_info(&mut receipt);
    receipt
}

/// Move the first tax-like entry into `receipt.tax`. At most one entry moves.
fn extract_tax(receipt: &mut Receipt) {
    if let Some(idx) = receipt.items.iter().position(|item| is_tax(&item.name)) {
        let item = receipt.items.remove(idx);
        tracing::debug!(name = %item.name, tax = %item.price, "extracted tax");
        receipt.tax = item.price;
    }
}

fn drop_extra_info(receipt: &mut Receipt) {
    receipt.items.retain(|item| {
        let extra = is_extra_info(&item.name);
        if extra {
            tracing::debug!(name = %item.name, price = %item.price, "dropped summary entry");
        }
        !extra
    });
}
